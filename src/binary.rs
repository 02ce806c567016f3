//! Bijections between pairs of [`Natural`]s and single `Natural`s.
//!
//! [`BinaryPairing`] is a closed set of pairing functions. Four of them pair
//! two unbounded axes and differ in the order in which they enumerate the
//! plane. The other three specialise to one or two bounded axes, which makes
//! them denser.
//!
//! ```
//! use number_pairings::BinaryPairing;
//! let p = BinaryPairing::<u64>::cantor();
//! assert_eq!(p.pair(10, 34), 1024);
//! assert_eq!(p.unpair(1024), (10, 34));
//! ```

use std::fmt;

use num_traits::{NumCast};
use serde::{Deserialize, Serialize};

use super::{Natural, Pairing, PairingError, Result, triangular, inverse_triangular, remainder};
use super::int::{bits, two, wide};
use super::pairing::{check_arity};

/// A pairing function of two axes.
///
/// The sizes stored in the bounded variants are exclusive upper bounds. Use
/// the constructors, which check that they are positive; a zero size is only
/// meaningful as "unbounded", which is expressed by choosing a different
/// variant (see [`select()`]).
///
/// [`select()`]: fn@crate::select
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BinaryPairing<T> {
    /// Enumerates the plane along diagonals: `triangular(x + y) + y`.
    Cantor,

    /// Enumerates the plane in square shells, which keeps nearly equal
    /// `x` and `y` close together.
    Elegant,

    /// Pairs an exponent with an odd number: `2^x * (2y + 1) - 1`.
    PowerOfTwo,

    /// Encodes unordered pairs, so `(x, y)` and `(y, x)` share a code.
    /// Splitting returns the smaller value first.
    Half,

    /// Both axes bounded: `x < sx` and `y < sy`. Codes are `0..sx * sy`.
    Field { sx: T, sy: T },

    /// `x` unbounded and `y < sy`.
    StackX { sy: T },

    /// `x < sx` and `y` unbounded.
    StackY { sx: T },
}

impl<T> Default for BinaryPairing<T> {
    fn default() -> Self { BinaryPairing::Cantor }
}

/// Checks that `value` is a valid coordinate on an axis of size `size`.
fn check_axis<T: Natural>(axis: usize, value: T, size: T) -> Result<()> {
    if size.is_zero() { return Err(PairingError::EmptyAxis {axis}); }
    if value >= size {
        return Err(PairingError::OutOfBounds {axis, value: wide(value), size: wide(size)});
    }
    Ok(())
}

/// Checks that a bounded axis is not empty.
fn check_size<T: Natural>(axis: usize, size: T) -> Result<()> {
    if size.is_zero() { Err(PairingError::EmptyAxis {axis}) } else { Ok(()) }
}

impl<T: Natural> BinaryPairing<T> {
    pub fn cantor() -> Self { BinaryPairing::Cantor }

    pub fn elegant() -> Self { BinaryPairing::Elegant }

    pub fn power_of_two() -> Self { BinaryPairing::PowerOfTwo }

    pub fn half() -> Self { BinaryPairing::Half }

    /// Constructs a [`BinaryPairing::Field`] of `sx` by `sy`.
    ///
    /// # Panics
    ///
    /// Panics if either size is zero or if `sx * sy` does not fit in `T`.
    pub fn field(sx: T, sy: T) -> Self {
        assert!(!sx.is_zero() && !sy.is_zero(), "Field sizes ({}, {}) must be positive", sx, sy);
        assert!(sx.checked_mul(&sy).is_some(), "Field size {} * {} overflows", sx, sy);
        BinaryPairing::Field {sx, sy}
    }

    /// Constructs a [`BinaryPairing::StackX`] with `y < sy`.
    ///
    /// # Panics
    ///
    /// Panics if `sy` is zero.
    pub fn stack_x(sy: T) -> Self {
        assert!(!sy.is_zero(), "StackX size must be positive");
        BinaryPairing::StackX {sy}
    }

    /// Constructs a [`BinaryPairing::StackY`] with `x < sx`.
    ///
    /// # Panics
    ///
    /// Panics if `sx` is zero.
    pub fn stack_y(sx: T) -> Self {
        assert!(!sx.is_zero(), "StackY size must be positive");
        BinaryPairing::StackY {sx}
    }

    /// Returns `true` if neither axis is bounded.
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Cantor | Self::Elegant | Self::PowerOfTwo | Self::Half)
    }

    /// Returns `[sx, sy, total]`, where zero means unbounded. `total` is
    /// only finite if both axes are.
    pub fn sizes(&self) -> [T; 3] {
        let zero = T::zero();
        match *self {
            Self::Cantor | Self::Elegant | Self::PowerOfTwo | Self::Half => [zero, zero, zero],
            Self::Field {sx, sy} => [sx, sy, sx * sy],
            Self::StackX {sy} => [zero, sy, zero],
            Self::StackY {sx} => [sx, zero, zero],
        }
    }

    /// Encodes `(x, y)` as a single code.
    ///
    /// Bounded axes are checked. For [`BinaryPairing::PowerOfTwo`] only the
    /// exponent is checked against the width of `T`; like the other unbounded
    /// pairings, a code that does not fit in `T` overflows as ordinary
    /// integer arithmetic does.
    pub fn try_pair(&self, x: T, y: T) -> Result<T> {
        let one = T::one();
        Ok(match *self {
            Self::Cantor => triangular(x + y) + y,
            Self::Elegant => if y >= x { y * (y + one) + x } else { x * x + y },
            Self::PowerOfTwo => {
                let shift = x.to_usize()
                    .filter(|&shift| shift < bits::<T>() as usize)
                    .ok_or(PairingError::ExponentOverflow {exponent: wide(x), bits: bits::<T>()})?;
                (one << shift) * (two::<T>() * y + one) - one
            },
            Self::Half => triangular(x.max(y)) + x.min(y),
            Self::Field {sx, sy} => {
                check_axis(0, x, sx)?;
                check_axis(1, y, sy)?;
                sx * y + x % sx
            },
            Self::StackX {sy} => {
                check_axis(1, y, sy)?;
                y % sy + sy * x
            },
            Self::StackY {sx} => {
                check_axis(0, x, sx)?;
                sx * y + x % sx
            },
        })
    }

    /// Decodes `code` into the pair it encodes.
    pub fn try_unpair(&self, code: T) -> Result<(T, T)> {
        let z = code;
        Ok(match *self {
            Self::Cantor => {
                let t = inverse_triangular(z);
                let base = triangular(t);
                (base + t - z, z - base)
            },
            Self::Elegant => {
                let s = z.sqrt();
                let t = z - s * s;
                if t < s { (s, t) } else { (t - s, s) }
            },
            Self::PowerOfTwo => {
                // The smallest `i` for which `(z + 1) / 2^i` is odd is the
                // number of trailing zero bits of `z + 1`.
                let exhausted = PairingError::SearchExhausted {code: wide(z)};
                let n = z.checked_add(&T::one()).ok_or_else(|| exhausted.clone())?;
                let i = n.trailing_zeros();
                let x = <T as NumCast>::from(i).ok_or(exhausted)?;
                (x, (n >> i as usize) / two())
            },
            Self::Half => (remainder(z), inverse_triangular(z)),
            Self::Field {sx, sy} => {
                check_size(0, sx)?;
                check_size(1, sy)?;
                if let Some(total) = sx.checked_mul(&sy) {
                    if z >= total {
                        return Err(PairingError::OutOfRange {code: wide(z), total: wide(total)});
                    }
                }
                (z % sx, z / sx)
            },
            Self::StackX {sy} => {
                check_size(1, sy)?;
                (z / sy, z % sy)
            },
            Self::StackY {sx} => {
                check_size(0, sx)?;
                (z % sx, z / sx)
            },
        })
    }

    /// Like [`Self::try_pair()`].
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn pair(&self, x: T, y: T) -> T {
        self.try_pair(x, y).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Like [`Self::try_unpair()`].
    ///
    /// # Panics
    ///
    /// Panics if `code` is out of range.
    pub fn unpair(&self, code: T) -> (T, T) {
        self.try_unpair(code).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Natural> Pairing<T> for BinaryPairing<T> {
    fn arity(&self) -> usize { 2 }

    fn bounds(&self) -> Vec<T> { self.sizes().to_vec() }

    fn try_join(&self, tuple: &[T]) -> Result<T> {
        check_arity(tuple, 2)?;
        self.try_pair(tuple[0], tuple[1])
    }

    fn try_split(&self, code: T) -> Result<Vec<T>> {
        let (x, y) = self.try_unpair(code)?;
        Ok(vec![x, y])
    }
}

impl<T: fmt::Display> fmt::Display for BinaryPairing<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Cantor => write!(f, "cantor"),
            Self::Elegant => write!(f, "elegant"),
            Self::PowerOfTwo => write!(f, "power_of_two"),
            Self::Half => write!(f, "half"),
            Self::Field {sx, sy} => write!(f, "field({}, {})", sx, sy),
            Self::StackX {sy} => write!(f, "stack_x({})", sy),
            Self::StackY {sx} => write!(f, "stack_y({})", sx),
        }
    }
}

// ----------------------------------------------------------------------------
