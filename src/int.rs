//! Natural numbers and the triangular-number helpers built on them.
//!
//! Every pairing in this crate is generic over a [`Natural`], which is any
//! unsigned primitive integer type. Square roots are exact integer roots, so
//! there is no floating-point rounding to misclassify a boundary value.

use std::fmt::{Debug, Display};
use std::hash::{Hash};

use num_integer::{Integer, Roots};
use num_traits::{PrimInt, Unsigned};

/// An unsigned primitive integer: `u8`, `u16`, `u32`, `u64`, `u128` or
/// `usize`.
///
/// The crate does not check that the chosen width can represent the codes it
/// produces. Unbounded pairings overflow like ordinary integer arithmetic.
pub trait Natural:
    PrimInt + Unsigned + Integer + Roots + Debug + Display + Hash + Send + Sync + 'static
{}

impl<T> Natural for T where
    T: PrimInt + Unsigned + Integer + Roots + Debug + Display + Hash + Send + Sync + 'static,
{}

#[inline(always)]
pub(crate) fn two<T: Natural>() -> T { T::one() + T::one() }

/// The number of bits in `T`.
#[inline(always)]
pub(crate) fn bits<T: Natural>() -> u32 { T::zero().count_zeros() }

/// Widens `x` for error reporting.
#[inline(always)]
pub(crate) fn wide<T: Natural>(x: T) -> u128 { x.to_u128().unwrap_or(u128::MAX) }

// ----------------------------------------------------------------------------

/// Returns `x * (x + 1) / 2`.
///
/// The halving happens before the multiplication, so the result is exact
/// whenever it fits in `T`.
///
/// ```
/// use number_pairings::triangular;
/// assert_eq!(triangular(0u32), 0);
/// assert_eq!(triangular(4u32), 10);
/// assert_eq!(triangular(44u64), 990);
/// ```
pub fn triangular<T: Natural>(x: T) -> T {
    if x.is_even() { (x / two()) * (x + T::one()) } else { x * ((x + T::one()) / two()) }
}

/// Returns `Some(triangular(t))`, or `None` if it does not fit in `T`.
fn checked_triangular<T: Natural>(t: T) -> Option<T> {
    let (a, b) = if t.is_even() { (t / two(), t + T::one()) } else { (t, (t + T::one()) / two()) };
    a.checked_mul(&b)
}

/// Returns the largest `t` such that `triangular(t) <= x`.
///
/// ```
/// use number_pairings::inverse_triangular;
/// assert_eq!(inverse_triangular(0u32), 0);
/// assert_eq!(inverse_triangular(9u32), 3);
/// assert_eq!(inverse_triangular(10u32), 4);
/// assert_eq!(inverse_triangular(u8::MAX), 22);
/// ```
pub fn inverse_triangular<T: Natural>(x: T) -> T {
    let fits = |t: T| checked_triangular(t).map_or(false, |n| n <= x);
    // `2 * isqrt(x / 2)` is within two of the answer.
    let mut t = (x / two()).sqrt() * two();
    while !fits(t) { t = t - T::one(); }
    while fits(t + T::one()) { t = t + T::one(); }
    t
}

/// Returns the position of `x` within its triangular row, i.e.
/// `x - triangular(inverse_triangular(x))`.
///
/// ```
/// use number_pairings::remainder;
/// assert_eq!(remainder(10u32), 0);
/// assert_eq!(remainder(14u32), 4);
/// ```
pub fn remainder<T: Natural>(x: T) -> T { x - triangular(inverse_triangular(x)) }

// ----------------------------------------------------------------------------
