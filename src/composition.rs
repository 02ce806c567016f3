//! Pairing functions of more than two axes, built by chaining
//! [`BinaryPairing`]s.
//!
//! A [`Composition`] of `n` axes owns `n - 1` links. The last link pairs the
//! last two axes, and each earlier link pairs its own axis with the code of
//! everything to its right:
//!
//! ```text
//! join([a, b, c, d]) = link0(a, link1(b, link2(c, d)))
//! ```
//!
//! Each link is chosen by [`select()`] from the size of its axis and the
//! combined size of the axes to its right, so the links must be built from
//! right to left.
//!
//! ```
//! use number_pairings::{Composition, Pairing};
//! let c = Composition::<u64>::new([2, 3, 4, 5, 6, 7]);
//! assert_eq!(c.join(&[0, 1, 2, 3, 4, 5]), 4166);
//! assert_eq!(c.split(4166), [0, 1, 2, 3, 4, 5]);
//! assert_eq!(c.total(), Some(5040));
//! ```

use serde::{Deserialize, Serialize};

use super::{Natural, BinaryPairing, Pairing, PairingError, Result, select};
use super::int::{bits, wide};
use super::pairing::{check_arity};

/// A pairing function of two or more axes. See the [module docs].
///
/// [module docs]: self
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composition<T> {
    /// The size of each axis. Zero means unbounded.
    dims: Vec<T>,
    /// Used by [`select()`] when both operands are unbounded.
    innermost: BinaryPairing<T>,
    /// `links[i]` pairs axis `i` with the code of axes `i + 1..`.
    links: Vec<BinaryPairing<T>>,
    /// The number of distinct codes, or zero if unbounded.
    total: T,
}

impl<T: Natural> Composition<T> {
    /// Constructs a `Composition` of axes of size `dims`, using
    /// [`BinaryPairing::Cantor`] wherever two unbounded operands meet.
    ///
    /// # Panics
    ///
    /// As [`Self::try_new()`].
    pub fn new(dims: impl Into<Vec<T>>) -> Self {
        Self::with_innermost(dims, BinaryPairing::Cantor)
    }

    /// Constructs a `Composition` of axes of size `dims`, using `innermost`
    /// wherever two unbounded operands meet.
    ///
    /// # Panics
    ///
    /// As [`Self::try_new()`].
    pub fn with_innermost(dims: impl Into<Vec<T>>, innermost: BinaryPairing<T>) -> Self {
        Self::try_new(dims, innermost).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Constructs a `Composition` of axes of size `dims`, using `innermost`
    /// wherever two unbounded operands meet.
    ///
    /// Fails if there are fewer than two axes, if `innermost` bounds either
    /// of its axes, or if the number of distinct codes is finite but does not
    /// fit in `T`.
    pub fn try_new(dims: impl Into<Vec<T>>, innermost: BinaryPairing<T>) -> Result<Self> {
        let dims = dims.into();
        let n = dims.len();
        if n < 2 { return Err(PairingError::TooFewDimensions {got: n}); }
        if !innermost.is_unbounded() {
            return Err(PairingError::BoundedInnermost {pairing: innermost.to_string()});
        }
        let overflow = || PairingError::TotalOverflow {
            dims: dims.iter().copied().map(wide).collect(),
            bits: bits::<T>(),
        };
        // Built right to left, then reversed.
        let mut links = Vec::with_capacity(n - 1);
        let mut right = dims[n - 1];
        for i in (0..n - 1).rev() {
            if !dims[i].is_zero() && !right.is_zero() && dims[i].checked_mul(&right).is_none() {
                return Err(overflow());
            }
            let link = select(dims[i], right, &innermost);
            right = link.sizes()[2];
            links.push(link);
        }
        links.reverse();
        let total = right;
        tracing::debug!(dims = ?dims, innermost = %innermost, links = ?links, total = %total, "built pairing composition");
        Ok(Self {dims, innermost, links, total})
    }

    /// The size of each axis. Zero means unbounded.
    pub fn dims(&self) -> &[T] { &self.dims }

    pub fn innermost(&self) -> &BinaryPairing<T> { &self.innermost }

    /// The chain of binary pairings, leftmost first. There is one fewer link
    /// than there are axes.
    pub fn links(&self) -> &[BinaryPairing<T>] { &self.links }

    /// The parameters from which `self` can be rebuilt.
    pub fn config(&self) -> CompositionConfig<T> {
        CompositionConfig {dims: self.dims.clone(), innermost: self.innermost}
    }
}

impl<T: Natural> Pairing<T> for Composition<T> {
    fn arity(&self) -> usize { self.dims.len() }

    fn bounds(&self) -> Vec<T> {
        let mut bounds = self.dims.clone();
        bounds.push(self.total);
        bounds
    }

    fn try_join(&self, tuple: &[T]) -> Result<T> {
        check_arity(tuple, self.dims.len())?;
        for (axis, (&value, &size)) in tuple.iter().zip(&self.dims).enumerate() {
            if !size.is_zero() && value >= size {
                return Err(PairingError::OutOfBounds {axis, value: wide(value), size: wide(size)});
            }
        }
        let n = tuple.len();
        let mut code = self.links[n - 2].try_pair(tuple[n - 2], tuple[n - 1])?;
        for i in (0..n - 2).rev() {
            code = self.links[i].try_pair(tuple[i], code)?;
        }
        Ok(code)
    }

    fn try_split(&self, code: T) -> Result<Vec<T>> {
        if !self.total.is_zero() && code >= self.total {
            return Err(PairingError::OutOfRange {code: wide(code), total: wide(self.total)});
        }
        let mut tuple = Vec::with_capacity(self.dims.len());
        let mut rest = code;
        for link in &self.links {
            let (value, r) = link.try_unpair(rest)?;
            tuple.push(value);
            rest = r;
        }
        tuple.push(rest);
        Ok(tuple)
    }
}

// ----------------------------------------------------------------------------

/// The parameters of a [`Composition`], in a form that can be stored and
/// loaded with any `serde` format.
///
/// ```
/// use number_pairings::{BinaryPairing, CompositionConfig, Pairing};
/// let config: CompositionConfig<u64> = CompositionConfig {
///     dims: vec![0, 10, 0],
///     innermost: BinaryPairing::elegant(),
/// };
/// let c = config.build().unwrap();
/// assert_eq!(c.split(c.join(&[123, 4, 56])), [123, 4, 56]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompositionConfig<T> {
    /// The size of each axis. Zero means unbounded.
    pub dims: Vec<T>,

    /// Defaults to [`BinaryPairing::Cantor`].
    #[serde(default)]
    pub innermost: BinaryPairing<T>,
}

impl<T: Natural> CompositionConfig<T> {
    /// Constructs the described [`Composition`].
    pub fn build(&self) -> Result<Composition<T>> {
        Composition::try_new(self.dims.clone(), self.innermost)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: [u64; 6] = [2, 3, 4, 5, 6, 7];

    #[test]
    fn regression() {
        let c = Composition::new(DIMS);
        assert_eq!(c.join(&[0, 1, 2, 3, 4, 5]), 4166);
        assert_eq!(c.split(4166), [0, 1, 2, 3, 4, 5]);
        assert_eq!(c.bounds(), [2, 3, 4, 5, 6, 7, 5040]);
        assert_eq!(c.links(), [
            BinaryPairing::field(2, 2520),
            BinaryPairing::field(3, 840),
            BinaryPairing::field(4, 210),
            BinaryPairing::field(5, 42),
            BinaryPairing::field(6, 7),
        ]);
    }

    #[test]
    fn unit_basis() {
        let c = Composition::new(DIMS);
        let codes: Vec<u64> = (0..DIMS.len()).map(|axis| {
            let mut tuple = [0; 6];
            tuple[axis] = 1;
            c.join(&tuple)
        }).collect();
        assert_eq!(codes, [1, 2, 6, 24, 120, 720]);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dense_when_bounded() {
        let c = Composition::new(DIMS);
        for z in 0..5040 {
            let tuple = c.split(z);
            for (&v, &d) in tuple.iter().zip(&DIMS) { assert!(v < d); }
            assert_eq!(c.join(&tuple), z);
        }
        assert_eq!(c.try_split(5040), Err(PairingError::OutOfRange {code: 5040, total: 5040}));
    }

    #[test]
    fn two_axes_match_select() {
        let cantor = BinaryPairing::<u64>::cantor();
        for (sx, sy) in [(0, 0), (0, 50), (50, 0), (50, 50)] {
            let c = Composition::new([sx, sy]);
            let p = select(sx, sy, &cantor);
            assert_eq!(c.links(), [p]);
            assert_eq!(c.bounds(), p.bounds());
            assert_eq!(c.join(&[10, 34]), p.pair(10, 34));
            assert_eq!(c.split(p.pair(10, 34)), [10, 34]);
        }
    }

    #[test]
    fn unbounded_axes() {
        let c = Composition::<u64>::new([0, 3, 0, 0]);
        assert_eq!(c.total(), None);
        assert_eq!(c.links(), [
            BinaryPairing::Cantor,
            BinaryPairing::stack_y(3),
            BinaryPairing::Cantor,
        ]);
        for a in 0..12 {
            for b in 0..3 {
                for d in 0..12 {
                    let tuple = [a, b, 7, d];
                    assert_eq!(c.split(c.join(&tuple)), tuple);
                }
            }
        }
        for z in 0..20_000 {
            assert_eq!(c.join(&c.split(z)), z);
        }
    }

    #[test]
    fn innermost_is_used_everywhere() {
        let c = Composition::<u64>::with_innermost([0, 0, 0], BinaryPairing::elegant());
        assert_eq!(c.links(), [BinaryPairing::Elegant, BinaryPairing::Elegant]);
        assert_eq!(c.innermost(), &BinaryPairing::Elegant);
        let e = BinaryPairing::<u64>::elegant();
        assert_eq!(c.join(&[3, 4, 5]), e.pair(3, e.pair(4, 5)));
    }

    #[test]
    fn bounded_axis_left_of_unbounded() {
        let c = Composition::<u64>::new([4, 0, 5]);
        assert_eq!(c.links(), [BinaryPairing::stack_y(4), BinaryPairing::stack_x(5)]);
        assert_eq!(c.split(c.join(&[3, 1000, 4])), [3, 1000, 4]);
    }

    #[test]
    fn preconditions() {
        assert_eq!(
            Composition::<u64>::try_new([7], BinaryPairing::Cantor),
            Err(PairingError::TooFewDimensions {got: 1}),
        );
        assert!(matches!(
            Composition::<u8>::try_new([16, 16, 2], BinaryPairing::Cantor),
            Err(PairingError::TotalOverflow {bits: 8, ..}),
        ));
        let c = Composition::new(DIMS);
        assert_eq!(
            c.try_join(&[0, 1, 2]),
            Err(PairingError::ArityMismatch {expected: 6, got: 3}),
        );
        assert_eq!(
            c.try_join(&[0, 1, 4, 0, 0, 0]),
            Err(PairingError::OutOfBounds {axis: 2, value: 4, size: 4}),
        );
    }

    #[test]
    fn bounded_innermost_is_rejected() {
        let field = BinaryPairing::<u64>::field(3, 3);
        assert_eq!(
            Composition::try_new([0, 0, 0], field),
            Err(PairingError::BoundedInnermost {pairing: "field(3, 3)".to_string()}),
        );
        assert!(matches!(
            Composition::<u64>::try_new([0, 4], BinaryPairing::stack_x(2)),
            Err(PairingError::BoundedInnermost {..}),
        ));

        let config: CompositionConfig<u64> = serde_json::from_str(
            r#"{"dims": [0, 0, 0], "innermost": {"kind": "stack_y", "sx": 5}}"#,
        ).unwrap();
        assert_eq!(
            config.build(),
            Err(PairingError::BoundedInnermost {pairing: "stack_y(5)".to_string()}),
        );
    }

    #[test]
    #[should_panic(expected = "must pair two unbounded axes")]
    fn with_bounded_innermost_panics() {
        Composition::<u64>::with_innermost([0, 0], BinaryPairing::field(3, 3));
    }

    #[test]
    #[should_panic(expected = "at least 2 dimensions")]
    fn empty_composition() {
        Composition::<u32>::new(Vec::new());
    }

    #[test]
    fn config() {
        let c = Composition::<u64>::with_innermost([0, 9, 0], BinaryPairing::half());
        assert_eq!(c.config().build(), Ok(c.clone()));

        let json = serde_json::to_string(&c.config()).unwrap();
        let config: CompositionConfig<u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(config.build().unwrap(), c);

        let config: CompositionConfig<u64> = serde_json::from_str(r#"{"dims": [2, 0]}"#).unwrap();
        assert_eq!(config.innermost, BinaryPairing::Cantor);
        assert_eq!(config.build().unwrap().links(), [BinaryPairing::stack_y(2)]);

        let config: CompositionConfig<u64> = serde_json::from_str(
            r#"{"dims": [0, 0], "innermost": {"kind": "power_of_two"}}"#,
        ).unwrap();
        assert_eq!(config.build().unwrap().links(), [BinaryPairing::PowerOfTwo]);
    }
}
