use super::{Natural, BinaryPairing};

/// Chooses a [`BinaryPairing`] for axes of size `sx` and `sy`, where zero
/// means unbounded.
///
/// - Both unbounded: `innermost`.
/// - Only `x` unbounded: [`BinaryPairing::StackX`].
/// - Only `y` unbounded: [`BinaryPairing::StackY`].
/// - Both bounded: [`BinaryPairing::Field`]. `sx * sy` must fit in `T`;
///   this is checked in debug builds.
///
/// ```
/// use number_pairings::{BinaryPairing, select};
/// let cantor = BinaryPairing::<u32>::cantor();
/// assert_eq!(select(0, 0, &cantor), cantor);
/// assert_eq!(select(0, 5, &cantor), BinaryPairing::stack_x(5));
/// assert_eq!(select(5, 0, &cantor), BinaryPairing::stack_y(5));
/// assert_eq!(select(4, 5, &cantor), BinaryPairing::field(4, 5));
/// ```
pub fn select<T: Natural>(sx: T, sy: T, innermost: &BinaryPairing<T>) -> BinaryPairing<T> {
    match (sx.is_zero(), sy.is_zero()) {
        (true, true) => *innermost,
        (true, false) => BinaryPairing::StackX {sy},
        (false, true) => BinaryPairing::StackY {sx},
        (false, false) => {
            debug_assert!(sx.checked_mul(&sy).is_some(), "Field size {} * {} overflows", sx, sy);
            BinaryPairing::Field {sx, sy}
        },
    }
}

/// [`select()`] with [`BinaryPairing::Cantor`] for two unbounded axes.
#[inline(always)]
pub fn select_default<T: Natural>(sx: T, sy: T) -> BinaryPairing<T> {
    select(sx, sy, &BinaryPairing::Cantor)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pairing;

    fn assert_same<P: Pairing<u64>, Q: Pairing<u64>>(p: &P, q: &Q, xs: u64, ys: u64) {
        assert_eq!(p.bounds(), q.bounds());
        for x in 0..xs {
            for y in 0..ys {
                let z = p.join(&[x, y]);
                assert_eq!(q.join(&[x, y]), z);
                assert_eq!(q.split(z), vec![x, y]);
            }
        }
    }

    #[test]
    fn unbounded_uses_innermost() {
        assert_same(&select_default(0u64, 0), &BinaryPairing::cantor(), 50, 50);
        let elegant = BinaryPairing::elegant();
        assert_same(&select(0u64, 0, &elegant), &elegant, 50, 50);
        let power = BinaryPairing::power_of_two();
        assert_same(&select(0u64, 0, &power), &power, 20, 50);
    }

    #[test]
    fn half_bounded() {
        assert_same(&select_default(0u64, 7), &BinaryPairing::stack_x(7), 50, 7);
        assert_same(&select_default(7u64, 0), &BinaryPairing::stack_y(7), 7, 50);
    }

    #[test]
    fn bounded() {
        assert_same(&select_default(6u64, 9), &BinaryPairing::field(6, 9), 6, 9);
        // The innermost pairing only matters when both axes are unbounded.
        assert_eq!(select(6u64, 9, &BinaryPairing::half()), BinaryPairing::field(6, 9));
        assert_eq!(select_default(15u8, 17).sizes(), [15, 17, 255]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Field size 200 * 200 overflows")]
    fn overflowing_field() {
        select_default(200u8, 200);
    }
}
