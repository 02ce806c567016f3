use super::{Natural, PairingError, Result};

/// Implemented by bijections between tuples of [`Natural`]s and single
/// `Natural`s.
///
/// A tuple is passed as a slice whose length is [`Pairing::arity()`]. For
/// every tuple within the per-axis bounds, `split(join(tuple)) == tuple`, and
/// for every code that some such tuple joins to, `join(split(code)) == code`.
///
/// The `try_` methods report violated preconditions as [`PairingError`]s.
/// [`Pairing::join()`] and [`Pairing::split()`] panic instead, because a
/// caller that carries on with a wrong index would silently corrupt whatever
/// it indexes.
pub trait Pairing<T: Natural> {
    /// The length of the tuples accepted by [`Pairing::join()`].
    fn arity(&self) -> usize;

    /// The size of each axis followed by the number of distinct codes. A
    /// size of zero means unbounded.
    fn bounds(&self) -> Vec<T>;

    /// Encodes `tuple` as a single code.
    fn try_join(&self, tuple: &[T]) -> Result<T>;

    /// Decodes `code` back into the tuple it encodes.
    fn try_split(&self, code: T) -> Result<Vec<T>>;

    /// Like [`Pairing::try_join()`].
    ///
    /// # Panics
    ///
    /// Panics if `tuple` has the wrong length or is out of bounds.
    fn join(&self, tuple: &[T]) -> T {
        self.try_join(tuple).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Like [`Pairing::try_split()`].
    ///
    /// # Panics
    ///
    /// Panics if `code` is out of range.
    fn split(&self, code: T) -> Vec<T> {
        self.try_split(code).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The number of distinct codes, or `None` if it is unbounded.
    fn total(&self) -> Option<T> {
        self.bounds().last().copied().filter(|t| !t.is_zero())
    }
}

/// Checks that `tuple` has length `arity`.
pub(crate) fn check_arity<T>(tuple: &[T], arity: usize) -> Result<()> {
    if tuple.len() != arity {
        return Err(PairingError::ArityMismatch {expected: arity, got: tuple.len()});
    }
    Ok(())
}

// ----------------------------------------------------------------------------

impl<T: Natural, P: Pairing<T> + ?Sized> Pairing<T> for &P {
    fn arity(&self) -> usize { (**self).arity() }
    fn bounds(&self) -> Vec<T> { (**self).bounds() }
    fn try_join(&self, tuple: &[T]) -> Result<T> { (**self).try_join(tuple) }
    fn try_split(&self, code: T) -> Result<Vec<T>> { (**self).try_split(code) }
}

impl<T: Natural, P: Pairing<T> + ?Sized> Pairing<T> for Box<P> {
    fn arity(&self) -> usize { (**self).arity() }
    fn bounds(&self) -> Vec<T> { (**self).bounds() }
    fn try_join(&self, tuple: &[T]) -> Result<T> { (**self).try_join(tuple) }
    fn try_split(&self, code: T) -> Result<Vec<T>> { (**self).try_split(code) }
}
