//! A pure-Rust library of *pairing functions*: bijections between tuples of
//! natural numbers and single natural numbers.
//!
//! [`BinaryPairing`] provides several bijections between pairs and codes.
//! [`BinaryPairing::Cantor`], [`BinaryPairing::Elegant`] and
//! [`BinaryPairing::PowerOfTwo`] pair two unbounded axes, and differ in the
//! order in which they enumerate the plane. [`BinaryPairing::Half`] encodes
//! unordered pairs. [`BinaryPairing::Field`], [`BinaryPairing::StackX`] and
//! [`BinaryPairing::StackY`] exploit bounded axes to produce denser codes.
//!
//! [`select()`] picks the appropriate `BinaryPairing` for a pair of axis
//! sizes, where a size of zero means "unbounded". [`Composition`] uses it to
//! chain `BinaryPairing`s into a pairing of any number of axes.
//!
//! All of these implement trait [`Pairing`], which provides
//! [`Pairing::join()`], [`Pairing::split()`] and [`Pairing::bounds()`]. They
//! are generic over the integer type, which can be any [`Natural`].
//!
//! ```
//! use number_pairings::{Composition, Pairing};
//! // A 4 x unbounded x 3 grid.
//! let grid = Composition::<u64>::new([4, 0, 3]);
//! let code = grid.join(&[2, 1000, 1]);
//! assert_eq!(grid.split(code), [2, 1000, 1]);
//! assert_eq!(grid.total(), None);
//! ```

mod int;
pub use int::{Natural, triangular, inverse_triangular, remainder};

mod error;
pub use error::{PairingError, Result};

mod pairing;
pub use pairing::{Pairing};

pub mod binary;
pub use binary::{BinaryPairing};

mod select;
pub use select::{select, select_default};

pub mod composition;
pub use composition::{Composition, CompositionConfig};
