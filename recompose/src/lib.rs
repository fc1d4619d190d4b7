//!
//! Re-type the output of a function without restating its signature.
//!
//! ```text
//!   subject:  (A0, A1, A2) ──────────────> R
//!                  │                       │
//!   modifier:     ((A0, A1, A2),           R) ──> U
//!
//!   composed: (A0, A1, A2) ──────────────────────> U
//! ```
//!
//! The argument types `A0..` and the result type `R` are never written down
//! by the caller. They are inferred from the subject function value, so any
//! bounds the subject places on its own type parameters keep applying to the
//! composed function, and the modifier sees the arguments with exactly the
//! subject's parameter types.
//!
//! ```
//! use recompose::subject::{gigantic_generic_function, Labeled, A};
//!
//! #[derive(Debug, PartialEq)]
//! struct Cleaner<T> {
//!     a_cleaner_return_type: T,
//! }
//!
//! let cleaner = recompose::compose3(gigantic_generic_function, |(t, _u, _v), _r| Cleaner {
//!     a_cleaner_return_type: t,
//! });
//!
//! assert_eq!(
//!     cleaner(1, Labeled::new("x"), A),
//!     Cleaner { a_cleaner_return_type: 1 }
//! );
//! ```
//!

pub mod callable;
pub mod compose;
pub mod modifier;
pub mod subject;

pub use callable::{Callable, CallableExt};
pub use compose::*;
