//!
//! Composition of a subject function with a modifier.
//!
//! `composeN(subject, modifier)` gives back a function of the same `N`
//! arguments as `subject`. Calling it calls `subject`, then hands the
//! argument tuple and the result to `modifier`, and returns the modifier's
//! output instead:
//!
//! ```
//! use recompose::subject::very_simple_generic;
//!
//! let is_one = recompose::compose1(very_simple_generic, |(_s,), r| r == 1.0);
//!
//! assert!(is_one("1"));
//! assert!(!is_one("2"));
//! ```
//!
//! Bounds on the subject's type parameters carry over to the composed function,
//! even though no `compose` function mentions them:
//!
//! ```compile_fail,E0277
//! use recompose::subject::{gigantic_generic_function, Labeled, A};
//!
//! let composed = recompose::compose3(gigantic_generic_function, |(t, _u, _v), _r| t);
//!
//! // `&str` is not a `Scalar`
//! composed("1", Labeled::new("x"), A);
//! ```
//!
//! ```compile_fail,E0277
//! use recompose::subject::{gigantic_generic_function, Labeled};
//!
//! let composed = recompose::compose3(gigantic_generic_function, |(t, _u, _v), _r| t);
//!
//! // `char` is not a `Letter`
//! composed(1, Labeled::new("x"), 'z');
//! ```
//!
//! Every argument type must be `Clone`, since the arguments are handed to
//! the subject and then to the modifier. Shared references always are.
//!

use crate::callable::Callable;

recompose_macros::arities!(12);

/// A subject function together with a modifier of its output.
///
/// Unlike the closures returned by `composeN`, this type can be named,
/// for example as a struct field. It is called through [Callable],
/// with the arguments bundled in a tuple.
///
/// ```
/// use recompose::{Callable, CallableExt};
///
/// fn len(s: &str) -> usize {
///     s.len()
/// }
///
/// let is_short = len.map_output(|_: (&str,), n: usize| n < 4);
///
/// assert!(is_short.call(("abc",)));
/// assert!(!is_short.call(("abcd",)));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Composed<F, M> {
    subject: F,
    modifier: M,
}

impl<F, M> Composed<F, M> {
    pub fn new(subject: F, modifier: M) -> Self {
        Self { subject, modifier }
    }
}

impl<F, M, Args, U> Callable<Args> for Composed<F, M>
where
    F: Callable<Args>,
    M: Fn(Args, F::Output) -> U,
    Args: Clone,
{
    type Output = U;

    fn call(&self, args: Args) -> U {
        log::trace!("composed call");

        let result = self.subject.call(args.clone());
        (self.modifier)(args, result)
    }
}
