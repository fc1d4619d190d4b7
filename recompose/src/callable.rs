//!
//! Calling function values with a bundled argument tuple.
//!

use crate::compose::Composed;

/// Something that can be called with the argument tuple `Args`.
///
/// Implemented for every `Fn` of up to twelve arguments, where `Args` is
/// the tuple of its parameter types (`()` for no arguments, `(A0,)` for one),
/// and for [Composed].
pub trait Callable<Args> {
    type Output;

    fn call(&self, args: Args) -> Self::Output;
}

/// Combinators available on anything callable.
pub trait CallableExt: Sized {
    /// Replace the output of `self` by what `modifier` makes of
    /// the argument tuple and the original output.
    ///
    /// The modifier's parameter types are only known once the result is
    /// called, so closure parameters may need annotations here.
    /// The `compose0`..`compose12` functions infer them up front.
    fn map_output<M>(self, modifier: M) -> Composed<Self, M> {
        Composed::new(self, modifier)
    }
}

impl<T> CallableExt for T {}
