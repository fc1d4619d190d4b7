#![forbid(unsafe_code)]

extern crate proc_macro;

mod arity;

use proc_macro::TokenStream;

/// Generate `Callable` impls and `composeN` functions for every arity
/// from zero up to and including the given maximum.
///
/// Only meant to be invoked once, from inside the `recompose` crate.
#[proc_macro]
pub fn arities(input: TokenStream) -> TokenStream {
    let arities = syn::parse_macro_input!(input as arity::Arities);

    let tokens = arity::gen_arities(arities);

    TokenStream::from(tokens)
}
