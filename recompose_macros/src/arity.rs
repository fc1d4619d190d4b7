use quote::{format_ident, quote};
use syn::parse::ParseStream;

/// Upper bound on what `arities!` accepts.
/// Rust's own tuple trait impls stop at 12, so the argument tuples would stop
/// being `Clone`/`Debug` beyond it anyway.
const MAX_ARITY: usize = 12;

pub struct Arities {
    pub max: usize,
}

impl syn::parse::Parse for Arities {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: syn::LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;

        if max > MAX_ARITY {
            return Err(syn::Error::new(
                lit.span(),
                format!("arity must be at most {}", MAX_ARITY),
            ));
        }

        Ok(Arities { max })
    }
}

/// Type and value identifiers for one arity.
struct Arity {
    n: usize,
    types: Vec<syn::Ident>,
    values: Vec<syn::Ident>,
}

impl Arity {
    fn new(n: usize) -> Self {
        Self {
            n,
            types: (0..n).map(|i| format_ident!("A{}", i)).collect(),
            values: (0..n).map(|i| format_ident!("a{}", i)).collect(),
        }
    }

    /// `(A0, A1,)`. The trailing comma keeps arity 1 a tuple.
    fn tuple_ty(&self) -> proc_macro2::TokenStream {
        let types = &self.types;
        quote! { (#(#types,)*) }
    }

    fn tuple_pat(&self) -> proc_macro2::TokenStream {
        let values = &self.values;
        quote! { (#(#values,)*) }
    }
}

pub fn gen_arities(arities: Arities) -> proc_macro2::TokenStream {
    let items = (0..=arities.max).map(|n| {
        let arity = Arity::new(n);
        let callable_impl = gen_callable_impl(&arity);
        let compose_fn = gen_compose_fn(&arity);

        quote! {
            #callable_impl
            #compose_fn
        }
    });

    quote! {
        #(#items)*
    }
}

fn gen_callable_impl(arity: &Arity) -> proc_macro2::TokenStream {
    let types = &arity.types;
    let values = &arity.values;
    let tuple_ty = arity.tuple_ty();
    let tuple_pat = arity.tuple_pat();

    quote! {
        impl<Func, Out, #(#types),*> crate::callable::Callable<#tuple_ty> for Func
        where
            Func: Fn(#(#types),*) -> Out,
        {
            type Output = Out;

            #[inline]
            fn call(&self, args: #tuple_ty) -> Out {
                let #tuple_pat = args;
                self(#(#values),*)
            }
        }
    }
}

fn gen_compose_fn(arity: &Arity) -> proc_macro2::TokenStream {
    let n = arity.n;
    let ident = format_ident!("compose{}", n);
    let types = &arity.types;
    let values = &arity.values;
    let tuple_ty = arity.tuple_ty();

    let doc = format!(
        "Compose a function of {} argument{} with a modifier of its argument tuple and result.\n\n\
         The returned function takes the same arguments as `subject`, calls it, and returns \
         whatever `modifier` makes of `(args, result)`.",
        n,
        if n == 1 { "" } else { "s" },
    );

    quote! {
        #[doc = #doc]
        pub fn #ident<#(#types,)* R, U>(
            subject: impl Fn(#(#types),*) -> R,
            modifier: impl Fn(#tuple_ty, R) -> U,
        ) -> impl Fn(#(#types),*) -> U
        where
            #tuple_ty: Clone,
        {
            move |#(#values),*| {
                log::trace!("composed call, arity {}", #n);

                let args: #tuple_ty = (#(#values,)*);
                let result = crate::callable::Callable::call(&subject, args.clone());
                modifier(args, result)
            }
        }
    }
}
