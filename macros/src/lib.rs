//! This is a proc-macro helper library. Don't use this library directly; use `atma-math` instead.

#![allow(missing_docs, reason = "not intended to be used directly")]

use std::error::Error;
use std::fmt;

use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;

use atma_math_codegen::{Alphabet, Config};

/// Expands to the swizzle accessor `impl` blocks for each listed source vector size.
///
/// Options are written attribute-style before the sizes:
///
/// ```ignore
/// swizzles!(
///     vector = "crate::Texel",
///     bound = "Copy",
///     alphabets = ["xyzw", "rgba", "stpq"],
///     2, 3, 4
/// );
/// ```
#[proc_macro]
pub fn swizzles(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as SwizzlesInput);

    match swizzles_impl(&input) {
        Ok(expansion) => expansion.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

// -------------------------------------------------------------------------------------------------

struct SwizzlesInput {
    config: Config,
    sizes: Vec<syn::LitInt>,
}

impl Parse for SwizzlesInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut config = Config::new();

        while input.peek(syn::Ident) && input.peek2(syn::Token![=]) {
            let key: syn::Ident = input.parse()?;
            input.parse::<syn::Token![=]>()?;
            config = match key.to_string().as_str() {
                "vector" => {
                    let path: syn::LitStr = input.parse()?;
                    let value = path.value();
                    if !(value.starts_with("::") || value.starts_with("crate::")) {
                        return Err(syn::Error::new_spanned(
                            &path,
                            "vector path must be absolute, starting with `::` or `crate::`",
                        ));
                    }
                    config.vector_path(value)
                }
                "bound" => config.element_bound(input.parse::<syn::LitStr>()?.value()),
                "alphabets" => config.alphabets(parse_alphabets(input)?),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &key,
                        format_args!("unknown option “{key}”"),
                    ));
                }
            };
            input.parse::<syn::Token![,]>()?;
        }

        let sizes = Punctuated::<syn::LitInt, syn::Token![,]>::parse_terminated(input)?;
        if sizes.is_empty() {
            return Err(input.error("expected at least one vector size"));
        }

        Ok(Self {
            config,
            sizes: sizes.into_iter().collect(),
        })
    }
}

fn parse_alphabets(input: ParseStream<'_>) -> syn::Result<Vec<Alphabet>> {
    let content;
    syn::bracketed!(content in input);
    let literals = Punctuated::<syn::LitStr, syn::Token![,]>::parse_terminated(&content)?;

    literals
        .iter()
        .map(|literal| {
            literal.value().parse::<Alphabet>().map_err(|error| {
                syn::Error::new_spanned(
                    literal,
                    format_args!("invalid alphabet: {}", ErrorChain(&error)),
                )
            })
        })
        .collect()
}

fn swizzles_impl(input: &SwizzlesInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let mut seen: Vec<u8> = Vec::with_capacity(input.sizes.len());
    let mut blocks: Vec<proc_macro2::TokenStream> = Vec::with_capacity(input.sizes.len());

    for size_literal in &input.sizes {
        let size: u8 = size_literal.base10_parse()?;
        if seen.contains(&size) {
            return Err(syn::Error::new_spanned(
                size_literal,
                format_args!("size {size} is listed more than once"),
            ));
        }
        seen.push(size);

        let source: String = atma_math_codegen::write_string(size, input.config.clone())
            .map_err(|error| {
                syn::Error::new_spanned(
                    size_literal,
                    format_args!("failed to generate swizzles: {}", ErrorChain(&error)),
                )
            })?;

        let tokens: proc_macro2::TokenStream = source.parse().map_err(|error| {
            syn::Error::new(
                size_literal.span(),
                format_args!(
                    "internal error: generator did not produce valid Rust: {}",
                    ErrorChain(&error)
                ),
            )
        })?;
        blocks.push(tokens);
    }

    Ok(quote! {
        #( #blocks )*
    })
}

// -------------------------------------------------------------------------------------------------

/// Formatting wrapper which prints an [`Error`] together with its `source()` chain.
///
/// The text begins with the [`fmt::Display`] format of the error.
#[derive(Clone, Copy, Debug)]
struct ErrorChain<'a>(&'a (dyn Error + 'a));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_error_chain(fmt, self.0)
    }
}

fn format_error_chain(fmt: &mut fmt::Formatter<'_>, mut error: &(dyn Error + '_)) -> fmt::Result {
    write!(fmt, "{error}")?;
    while let Some(source) = error.source() {
        error = source;
        write!(fmt, "\n↳ {error}")?;
    }

    Ok(())
}
