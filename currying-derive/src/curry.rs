//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a, b| body)`
//! 2. Function path + arity form: `curry!(function_name, arity)`
//!
//! Either form may be prefixed with an ownership mode, `owned =>` (the
//! default) or `referenced =>`.
//!
//! # Generated Code Structure
//!
//! The callable is passed through a shaping function whose `Fn` bound has
//! exactly `arity` parameters. This pins the closure's signature so that
//! parameter types may be left to inference, and turns an arity mismatch on
//! a function path into an ordinary type error at the call site.
//!
//! For `curry!(referenced => |a, b| body)` the macro generates:
//!
//! ```text
//! {
//!     fn __currying_shape<__CurryingFunction, __CurryingReturn, __CurryingParameter0, __CurryingParameter1>(
//!         function: __CurryingFunction,
//!     ) -> __CurryingFunction
//!     where
//!         __CurryingFunction: ::core::ops::Fn(__CurryingParameter0, __CurryingParameter1) -> __CurryingReturn,
//!     {
//!         function
//!     }
//!     ::currying::curry_with(
//!         __currying_shape(|a, b| body),
//!         ::currying::ownership::Referenced::new(),
//!     )
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Ident, Lit, Token, spanned::Spanned};

/// Largest arity with a `Callable` implementation.
pub const MAXIMUM_ARITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Owned,
    Referenced,
}

enum Target {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

struct CurryInput {
    mode: Mode,
    target: Target,
}

pub fn curry_impl(input: TokenStream) -> TokenStream {
    TokenStream::from(expand(input.into()).unwrap_or_else(syn::Error::into_compile_error))
}

pub fn expand(input: TokenStream2) -> syn::Result<TokenStream2> {
    let CurryInput { mode, target } = syn::parse2(input)?;

    let (arity, callable) = match target {
        Target::Closure(closure) => (closure.inputs.len(), quote! { #closure }),
        Target::FunctionWithArity { function, arity } => (arity, quote! { #function }),
    };

    Ok(generate_root(arity, &callable, mode))
}

impl Parse for CurryInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mode = if input.peek(Ident) && input.peek2(Token![=>]) {
            let keyword: Ident = input.parse()?;
            input.parse::<Token![=>]>()?;
            parse_mode(&keyword)?
        } else {
            Mode::Owned
        };

        let expressions = Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        let mut iterator = expressions.into_iter();

        let target = match (iterator.next(), iterator.next(), iterator.next()) {
            (Some(single), None, None) => parse_single_expression(single)?,
            (Some(first), Some(second), None) => parse_function_with_arity(first, second)?,
            _ => {
                return Err(syn::Error::new(
                    Span::call_site(),
                    "curry! requires a closure or function name with arity",
                ));
            }
        };

        Ok(Self { mode, target })
    }
}

fn parse_mode(keyword: &Ident) -> syn::Result<Mode> {
    match keyword.to_string().as_str() {
        "owned" => Ok(Mode::Owned),
        "referenced" => Ok(Mode::Referenced),
        _ => Err(syn::Error::new(
            keyword.span(),
            "curry! ownership mode must be `owned` or `referenced`",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<Target> {
    match expression {
        Expr::Closure(closure) => {
            validate_arity(closure.inputs.len(), closure.or1_token.span())?;
            Ok(Target::Closure(closure))
        }
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with function name requires arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or function name with arity",
        )),
    }
}

fn parse_function_with_arity(first: Expr, second: Expr) -> syn::Result<Target> {
    let function = match first {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "expected a function name or path",
            ));
        }
    };

    let arity = match second {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => {
            let arity = literal_integer.base10_parse::<usize>()?;
            validate_arity(arity, literal_integer.span())?;
            arity
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    Ok(Target::FunctionWithArity { function, arity })
}

fn validate_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity == 0 {
        return Err(syn::Error::new(
            span,
            "curry! requires a function with at least 1 argument",
        ));
    }
    if arity > MAXIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            format!("curry! supports at most {MAXIMUM_ARITY} arguments, found {arity}"),
        ));
    }
    Ok(())
}

fn generate_root(arity: usize, callable: &TokenStream2, mode: Mode) -> TokenStream2 {
    let parameters: Vec<_> = (0..arity)
        .map(|index| format_ident!("__CurryingParameter{}", index))
        .collect();

    let mode = match mode {
        Mode::Owned => quote! { ::currying::ownership::Owned },
        Mode::Referenced => quote! { ::currying::ownership::Referenced::new() },
    };

    quote! {
        {
            fn __currying_shape<__CurryingFunction, __CurryingReturn, #(#parameters),*>(
                function: __CurryingFunction,
            ) -> __CurryingFunction
            where
                __CurryingFunction: ::core::ops::Fn(#(#parameters),*) -> __CurryingReturn,
            {
                function
            }
            ::currying::curry_with(__currying_shape(#callable), #mode)
        }
    }
}
