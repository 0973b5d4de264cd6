//! errgen-macros - Compile-time checks for errgen definitions
//!
//! `#[derive(ErrorMessages)]` makes `#[errgen(...)]` a valid field attribute
//! and rejects annotations the generator would fail on, so mistakes show up
//! as compiler errors on the offending field instead of at generation time.
//! The derive itself expands to nothing.

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use errgen_core::annotation::decode;
use errgen_core::locate::{ANNOTATION_ATTR, FieldSpec, field_annotation};
use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Meta, parse_macro_input};

/// Struct-level options of the `ErrorMessages` derive
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named, struct_unit))]
struct ErrorMessagesOpts {
    data: Data<Ignored, MessageField>,
}

/// One field with its forwarded `#[errgen]` attributes
#[derive(Debug, FromField)]
#[darling(forward_attrs(errgen))]
struct MessageField {
    ident: Option<syn::Ident>,
    attrs: Vec<syn::Attribute>,
}

/// Derive macro for error-definition structs
///
/// # Example
///
/// ```ignore
/// #[derive(ErrorMessages)]
/// struct BasicErrMsg {
///     #[errgen(errmsg = "this is FOO error")]
///     foo_err: (),
///     #[errgen(errmsg = "this is BAR error [%d, %s]", vars = "hoge i64, fuga &str")]
///     bar_err: (),
/// }
/// ```
#[proc_macro_derive(ErrorMessages, attributes(errgen))]
pub fn derive_error_messages(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> proc_macro2::TokenStream {
    let opts = match ErrorMessagesOpts::from_derive_input(input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors(),
    };

    let fields = opts
        .data
        .take_struct()
        .map(|fields| fields.fields)
        .unwrap_or_default();

    let mut errors = darling::Error::accumulator();
    for field in &fields {
        let Some(ident) = &field.ident else {
            continue;
        };
        if let Err(e) = check_field(ident, &field.attrs) {
            errors.push(e);
        }
    }

    match errors.finish() {
        Ok(()) => quote! {},
        Err(e) => e.write_errors(),
    }
}

/// Decode one field's annotation exactly as the generator will.
fn check_field(ident: &syn::Ident, attrs: &[syn::Attribute]) -> darling::Result<()> {
    for attr in attrs {
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(darling::Error::custom(format!(
                "expected `#[{ANNOTATION_ATTR}(...)]`"
            ))
            .with_span(attr));
        }
    }

    let spec = FieldSpec {
        name: ident.unraw().to_string(),
        raw_annotation: field_annotation(attrs),
    };
    let decoded = decode(&spec).map_err(|e| darling::Error::custom(e).with_span(ident))?;

    for param in &decoded.parameters {
        if syn::parse_str::<syn::Ident>(&param.name).is_err() {
            return Err(darling::Error::custom(format!(
                "parameter name `{}` is not an identifier",
                param.name
            ))
            .with_span(ident));
        }
        if syn::parse_str::<syn::Type>(&param.ty).is_err() {
            return Err(darling::Error::custom(format!(
                "parameter `{}` has an invalid type `{}`",
                param.name, param.ty
            ))
            .with_span(ident));
        }
    }

    Ok(())
}
