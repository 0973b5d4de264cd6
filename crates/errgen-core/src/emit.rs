//! Code emission
//!
//! Turns the allocated [`MessageRecord`]s into a [`GeneratedArtifact`]: an
//! ordered list of `syn` items grouped the way they appear in the output
//! file, rendered in one `prettyplease` pass.
//!
//! # Output layout
//!
//! ```text
//! // Code generated by errgen from `BasicErrMsg` in module `basic`. DO NOT EDIT.
//!
//! pub struct BasicErrMsgError { .. }             support declarations
//! pub fn foo_err() -> BasicErrMsgError           constructor   ┐ per record,
//! pub fn foo_err_wrap(cause) -> BasicErrMsgError wrap          ┘ field order
//! pub fn list_basic_err_msg() -> &[&str]         listing
//! pub enum BasicErrMsgKind { FooErr, Unknown }   categories
//! pub fn identify_basic_err_msg(&err) -> Kind    classifier
//! ```
//!
//! The generated code only depends on `std`, and uses `//` comments for the
//! header so the file can be pulled in with `include!`.

use crate::error::{GenerateError, GenerateResult};
use crate::ident::MessageRecord;
use crate::naming::{self, TypeNames, UNKNOWN_VARIANT};
use crate::template::{escape_braces, to_format_string};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use std::collections::HashSet;
use syn::{Ident, Item, LitStr, Type, parse_quote};

/// Leading text of every generated file.
pub const HEADER_MARKER: &str = "// Code generated by errgen";

/// The output of one run, ready to be rendered.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub type_name: String,
    pub package_name: String,
    /// Error value type and its trait impls.
    pub support_decls: Vec<Item>,
    pub constructor_decls: Vec<Item>,
    pub wrap_decls: Vec<Item>,
    pub list_decl: Item,
    /// Category enum and its impls.
    pub kind_decls: Vec<Item>,
    pub classifier_decl: Item,
}

impl GeneratedArtifact {
    /// The generated-file header, ending with a blank line.
    pub fn header(&self) -> String {
        format!(
            "{HEADER_MARKER} from `{}` in module `{}`. DO NOT EDIT.\n\n",
            self.type_name, self.package_name
        )
    }

    /// All items in output order.
    pub fn items(&self) -> Vec<Item> {
        let mut items = self.support_decls.clone();
        for (constructor, wrap) in self.constructor_decls.iter().zip(&self.wrap_decls) {
            items.push(constructor.clone());
            items.push(wrap.clone());
        }
        items.push(self.list_decl.clone());
        items.extend(self.kind_decls.iter().cloned());
        items.push(self.classifier_decl.clone());
        items
    }

    /// Render the artifact to formatted source text.
    pub fn render(&self) -> String {
        let file = syn::File {
            shebang: None,
            attrs: Vec::new(),
            items: self.items(),
        };

        let mut out = self.header();
        out.push_str(&prettyplease::unparse(&file));
        out
    }
}

/// Names used inside the generated code for one record.
struct RecordItems<'a> {
    record: &'a MessageRecord,
    constructor: Ident,
    wrap: Ident,
    variant: Ident,
    param_names: Vec<Ident>,
    param_types: Vec<Type>,
}

/// Build the artifact for `type_name` from its records.
pub fn emit(
    type_name: &str,
    package_name: &str,
    records: &[MessageRecord],
) -> GenerateResult<GeneratedArtifact> {
    let names = TypeNames::for_type(type_name);
    check_names(&names, records)?;

    let error_type = ident(&names.error_type)?;
    let kind_enum = ident(&names.kind_enum)?;
    let list_fn = ident(&names.list_fn)?;
    let identify_fn = ident(&names.identify_fn)?;

    let items = records
        .iter()
        .map(record_items)
        .collect::<GenerateResult<Vec<_>>>()?;

    let support_decls = support_decls(type_name, &error_type, &kind_enum, &identify_fn);
    let constructor_decls = items
        .iter()
        .map(|item| constructor_decl(item, &error_type))
        .collect();
    let wrap_decls = items.iter().map(|item| wrap_decl(item, &error_type)).collect();

    Ok(GeneratedArtifact {
        type_name: type_name.to_string(),
        package_name: package_name.to_string(),
        support_decls,
        constructor_decls,
        wrap_decls,
        list_decl: list_decl(type_name, &list_fn, records),
        kind_decls: kind_decls(type_name, &kind_enum, &items),
        classifier_decl: classifier_decl(&identify_fn, &kind_enum, &items),
    })
}

fn ident(name: &str) -> GenerateResult<Ident> {
    syn::parse_str::<Ident>(name).map_err(|e| GenerateError::InvalidName {
        name: name.to_string(),
        detail: e.to_string(),
    })
}

/// Reject records whose generated names would clash.
fn check_names(names: &TypeNames, records: &[MessageRecord]) -> GenerateResult<()> {
    let mut functions: HashSet<String> =
        HashSet::from([names.list_fn.clone(), names.identify_fn.clone()]);
    let mut variants: HashSet<String> = HashSet::from([UNKNOWN_VARIANT.to_string()]);

    for record in records {
        for name in [
            naming::constructor_name(&record.field),
            naming::wrap_name(&record.field),
        ] {
            if !functions.insert(name.clone()) {
                return Err(GenerateError::InvalidName {
                    name,
                    detail: format!("function for `{}` is already defined", record.field),
                });
            }
        }

        let variant = naming::variant_name(&record.field);
        if !variants.insert(variant.clone()) {
            return Err(GenerateError::InvalidName {
                name: variant,
                detail: format!("category for `{}` is already defined", record.field),
            });
        }
    }

    Ok(())
}

fn record_items(record: &MessageRecord) -> GenerateResult<RecordItems<'_>> {
    let invalid = |param: &str, reason: String| GenerateError::InvalidParameter {
        field: record.field.clone(),
        param: param.to_string(),
        reason,
    };

    let mut param_names = Vec::with_capacity(record.parameters.len());
    let mut param_types = Vec::with_capacity(record.parameters.len());
    for param in &record.parameters {
        let name = syn::parse_str::<Ident>(&param.name)
            .map_err(|e| invalid(&param.name, format!("not an identifier: {e}")))?;
        let ty = syn::parse_str::<Type>(&param.ty)
            .map_err(|e| invalid(&param.name, format!("not a type `{}`: {e}", param.ty)))?;
        param_names.push(name);
        param_types.push(ty);
    }

    Ok(RecordItems {
        record,
        constructor: ident(&naming::constructor_name(&record.field))?,
        wrap: ident(&naming::wrap_name(&record.field))?,
        variant: ident(&naming::variant_name(&record.field))?,
        param_names,
        param_types,
    })
}

/// Expression building the message `String` of a record.
///
/// Without parameters the template is used as written, so a literal `%`
/// needs no escaping. With parameters only the declared message is
/// translated; the tag is kept literal.
fn message_expr(item: &RecordItems<'_>) -> TokenStream {
    let record = item.record;
    let core = &record.core_template;
    if item.param_names.is_empty() {
        return quote!(String::from(#core));
    }

    let format = format!(
        "{} {}",
        escape_braces(&record.identifier.tag()),
        to_format_string(record.message_template())
    );
    let format = LitStr::new(&format, Span::call_site());
    let args = &item.param_names;
    quote!(format!(#format, #(#args),*))
}

/// Name of the cause parameter, made distinct from the declared parameters.
fn cause_ident(item: &RecordItems<'_>) -> Ident {
    let mut name = String::from("cause");
    while item.param_names.iter().any(|p| p == name.as_str()) {
        name.push('_');
    }
    Ident::new(&name, Span::call_site())
}

fn support_decls(
    type_name: &str,
    error_type: &Ident,
    kind_enum: &Ident,
    identify_fn: &Ident,
) -> Vec<Item> {
    let doc = format!(" Error produced by the constructors generated from `{type_name}`.");

    vec![
        parse_quote! {
            #[doc = #doc]
            #[derive(Debug)]
            pub struct #error_type {
                message: String,
                source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
            }
        },
        parse_quote! {
            impl #error_type {
                #[allow(dead_code)]
                fn new(message: String) -> Self {
                    Self { message, source: None }
                }

                #[allow(dead_code)]
                fn wrap(message: String, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
                    Self {
                        message: format!("{message}: {cause}"),
                        source: Some(Box::new(cause)),
                    }
                }

                /// Rendered message, starting with the identifier tag.
                pub fn message(&self) -> &str {
                    &self.message
                }

                /// Field this error was generated from.
                pub fn kind(&self) -> #kind_enum {
                    #identify_fn(self)
                }
            }
        },
        parse_quote! {
            impl std::fmt::Display for #error_type {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.message)
                }
            }
        },
        parse_quote! {
            impl std::error::Error for #error_type {
                fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                    self.source
                        .as_deref()
                        .map(|source| source as &(dyn std::error::Error + 'static))
                }
            }
        },
    ]
}

fn constructor_decl(item: &RecordItems<'_>, error_type: &Ident) -> Item {
    let RecordItems {
        constructor,
        param_names,
        param_types,
        ..
    } = item;
    let doc = format!(" Returns `{}`.", item.record.core_template);
    let message = message_expr(item);

    parse_quote! {
        #[doc = #doc]
        pub fn #constructor(#(#param_names: #param_types),*) -> #error_type {
            #error_type::new(#message)
        }
    }
}

fn wrap_decl(item: &RecordItems<'_>, error_type: &Ident) -> Item {
    let RecordItems {
        wrap,
        param_names,
        param_types,
        ..
    } = item;
    let doc = format!(
        " Returns `{}` followed by the message of `cause`.",
        item.record.core_template
    );
    let cause = cause_ident(item);
    let message = message_expr(item);

    parse_quote! {
        #[doc = #doc]
        pub fn #wrap(
            #(#param_names: #param_types,)*
            #cause: impl std::error::Error + Send + Sync + 'static,
        ) -> #error_type {
            #error_type::wrap(#message, #cause)
        }
    }
}

fn list_decl(type_name: &str, list_fn: &Ident, records: &[MessageRecord]) -> Item {
    let doc = format!(" Every message defined by `{type_name}`, placeholders unexpanded.");
    let templates = records.iter().map(|r| r.core_template.as_str());

    parse_quote! {
        #[doc = #doc]
        pub fn #list_fn() -> &'static [&'static str] {
            &[#(#templates),*]
        }
    }
}

fn kind_decls(type_name: &str, kind_enum: &Ident, items: &[RecordItems<'_>]) -> Vec<Item> {
    let doc = format!(" Field of `{type_name}` an error was generated from.");
    let unknown = Ident::new(UNKNOWN_VARIANT, Span::call_site());
    let variants: Vec<&Ident> = items.iter().map(|item| &item.variant).collect();
    let variant_docs = items
        .iter()
        .map(|item| format!(" `{}`", item.record.identifier.tag()));
    let field_names = items.iter().map(|item| item.record.field.as_str());

    vec![
        parse_quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum #kind_enum {
                #(
                    #[doc = #variant_docs]
                    #variants,
                )*
                /// Not generated from this type.
                #unknown,
            }
        },
        parse_quote! {
            impl #kind_enum {
                /// Name of the originating field, `"unknown"` for foreign errors.
                pub fn name(self) -> &'static str {
                    match self {
                        #(Self::#variants => #field_names,)*
                        Self::#unknown => "unknown",
                    }
                }
            }
        },
        parse_quote! {
            impl std::fmt::Display for #kind_enum {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.name())
                }
            }
        },
    ]
}

fn classifier_decl(identify_fn: &Ident, kind_enum: &Ident, items: &[RecordItems<'_>]) -> Item {
    let doc = " Map an error back to the field it was generated from by its identifier tag.";
    let unknown = Ident::new(UNKNOWN_VARIANT, Span::call_site());

    if items.is_empty() {
        return parse_quote! {
            #[doc = #doc]
            pub fn #identify_fn<E: std::fmt::Display + ?Sized>(err: &E) -> #kind_enum {
                let _ = err;
                #kind_enum::#unknown
            }
        };
    }

    let tags = items.iter().map(|item| item.record.identifier.tag());
    let variants = items.iter().map(|item| &item.variant);

    parse_quote! {
        #[doc = #doc]
        pub fn #identify_fn<E: std::fmt::Display + ?Sized>(err: &E) -> #kind_enum {
            let message = err.to_string();
            #(
                if message.starts_with(#tags) {
                    return #kind_enum::#variants;
                }
            )*
            #kind_enum::#unknown
        }
    }
}

#[cfg(test)]
#[path = "emit/emit_tests.rs"]
mod emit_tests;
