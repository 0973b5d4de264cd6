//! Locating the error-definition struct

use crate::source::SourceFile;
use std::path::PathBuf;
use syn::ext::IdentExt;
use syn::{Attribute, Fields, Item, Meta};
use tracing::warn;

/// Name of the field attribute that carries annotations.
pub const ANNOTATION_ATTR: &str = "errgen";

/// One field of the located struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: String,

    /// Token text of the field's `#[errgen(...)]` attributes, joined with
    /// `", "`; empty when the field has none.
    pub raw_annotation: String,
}

/// The located struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    pub name: String,
    pub package_name: String,
    pub path: PathBuf,
    pub fields: Vec<FieldSpec>,
}

/// Find the first struct named `type_name` with named (or no) fields.
///
/// Files are searched in the order given, items in declaration order. Tuple
/// structs and non-struct items with the same name are not candidates.
pub fn locate(type_name: &str, files: &[SourceFile]) -> Option<TargetType> {
    let mut candidates = files.iter().flat_map(|file| {
        file.syntax.items.iter().filter_map(move |item| match item {
            Item::Struct(s) if s.ident == type_name => {
                field_specs(&s.fields).map(|fields| (file, fields))
            }
            _ => None,
        })
    });

    let (file, fields) = candidates.next()?;

    for (ignored, _) in candidates {
        warn!(
            file = %ignored.path.display(),
            type_name,
            "ignoring later declaration of the target struct"
        );
    }

    Some(TargetType {
        name: type_name.to_string(),
        package_name: file.module_name.clone(),
        path: file.path.clone(),
        fields,
    })
}

fn field_specs(fields: &Fields) -> Option<Vec<FieldSpec>> {
    match fields {
        Fields::Named(named) => Some(
            named
                .named
                .iter()
                .filter_map(|field| {
                    Some(FieldSpec {
                        name: field.ident.as_ref()?.unraw().to_string(),
                        raw_annotation: field_annotation(&field.attrs),
                    })
                })
                .collect(),
        ),
        Fields::Unit => Some(Vec::new()),
        Fields::Unnamed(_) => None,
    }
}

/// Collect the raw annotation text of a field.
///
/// Each `#[errgen(...)]` attribute contributes its inner tokens; several
/// attributes on one field are joined as if written in one.
pub fn field_annotation(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(ANNOTATION_ATTR))
        .filter_map(|attr| match &attr.meta {
            Meta::List(list) => Some(list.tokens.to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}
