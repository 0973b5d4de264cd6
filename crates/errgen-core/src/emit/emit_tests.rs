#![allow(non_snake_case)]

use super::*;
use crate::annotation::Parameter;
use crate::ident::Identifier;

fn record(field: &str, id: u32, template: &str, params: &[(&str, &str)]) -> MessageRecord {
    prefixed_record("ERR-", field, id, template, params)
}

fn prefixed_record(
    prefix: &str,
    field: &str,
    id: u32,
    template: &str,
    params: &[(&str, &str)],
) -> MessageRecord {
    let identifier = Identifier::new(prefix, id);
    MessageRecord {
        field: field.to_string(),
        core_template: format!("{} {template}", identifier.tag()),
        identifier,
        parameters: params
            .iter()
            .map(|(name, ty)| Parameter {
                name: name.to_string(),
                ty: ty.to_string(),
            })
            .collect(),
    }
}

fn basic_records() -> Vec<MessageRecord> {
    vec![
        record("foo_err", 1, "this is FOO error", &[]),
        record(
            "bar_err",
            2,
            "this is BAR error [%d, %s]",
            &[("hoge", "i64"), ("fuga", "&str")],
        ),
    ]
}

fn fn_names(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Fn(f) => Some(f.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn emit___groups_declarations_per_record() {
    let artifact = emit("BasicErrMsg", "basic", &basic_records()).unwrap();

    assert_eq!(fn_names(&artifact.constructor_decls), vec!["foo_err", "bar_err"]);
    assert_eq!(fn_names(&artifact.wrap_decls), vec!["foo_err_wrap", "bar_err_wrap"]);
    assert_eq!(artifact.package_name, "basic");
}

#[test]
fn emit___items___follow_output_order() {
    let artifact = emit("BasicErrMsg", "basic", &basic_records()).unwrap();

    assert_eq!(
        fn_names(&artifact.items()),
        vec![
            "foo_err",
            "foo_err_wrap",
            "bar_err",
            "bar_err_wrap",
            "list_basic_err_msg",
            "identify_basic_err_msg",
        ]
    );
}

#[test]
fn render___starts_with_header() {
    let rendered = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    assert!(rendered.starts_with(
        "// Code generated by errgen from `BasicErrMsg` in module `basic`. DO NOT EDIT.\n\n"
    ));
}

#[test]
fn render___is_valid_rust() {
    let rendered = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    let file = syn::parse_file(&rendered).unwrap();

    assert!(file.items.len() > 6);
}

#[test]
fn render___constructors_carry_messages() {
    let rendered = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    assert!(rendered.contains("pub fn foo_err() -> BasicErrMsgError"));
    assert!(rendered.contains(r#"String::from("[ERR-1] this is FOO error")"#));
    assert!(rendered.contains("pub fn bar_err(hoge: i64, fuga: &str) -> BasicErrMsgError"));
    assert!(rendered.contains(r#""[ERR-2] this is BAR error [{}, {}]""#));
}

#[test]
fn render___listing_keeps_placeholders() {
    let rendered = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    assert!(rendered.contains("pub fn list_basic_err_msg() -> &'static [&'static str]"));
    assert!(rendered.contains(r#""[ERR-2] this is BAR error [%d, %s]""#));
}

#[test]
fn render___classifier_checks_tags_in_field_order() {
    let rendered = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    let first = rendered.find(r#"starts_with("[ERR-1]")"#).unwrap();
    let second = rendered.find(r#"starts_with("[ERR-2]")"#).unwrap();
    assert!(first < second);
    assert!(rendered.contains("BasicErrMsgKind::Unknown"));
}

#[test]
fn render___is_deterministic() {
    let first = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();
    let second = emit("BasicErrMsg", "basic", &basic_records())
        .unwrap()
        .render();

    assert_eq!(first, second);
}

#[test]
fn render___no_records___still_valid() {
    let rendered = emit("Empty", "crate", &[]).unwrap().render();

    let file = syn::parse_file(&rendered).unwrap();
    assert!(!file.items.is_empty());
    assert!(rendered.contains("pub fn identify_empty"));
    assert!(rendered.contains("EmptyKind::Unknown"));
}

#[test]
fn render___template_percent_without_parameters___stays_literal() {
    let records = vec![record("full", 1, "disk 100% full", &[])];

    let rendered = emit("Errs", "m", &records).unwrap().render();

    assert!(rendered.contains(r#"String::from("[ERR-1] disk 100% full")"#));
}

#[test]
fn emit___parameter_named_cause___renames_cause_argument() {
    let records = vec![record("f", 1, "why %s", &[("cause", "String")])];

    let artifact = emit("Errs", "m", &records).unwrap();

    let Item::Fn(wrap) = &artifact.wrap_decls[0] else {
        panic!("wrap declaration is not a function");
    };
    let args: Vec<String> = wrap
        .sig
        .inputs
        .iter()
        .map(|arg| quote::quote!(#arg).to_string())
        .collect();
    assert!(args[0].starts_with("cause :"));
    assert!(args[1].starts_with("cause_ :"));
}

#[test]
fn emit___duplicate_variant___is_rejected() {
    let records = vec![
        record("foo_err", 1, "a", &[]),
        record("FooErr", 2, "b", &[]),
    ];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidName { .. }));
}

#[test]
fn emit___field_named_unknown___is_rejected() {
    let records = vec![record("unknown", 1, "a", &[])];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidName { ref name, .. } if name == "Unknown"));
}

#[test]
fn emit___constructor_clashing_with_wrap___is_rejected() {
    let records = vec![record("a", 1, "x", &[]), record("a_wrap", 2, "y", &[])];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidName { ref name, .. } if name == "a_wrap"));
}

#[test]
fn emit___keyword_field___is_rejected() {
    let records = vec![record("type", 1, "x", &[])];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidName { .. }));
}

#[test]
fn emit___invalid_parameter_type___is_rejected() {
    let records = vec![record("f", 1, "x %d", &[("a", "Vec<")])];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::InvalidParameter { ref field, ref param, .. } if field == "f" && param == "a"
    ));
}

#[test]
fn emit___invalid_parameter_name___is_rejected() {
    let records = vec![record("f", 1, "x %d", &[("fn", "i64")])];

    let err = emit("Errs", "m", &records).unwrap_err();

    assert!(matches!(err, GenerateError::InvalidParameter { .. }));
}

#[test]
fn render___format_characters_in_prefix___stay_literal() {
    let records = vec![prefixed_record(
        "E%d-{x}",
        "bar_err",
        2,
        "this is BAR error [%d, %s]",
        &[("hoge", "i64"), ("fuga", "&str")],
    )];

    let rendered = emit("Errs", "m", &records).unwrap().render();

    assert!(rendered.contains(r#""[E%d-{{x}}2] this is BAR error [{}, {}]""#));
    assert!(rendered.contains(r#""[E%d-{x}2] this is BAR error [%d, %s]""#));
    assert!(rendered.contains(r#"starts_with("[E%d-{x}2]")"#));
}
