//! Annotation decoding
//!
//! A field annotation is a flat list of `key = value` (or `key: value`)
//! entries separated by whitespace and/or commas:
//!
//! ```text
//! errmsg = "this is BAR error [%d, %s]", vars = "hoge i64, fuga &str"
//! errmsg: "retired" obsoleted: "true"
//! ```
//!
//! Values are Rust string literals (plain or raw) or a bare token such as
//! `true`. Recognized keys are `errmsg`, `vars` and `obsoleted`; anything else
//! is ignored. When a key repeats, the first occurrence wins.

use crate::error::{GenerateError, GenerateResult};
use crate::locate::FieldSpec;

/// One declared constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// Structured form of a field annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedField {
    /// Message template, placeholders untouched. Empty means the field has
    /// no message and is skipped.
    pub message_template: String,

    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,

    /// The field keeps its identifier slot but produces no code.
    pub obsoleted: bool,
}

impl DecodedField {
    /// Whether the field produces generated code.
    pub fn is_emittable(&self) -> bool {
        !self.obsoleted && !self.message_template.is_empty()
    }
}

/// Decode the raw annotation of one field.
///
/// A broken annotation or a malformed `vars` entry is fatal: emitting the
/// remaining fields would shift parameter lists out of step with their
/// messages.
pub fn decode(field: &FieldSpec) -> GenerateResult<DecodedField> {
    let entries =
        scan_entries(&field.raw_annotation).map_err(|reason| GenerateError::InvalidAnnotation {
            field: field.name.clone(),
            reason,
        })?;

    let lookup = |key: &str| {
        entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    let parameters = match lookup("vars") {
        Some(vars) => parse_vars(&field.name, vars)?,
        None => Vec::new(),
    };

    Ok(DecodedField {
        message_template: lookup("errmsg").unwrap_or_default().to_string(),
        parameters,
        obsoleted: lookup("obsoleted").is_some_and(|v| !v.is_empty()),
    })
}

/// Split a `vars` value into parameters.
///
/// Each comma-separated entry must be exactly `<name> <type>`, so a blank
/// entry (a trailing comma) is malformed. An empty value declares no
/// parameters.
pub fn parse_vars(field: &str, vars: &str) -> GenerateResult<Vec<Parameter>> {
    if vars.trim().is_empty() {
        return Ok(Vec::new());
    }

    vars.split(',')
        .map(|entry| {
            let tokens: Vec<&str> = entry.split_whitespace().collect();
            match tokens.as_slice() {
                [name, ty] => Ok(Parameter {
                    name: (*name).to_string(),
                    ty: (*ty).to_string(),
                }),
                _ => Err(GenerateError::MalformedVars {
                    field: field.to_string(),
                    entry: entry.to_string(),
                }),
            }
        })
        .collect()
}

/// Tokenize an annotation into `(key, value)` pairs, in order.
fn scan_entries(raw: &str) -> Result<Vec<(String, String)>, String> {
    let mut entries = Vec::new();
    let mut rest = raw;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ',');
        let Some(first) = rest.chars().next() else {
            break;
        };

        let key_len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
            .unwrap_or(rest.len());
        if key_len == 0 {
            return Err(format!("unexpected character {first:?}"));
        }
        let (key, after_key) = rest.split_at(key_len);

        let after_sep = after_key
            .trim_start()
            .strip_prefix([':', '='])
            .ok_or_else(|| format!("expected `:` or `=` after `{key}`"))?;

        let (value, remaining) =
            read_value(after_sep.trim_start()).map_err(|reason| format!("{key}: {reason}"))?;

        entries.push((key.to_string(), value));
        rest = remaining;
    }

    Ok(entries)
}

/// Read one value from the start of `s`, returning it and the unread rest.
fn read_value(s: &str) -> Result<(String, &str), String> {
    if s.starts_with('"') {
        let end = closing_quote(s).ok_or("unterminated string literal")?;
        let (literal, rest) = s.split_at(end + 1);
        return Ok((literal_value(literal)?, rest));
    }

    if let Some(end) = raw_literal_end(s)? {
        let (literal, rest) = s.split_at(end);
        return Ok((literal_value(literal)?, rest));
    }

    let end = s
        .find(|c: char| c.is_whitespace() || c == ',')
        .unwrap_or(s.len());
    if end == 0 {
        return Err("missing value".to_string());
    }
    Ok((s[..end].to_string(), &s[end..]))
}

/// Byte index of the quote closing the string literal that opens `s`.
fn closing_quote(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// End (exclusive) of a raw string literal opening `s`, if `s` starts with one.
fn raw_literal_end(s: &str) -> Result<Option<usize>, String> {
    let Some(body) = s.strip_prefix('r') else {
        return Ok(None);
    };
    let hashes = body.len() - body.trim_start_matches('#').len();
    if !body[hashes..].starts_with('"') {
        return Ok(None);
    }

    let open = 1 + hashes + 1;
    let terminator = format!("\"{}", "#".repeat(hashes));
    let close = s[open..]
        .find(&terminator)
        .ok_or("unterminated raw string literal")?;

    Ok(Some(open + close + terminator.len()))
}

fn literal_value(literal: &str) -> Result<String, String> {
    syn::parse_str::<syn::LitStr>(literal)
        .map(|lit| lit.value())
        .map_err(|e| format!("invalid string literal {literal}: {e}"))
}
