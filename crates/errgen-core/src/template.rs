//! Translation of printf-style message templates into Rust format strings.
//!
//! Templates are written with `%`-directives (`%d`, `%s`, `%5.2f`, ...) and
//! are otherwise opaque: nothing checks that the number of directives matches
//! the declared parameters. Only constructors that take parameters go through
//! this translation; a template without parameters is used verbatim.

use std::iter::Peekable;
use std::str::Chars;

/// Convert a printf-style template into a string usable with `format!`.
///
/// - `%%` becomes `%`
/// - `%[flags][width][.precision]verb` becomes `{:...}` with the matching
///   formatting trait
/// - unknown verbs and a trailing `%` are kept literally
/// - `{` and `}` are escaped
///
/// ```
/// use errgen_core::template::to_format_string;
///
/// assert_eq!(to_format_string("bad [%d, %s]"), "bad [{}, {}]");
/// assert_eq!(to_format_string("%05.2f%%"), "{:05.2}%");
/// ```
pub fn to_format_string(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            '%' => translate_directive(&mut chars, &mut out),
            _ => out.push(c),
        }
    }

    out
}

/// Escape `{` and `}` so `text` appears literally in a format string.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

#[derive(Default)]
struct Directive {
    left: bool,
    plus: bool,
    alternate: bool,
    zero: bool,
    width: String,
    precision: Option<String>,
}

impl Directive {
    fn render(&self, format_trait: &str) -> String {
        let mut spec = String::new();

        if self.left {
            spec.push('<');
        } else if !self.width.is_empty() && !self.zero {
            // printf right-aligns every padded value; Rust left-aligns strings.
            spec.push('>');
        }
        if self.plus {
            spec.push('+');
        }
        if self.alternate {
            spec.push('#');
        }
        if self.zero && !self.left {
            spec.push('0');
        }
        spec.push_str(&self.width);
        if let Some(precision) = &self.precision {
            spec.push('.');
            spec.push_str(if precision.is_empty() { "0" } else { precision });
        }
        spec.push_str(format_trait);

        if spec.is_empty() {
            "{}".to_string()
        } else {
            format!("{{:{spec}}}")
        }
    }
}

fn translate_directive(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    if chars.next_if_eq(&'%').is_some() {
        out.push('%');
        return;
    }

    let mut raw = String::from("%");
    let mut directive = Directive::default();

    while let Some(flag) = chars.next_if(|&c| matches!(c, '-' | '+' | '#' | '0' | ' ')) {
        raw.push(flag);
        match flag {
            '-' => directive.left = true,
            '+' => directive.plus = true,
            '#' => directive.alternate = true,
            '0' => directive.zero = true,
            _ => {}
        }
    }

    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        raw.push(digit);
        directive.width.push(digit);
    }

    if chars.next_if_eq(&'.').is_some() {
        raw.push('.');
        let mut precision = String::new();
        while let Some(digit) = chars.next_if(char::is_ascii_digit) {
            raw.push(digit);
            precision.push(digit);
        }
        directive.precision = Some(precision);
    }

    match chars.next_if(char::is_ascii_alphabetic) {
        Some(verb) => match format_trait(verb) {
            Some(format_trait) => out.push_str(&directive.render(format_trait)),
            None => {
                out.push_str(&raw);
                out.push(verb);
            }
        },
        None => out.push_str(&raw),
    }
}

/// Rust formatting trait selector for a printf verb.
fn format_trait(verb: char) -> Option<&'static str> {
    match verb {
        'v' | 's' | 'd' | 'i' | 'u' | 't' | 'c' | 'f' | 'F' | 'g' | 'G' => Some(""),
        'q' => Some("?"),
        'x' => Some("x"),
        'X' => Some("X"),
        'o' => Some("o"),
        'b' => Some("b"),
        'e' => Some("e"),
        'E' => Some("E"),
        'p' => Some("p"),
        _ => None,
    }
}
