//! Naming of generated items.
//!
//! | Source | Generated | Example |
//! |--------|-----------|---------|
//! | struct `BasicErrMsg` | error type | `BasicErrMsgError` |
//! | struct `BasicErrMsg` | category enum | `BasicErrMsgKind` |
//! | struct `BasicErrMsg` | listing fn | `list_basic_err_msg` |
//! | struct `BasicErrMsg` | classifier fn | `identify_basic_err_msg` |
//! | struct `BasicErrMsg` | default output | `basic_err_msg_errmsg_gen.rs` |
//! | field `foo_err` | constructor / wrap | `foo_err` / `foo_err_wrap` |
//! | field `foo_err` | category variant | `FooErr` |

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Suffix appended to the snake-cased type name for the default output file.
pub const OUTPUT_SUFFIX: &str = "_errmsg_gen.rs";

/// Name of the catch-all category variant.
pub const UNKNOWN_VARIANT: &str = "Unknown";

/// Type-level names of one generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    pub error_type: String,
    pub kind_enum: String,
    pub list_fn: String,
    pub identify_fn: String,
}

impl TypeNames {
    pub fn for_type(type_name: &str) -> Self {
        let camel = type_name.to_upper_camel_case();
        let snake = type_name.to_snake_case();

        Self {
            error_type: format!("{camel}Error"),
            kind_enum: format!("{camel}Kind"),
            list_fn: format!("list_{snake}"),
            identify_fn: format!("identify_{snake}"),
        }
    }
}

/// Default output file name for a type.
///
/// ```
/// use errgen_core::naming::default_file_name;
///
/// assert_eq!(default_file_name("BasicErrMsg"), "basic_err_msg_errmsg_gen.rs");
/// ```
pub fn default_file_name(type_name: &str) -> String {
    format!("{}{OUTPUT_SUFFIX}", type_name.to_snake_case())
}

/// Constructor name for a field.
pub fn constructor_name(field: &str) -> String {
    field.to_snake_case()
}

/// Wrap-constructor name for a field.
pub fn wrap_name(field: &str) -> String {
    format!("{}_wrap", constructor_name(field))
}

/// Category variant for a field.
pub fn variant_name(field: &str) -> String {
    field.to_upper_camel_case()
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn TypeNames___for_type___derives_all_names() {
        let names = TypeNames::for_type("BasicErrMsg");

        assert_eq!(names.error_type, "BasicErrMsgError");
        assert_eq!(names.kind_enum, "BasicErrMsgKind");
        assert_eq!(names.list_fn, "list_basic_err_msg");
        assert_eq!(names.identify_fn, "identify_basic_err_msg");
    }

    #[test]
    fn TypeNames___lower_camel_type___is_normalized() {
        let names = TypeNames::for_type("prefixErrMsg");

        assert_eq!(names.error_type, "PrefixErrMsgError");
        assert_eq!(names.list_fn, "list_prefix_err_msg");
    }

    #[test]
    fn default_file_name___snake_cases_type() {
        assert_eq!(
            default_file_name("pathSpecifiedErrMsg"),
            "path_specified_err_msg_errmsg_gen.rs"
        );
    }

    #[test]
    fn constructor_name___snake_field___unchanged() {
        assert_eq!(constructor_name("foo_err"), "foo_err");
        assert_eq!(wrap_name("foo_err"), "foo_err_wrap");
    }

    #[test]
    fn constructor_name___camel_field___snake_cased() {
        assert_eq!(constructor_name("FooErr"), "foo_err");
        assert_eq!(wrap_name("FooErr"), "foo_err_wrap");
    }

    #[test]
    fn variant_name___converts_to_upper_camel() {
        assert_eq!(variant_name("foo_err"), "FooErr");
        assert_eq!(variant_name("FooErr"), "FooErr");
        assert_eq!(variant_name("unknown"), UNKNOWN_VARIANT);
    }
}
