//! Runtime behavior of the generated constructors.

#![allow(non_snake_case)]

use generated_errors::{basic, obsoletion, path_specified, prefix};
use std::error::Error;
use std::io;

mod basic_messages {
    use super::*;

    #[test]
    fn foo_err___renders_tagged_message() {
        assert_eq!(basic::foo_err().to_string(), "[ERR-1] this is FOO error");
    }

    #[test]
    fn bar_err___substitutes_parameters() {
        let err = basic::bar_err(123, "hello world");

        assert_eq!(err.to_string(), "[ERR-2] this is BAR error [123, hello world]");
        assert_eq!(err.message(), "[ERR-2] this is BAR error [123, hello world]");
    }

    #[test]
    fn foo_err___has_no_source() {
        assert!(basic::foo_err().source().is_none());
    }

    #[test]
    fn list___returns_templates_in_field_order() {
        assert_eq!(
            basic::list_basic_err_msg(),
            &["[ERR-1] this is FOO error", "[ERR-2] this is BAR error [%d, %s]"]
        );
    }
}

mod wrapping {
    use super::*;

    #[test]
    fn foo_err_wrap___appends_cause_message() {
        let cause = io::Error::other("disk on fire");

        let err = basic::foo_err_wrap(cause);

        assert_eq!(err.to_string(), "[ERR-1] this is FOO error: disk on fire");
    }

    #[test]
    fn foo_err_wrap___exposes_cause_as_source() {
        let err = basic::foo_err_wrap(io::Error::other("disk on fire"));

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "disk on fire");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn bar_err_wrap___keeps_parameters_and_cause() {
        let err = basic::bar_err_wrap(7, "x", io::Error::other("inner"));

        assert_eq!(err.to_string(), "[ERR-2] this is BAR error [7, x]: inner");
    }

    #[test]
    fn wrap___can_chain_generated_errors() {
        let err = basic::foo_err_wrap(basic::bar_err(1, "a"));

        assert_eq!(
            err.to_string(),
            "[ERR-1] this is FOO error: [ERR-2] this is BAR error [1, a]"
        );
        assert_eq!(err.kind(), basic::BasicErrMsgKind::FooErr);
    }
}

mod classification {
    use super::*;

    #[test]
    fn identify___generated_errors___map_to_fields() {
        assert_eq!(
            basic::identify_basic_err_msg(&basic::foo_err()),
            basic::BasicErrMsgKind::FooErr
        );
        assert_eq!(
            basic::identify_basic_err_msg(&basic::bar_err(1, "a")),
            basic::BasicErrMsgKind::BarErr
        );
    }

    #[test]
    fn identify___wrapped_error___maps_to_outer_field() {
        let err = basic::bar_err_wrap(1, "a", io::Error::other("inner"));

        assert_eq!(err.kind(), basic::BasicErrMsgKind::BarErr);
    }

    #[test]
    fn identify___foreign_error___is_unknown() {
        let err = io::Error::other("[ERR-1x] not ours");

        assert_eq!(
            basic::identify_basic_err_msg(&err),
            basic::BasicErrMsgKind::Unknown
        );
    }

    #[test]
    fn identify___plain_text___is_accepted() {
        assert_eq!(
            basic::identify_basic_err_msg("[ERR-2] this is BAR error [1, a]"),
            basic::BasicErrMsgKind::BarErr
        );
    }

    #[test]
    fn kind___name_and_display___use_field_names() {
        assert_eq!(basic::BasicErrMsgKind::FooErr.name(), "foo_err");
        assert_eq!(basic::BasicErrMsgKind::BarErr.to_string(), "bar_err");
        assert_eq!(basic::BasicErrMsgKind::Unknown.name(), "unknown");
    }

    #[test]
    fn identify___other_prefix___is_unknown() {
        assert_eq!(
            basic::identify_basic_err_msg(&prefix::buz_err()),
            basic::BasicErrMsgKind::Unknown
        );
    }
}

mod prefixes_and_paths {
    use super::*;

    #[test]
    fn prefix___replaces_identifier_prefix() {
        assert_eq!(prefix::buz_err().to_string(), "[PREF-1] this is BUZ error");
        assert_eq!(
            prefix::qux_err(123, String::from("hello world")).to_string(),
            "[PREF-2] this is QUX error [123, hello world]"
        );
    }

    #[test]
    fn path_specified___generated_into_explicit_file() {
        assert_eq!(
            path_specified::foo_bar_err().to_string(),
            "[ERR-1] this is FOOBAR error"
        );
        assert_eq!(
            path_specified::list_path_specified_err_msg(),
            &["[ERR-1] this is FOOBAR error"]
        );
    }
}

mod obsoletion_ids {
    use super::*;

    #[test]
    fn obsoleted_field___keeps_following_ids() {
        assert_eq!(obsoletion::one().to_string(), "[ERR-1] this is ONE error");
        assert_eq!(
            obsoletion::three(2.5).to_string(),
            "[ERR-3] this is THREE error [002.5]"
        );
    }

    #[test]
    fn obsoleted_field___is_not_listed() {
        assert_eq!(
            obsoletion::list_obsoletion_err_msg(),
            &[
                "[ERR-1] this is ONE error",
                "[ERR-3] this is THREE error [%05.1f]",
                "[ERR-4] disk is 100% full",
            ]
        );
    }

    #[test]
    fn parameterless_template___keeps_percent_sign() {
        assert_eq!(obsoletion::four().to_string(), "[ERR-4] disk is 100% full");
    }

    #[test]
    fn identify___after_obsoleted_field___maps_to_later_field() {
        assert_eq!(
            obsoletion::identify_obsoletion_err_msg(&obsoletion::four()),
            obsoletion::ObsoletionErrMsgKind::Four
        );
    }
}
