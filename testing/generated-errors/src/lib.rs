//! Error constructors generated by errgen at build time
//!
//! Each module includes one file the build script wrote to `OUT_DIR`.

pub mod defs;

pub mod basic {
    include!(concat!(env!("OUT_DIR"), "/basic_err_msg_errmsg_gen.rs"));
}

pub mod prefix {
    include!(concat!(env!("OUT_DIR"), "/prefix_err_msg_errmsg_gen.rs"));
}

pub mod path_specified {
    include!(concat!(env!("OUT_DIR"), "/foobar_errmsg_gen.rs"));
}

pub mod obsoletion {
    include!(concat!(env!("OUT_DIR"), "/obsoletion_err_msg_errmsg_gen.rs"));
}
