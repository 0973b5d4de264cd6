//! Annotated structs the build script generates code from

pub mod basic;
pub mod obsoletion;
pub mod path_specified;
pub mod prefix;
