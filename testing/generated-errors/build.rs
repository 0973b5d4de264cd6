//! Generates the error constructors for the fixture structs in `src/defs`.

use errgen_core::naming::default_file_name;
use errgen_core::{GeneratorConfig, generate_file};
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let defs = PathBuf::from("src/defs");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/defs");

    let configs = [
        GeneratorConfig::new("BasicErrMsg"),
        GeneratorConfig::new("PrefixErrMsg").with_prefix("PREF-"),
        GeneratorConfig::new("PathSpecifiedErrMsg")
            .with_output(out_dir.join("foobar_errmsg_gen.rs")),
        GeneratorConfig::new("ObsoletionErrMsg"),
    ];

    for config in configs {
        // Keep generated files out of the source tree
        let config = if config.output.is_some() {
            config
        } else {
            let file = default_file_name(&config.type_name);
            config.with_output(out_dir.join(file))
        };

        generate_file(config.with_source_dir(defs.clone()))?;
    }

    Ok(())
}
