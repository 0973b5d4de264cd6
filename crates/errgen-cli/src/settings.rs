//! Merging of the config file and command-line flags

use crate::Cli;
use errgen_core::{GenerateResult, GeneratorConfig};

/// Build the run configuration.
///
/// Starts from `--config` when given (defaults otherwise), then applies
/// every flag that was passed. Validation happens later, in
/// [`errgen_core::Generator::new`].
pub(crate) fn resolve(cli: &Cli) -> GenerateResult<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(type_name) = &cli.type_name {
        config.type_name = type_name.clone();
    }
    if let Some(prefix) = &cli.prefix {
        config = config.with_prefix(prefix.clone());
    }
    if let Some(out_file) = &cli.out_file {
        config = config.with_output(out_file.clone());
    }
    if let Some(dir) = &cli.dir {
        config = config.with_source_dir(dir.clone());
    }
    if let Some(base) = cli.base {
        config = config.with_base(base);
    }

    Ok(config)
}
