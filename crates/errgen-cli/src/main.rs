//! errgen CLI - Generate error-message constructors
//!
//! Scans a directory for a struct whose fields carry `#[errgen(...)]`
//! annotations and writes `<type>_errmsg_gen.rs` next to it (or to
//! `--out-file`). With `--check` the existing file is compared instead.
//!
//! Exit codes: 0 on success, 2 for configuration errors, 1 for everything
//! else.

use anyhow::Context;
use clap::{ArgAction, Parser};
use errgen_core::{GenerateError, Generator, Mode, Outcome};
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "errgen")]
#[command(author, version, about = "Generate error-message constructors from an annotated struct", long_about = None)]
struct Cli {
    /// Name of the struct that declares the messages
    #[arg(short = 't', long = "type", value_name = "NAME")]
    type_name: Option<String>,

    /// Identifier prefix (default: ERR-)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output file (default: <dir>/<type>_errmsg_gen.rs)
    #[arg(short, long = "out-file", value_name = "PATH")]
    out_file: Option<PathBuf>,

    /// Directory whose .rs files are scanned (default: .)
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// First identifier (default: 1)
    #[arg(long, value_name = "N")]
    base: Option<u32>,

    /// TOML file with the same keys; flags take precedence
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Fail if the output file is missing or out of date instead of writing it
    #[arg(long)]
    check: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.check { Mode::Check } else { Mode::Write }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(outcome) => {
            tracing::debug!(messages = outcome.messages(), "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("errgen: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Outcome> {
    let config = settings::resolve(cli)?;
    let type_name = config.type_name.clone();
    let generator = Generator::new(config)?;

    let outcome = generator
        .run(cli.mode())
        .with_context(|| format!("generating messages for `{type_name}`"))?;

    Ok(outcome)
}

/// Exit code of the first [`GenerateError`] in the chain.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<GenerateError>())
        .map_or(1, |e| u8::try_from(e.exit_code()).unwrap_or(1))
}
