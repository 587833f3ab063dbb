// SPDX-License-Identifier: MPL-2.0
use compare_lens::app::{self, Flags};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: compare_lens [OPTIONS] <BEFORE> <AFTER>

Shows two images with a draggable before/after divider.
BEFORE and AFTER may be file paths or http(s) URLs.

Options:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --static              Disable the auto-sweep and enable gestures
  --no-labels           Hide the Before/After labels
  -h, --help            Print this help

Logging is controlled with RUST_LOG (default: compare_lens=info).";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let interactive = args.contains("--static");
    let hide_labels = args.contains("--no-labels");
    let before = args.free_from_str()?;
    let after = args.free_from_str()?;

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected arguments: {remaining:?}"),
        });
    }

    Ok(Flags {
        lang,
        config_dir,
        before,
        after,
        interactive,
        hide_labels,
    })
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compare_lens=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        println!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application terminated with an error");
            ExitCode::FAILURE
        }
    }
}
