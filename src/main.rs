// SPDX-License-Identifier: MPL-2.0
use pictury::app::{self, paths, Flags};
use pictury::logging;
use std::process::ExitCode;

const HELP: &str = "\
Pictury - image gallery client

USAGE:
  pictury [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --api-url <URL>         Backend API base URL
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_url: args.opt_value_from_str("--api-url")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("pictury: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("pictury: {err}");
            ExitCode::FAILURE
        }
    }
}
