// SPDX-License-Identifier: MPL-2.0
use kiosk_dash::app::{self, paths, Flags};
use kiosk_dash::config;
use std::process::ExitCode;

const HELP: &str = "\
kiosk_dash - touch dashboard with idle screensaver

USAGE:
  kiosk_dash [OPTIONS]

OPTIONS:
  --lang <ID>                     UI language (e.g. en-US, ko)
  --config-dir <PATH>             Directory holding settings.toml
  --screensaver-timeout-ms <MS>   Idle time before the screensaver appears
  --init-config                   Write a default settings.toml and exit
  -h, --help                      Print this help
";

fn init_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn parse_args() -> Result<(Flags, bool), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let init_config = args.contains("--init-config");
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        screensaver_timeout_ms: args.opt_value_from_str("--screensaver-timeout-ms")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok((flags, init_config))
}

fn main() -> ExitCode {
    init_logging();

    let (flags, init_config) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    if init_config {
        return match config::init_default_with_override(None) {
            Ok(Some(path)) => {
                tracing::info!(path = %path.display(), "wrote default configuration");
                ExitCode::SUCCESS
            }
            Ok(None) => {
                tracing::info!("configuration already present; nothing written");
                ExitCode::SUCCESS
            }
            Err(err) => {
                tracing::error!(error = %err, "could not write default configuration");
                ExitCode::FAILURE
            }
        };
    }

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
