// SPDX-License-Identifier: MPL-2.0
use iced_settings::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,wgpu_core=error,wgpu_hal=error,naga=error,iced_wgpu=error";

const HELP: &str = "\
iced_settings

USAGE:
  iced_settings [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <CODE>           Force the interface language (e.g. fr, en-US)
  --config-dir <PATH>     Read and write settings.toml in PATH

ENVIRONMENT:
  ICED_SETTINGS_CONFIG_DIR  Config directory, overridden by --config-dir
  RUST_LOG                  Log filter (tracing-subscriber syntax)
";

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    init_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!(version = env!("CARGO_PKG_VERSION"), ?flags, "starting iced_settings");
    app::run(flags)
}
