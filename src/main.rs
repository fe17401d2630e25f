// SPDX-License-Identifier: MPL-2.0
use iced_atlas::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("iced_atlas: {error}");
            eprintln!("usage: iced_atlas [--lang <id>] [--map <file.svg>] [--api-base <url>] [--config-dir <dir>]");
            std::process::exit(2);
        }
    };

    tracing::info!(?flags, "starting");
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        map_path: args.opt_value_from_str("--map")?,
        api_base: args.opt_value_from_str("--api-base")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}
