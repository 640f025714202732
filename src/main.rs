// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags, StartupToast};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
iced_toast: storefront demo with an animated toast notification

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --kind <KIND>          Launch toast kind: success, error or info
  --title <TEXT>         Launch toast title
  --message <TEXT>       Launch toast message
  --duration <MS>        Launch toast duration in milliseconds
  -h, --help             Print this help

ENVIRONMENT:
  ICED_TOAST_CONFIG_DIR  Same as --config-dir
  RUST_LOG               Log filter (default: iced_toast=info)
";

fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_toast=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let startup_toast = StartupToast::from_parts(
        args.opt_value_from_str("--kind")?,
        args.opt_value_from_str("--title")?,
        args.opt_value_from_str("--message")?,
        args.opt_value_from_str("--duration")?,
    );

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    Ok(Flags {
        lang,
        config_dir,
        startup_toast,
    })
}

fn main() -> iced::Result {
    setup_logging();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
