// SPDX-License-Identifier: MPL-2.0
use merkaba_site::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "merkaba_site=info";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: optional(&mut args, "--lang"),
        assets: optional(&mut args, "--assets"),
        config_dir: optional(&mut args, "--config-dir"),
        data_dir: optional(&mut args, "--data-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn optional(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, %err, "ignoring malformed flag");
        None
    })
}
