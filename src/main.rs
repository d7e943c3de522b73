// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args.opt_value_from_str::<_, PathBuf>("--config").unwrap(),
    };

    app::run(flags)
}
