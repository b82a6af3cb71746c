use crate::cli::{
    actions::Action,
    commands::{self, logging, ARG_API_URL, ARG_DASHBOARD_URL, ARG_SESSION_FILE},
    dispatch::handler,
    globals::GlobalArgs,
};
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Start the CLI
pub fn start() -> Result<(GlobalArgs, Action)> {
    let matches = commands::new().get_matches();

    let verbosity_level = match matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .map_or(0, |&v| v)
    {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let globals = GlobalArgs::new(
        matches
            .get_one::<String>(ARG_API_URL)
            .map(ToString::to_string)
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_API_URL}"))?,
        matches
            .get_one::<String>(ARG_DASHBOARD_URL)
            .map(ToString::to_string)
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_DASHBOARD_URL}"))?,
        matches
            .get_one::<String>(ARG_SESSION_FILE)
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_SESSION_FILE}"))?,
    );

    let action = handler(&matches)?;

    Ok((globals, action))
}
