//! stderr logging whose level can be raised or lowered after startup.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub type LevelHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` plus a `rocketchat=<level>` directive; unknown levels mean info.
pub fn filter_for(level: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("rocketchat={}", level.to_ascii_lowercase()).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::INFO.into()),
    }
}

/// Install the global subscriber. Must run before the config is loaded so
/// loader warnings reach stderr.
pub fn init(level: &str) -> LevelHandle {
    let (filter, handle) = reload::Layer::new(filter_for(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to the level from the config file.
pub fn set_level(handle: &LevelHandle, level: &str) {
    if let Err(e) = handle.reload(filter_for(level)) {
        tracing::warn!("failed to apply log level {level}: {e}");
    }
}
