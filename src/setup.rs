// src/setup.rs

use graphql::{build_schema, PortalSchema};
use services::{ConfigError, LogFormat, PortalConfig, SimulatedGateway, SystemClock};
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

pub(super) fn load_config() -> Result<PortalConfig, ConfigError> {
    dotenvy::dotenv().ok();
    PortalConfig::from_env()
}

pub(super) fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

pub(super) fn set_up_schema(config: &PortalConfig) -> PortalSchema {
    let gateway = match config.submit_delay {
        Some(delay) => SimulatedGateway::new().with_delay(delay),
        None => SimulatedGateway::new(),
    };
    let schema = build_schema(gateway, Arc::new(SystemClock));
    tracing::info!(delay_override = ?config.submit_delay, "schema ready");
    schema
}
