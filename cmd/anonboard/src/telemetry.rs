//! Tracing setup. `RUST_LOG` controls filtering (default `info`),
//! `LOG_FORMAT` picks human-readable or JSON lines.

use anyhow::anyhow;
use configs::LogFormat;
use tracing_subscriber::EnvFilter;

pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
    };

    result.map_err(|err| anyhow!(err))
}
