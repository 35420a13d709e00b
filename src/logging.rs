//! Tracing bootstrap shared by the service binaries.

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::error::{AppError, Result};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise the filter comes from the
/// `log_level` field of the settings record. Calling this a second time in
/// the same process is a no-op.
pub fn init(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| AppError::LogLevel(e.to_string()))?;
    if fmt().with_env_filter(filter).try_init().is_ok() {
        info!(log_level = %settings.log_level, "logging initialised");
    }
    Ok(())
}
