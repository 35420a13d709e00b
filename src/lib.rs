//! Re-exports the configuration surface consumed by the pipeline services,
//! allowing them to pull in the settings record, error types, and the
//! logging bootstrap from a single crate.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Settings;
