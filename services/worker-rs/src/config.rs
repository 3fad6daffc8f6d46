use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::error::WorkerError;

/// Worker settings, built once at startup and handed down explicitly.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub heartbeat_interval_secs: u64,
    /// Fallback filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: 60,
            log_level: "info".to_string(),
        }
    }
}

/// Loads `.env` from the working directory (or a parent) into the process
/// environment. Only a missing file is tolerated.
pub fn load_dotenv() -> Result<(), WorkerError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Defaults overlaid with `WORKER_*` variables from the environment.
    /// `.env` has to be loaded before this is called.
    pub fn load() -> Result<Self, WorkerError> {
        Self::from_figment(
            Figment::from(Serialized::defaults(Config::default()))
                .merge(Env::prefixed("WORKER_")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, WorkerError> {
        let config: Config = figment.extract()?;
        if config.heartbeat_interval_secs == 0 {
            return Err(WorkerError::InvalidInterval);
        }
        EnvFilter::try_new(&config.log_level)?;
        Ok(config)
    }

    /// `RUST_LOG` wins over `log_level` when set. Bad directives are errors
    /// in both cases, never silently dropped.
    pub fn log_filter(&self, rust_log: Option<&str>) -> Result<EnvFilter, WorkerError> {
        let directives = rust_log.unwrap_or(&self.log_level);
        Ok(EnvFilter::try_new(directives)?)
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }
}
