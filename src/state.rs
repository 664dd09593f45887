//! Application state shared by all handlers.
//!
//! Only configuration lives here. The question pool is deliberately not held in
//! memory: every quiz request reads the data file again.

use tracing::{info, instrument};

use crate::config::AppConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    /// Build state from env (and the optional TOML file).
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        info!(
            target: "daily_quiz",
            port = config.port,
            data_path = %config.data_path.display(),
            static_dir = %config.static_dir.display(),
            "Configuration resolved"
        );
        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }
}
