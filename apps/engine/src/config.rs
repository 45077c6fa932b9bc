//! Engine configuration.
//!
//! Defaults match the reference timing (1 s save debounce, 2 s / 3 s status
//! display). `from_env` lets a host override the debounce without
//! recompiling.

use std::time::Duration;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AutoSaveTiming {
    /// Coalescing window: edits closer together than this collapse into one
    /// storage write.
    pub debounce: Duration,
    /// How long `Saved` stays visible before the status returns to `Idle`.
    pub saved_display: Duration,
    /// How long `Error` stays visible before the status returns to `Idle`.
    pub error_display: Duration,
}

impl Default for AutoSaveTiming {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(1000),
            saved_display: Duration::from_secs(2),
            error_display: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub autosave: AutoSaveTiming,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave: AutoSaveTiming::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut autosave = AutoSaveTiming::default();
        if let Ok(raw) = std::env::var("CVSTUDIO_AUTOSAVE_DEBOUNCE_MS") {
            let ms = raw
                .parse::<u64>()
                .context("CVSTUDIO_AUTOSAVE_DEBOUNCE_MS must be a number of milliseconds")?;
            autosave.debounce = Duration::from_millis(ms);
        }

        Ok(Config {
            autosave,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
