//! Application configuration
//!
//! Built once in `main` and handed to the controller by reference.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. Environment variables (`SUBWAY_SKIP_SEED`)
//! 2. Defaults

use crate::limits::SubwayLimits;

/// Environment variable that starts the app with an empty network
pub const SKIP_SEED_ENV: &str = "SUBWAY_SKIP_SEED";

/// Immutable runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub limits: SubwayLimits,

    /// Load the built-in stations and lines before the first prompt
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            limits: SubwayLimits::default(),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Defaults merged with environment overrides
    pub fn from_env() -> Self {
        Self::default().with_skip_seed(std::env::var(SKIP_SEED_ENV).ok().as_deref())
    }

    fn with_skip_seed(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if is_truthy(value) {
                self.seed = false;
            }
        }
        self
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
