//! Application configuration.
//!
//! The configuration is loaded from a JSON file at
//! `$XDG_CONFIG_HOME/hyprnudge/config.json`.  Every section is optional and
//! falls back to compiled-in defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "steps": {
//!     "horizontal-step": 10,
//!     "vertical-step": 10
//!   },
//!   "bindings": {
//!     "install": true,
//!     "normal-prefix": "A",
//!     "slow-prefix": "C-A"
//!   }
//! }
//! ```

use crate::command::SpeedMode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Step sizes for normal-speed moves.
    #[serde(default)]
    pub steps: StepConfig,

    /// Keypad binding prefixes.
    #[serde(default)]
    pub bindings: BindingConfig,
}

/// Distance (in pixels) a normal-speed move travels on each axis.
///
/// Both values must be positive.  Slow moves ignore this and use
/// [`StepConfig::SLOW`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StepConfig {
    pub horizontal_step: i32,
    pub vertical_step: i32,
}

impl StepConfig {
    /// One unit on each axis.
    pub const SLOW: StepConfig = StepConfig {
        horizontal_step: 1,
        vertical_step: 1,
    };

    /// Reject steps that are not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal_step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "horizontal-step must be positive, got {}",
                self.horizontal_step
            )));
        }
        if self.vertical_step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "vertical-step must be positive, got {}",
                self.vertical_step
            )));
        }
        Ok(())
    }

    /// The steps a command at `speed` should use, given `self` as the
    /// configured steps.
    pub fn for_speed(self, speed: SpeedMode) -> StepConfig {
        match speed {
            SpeedMode::Normal => self,
            SpeedMode::Slow => StepConfig::SLOW,
        }
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            horizontal_step: 10,
            vertical_step: 10,
        }
    }
}

/// Which key prefixes the keypad bindings are installed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BindingConfig {
    /// Install the keypad bindings into the window keymap at startup.
    pub install: bool,
    /// Prefix for normal-speed moves and centering.
    pub normal_prefix: String,
    /// Prefix for slow moves.
    pub slow_prefix: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            install: true,
            normal_prefix: crate::keys::DEFAULT_NORMAL_PREFIX.to_string(),
            slow_prefix: crate::keys::DEFAULT_SLOW_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a JSON file at `path`.
    ///
    /// A missing file is reported as [`ConfigError::NotFound`]; anything
    /// else that goes wrong is [`ConfigError::Invalid`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            let message = format!("failed to read {}: {}", path.display(), e);
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(message)
            } else {
                ConfigError::Invalid(message)
            }
        })?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Invalid(format!("failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Config::load), but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(message)) => {
                debug!("{}, using defaults", message);
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Reject settings the mover cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.steps.validate()?;
        if self.bindings.normal_prefix.trim().is_empty() || self.bindings.slow_prefix.trim().is_empty() {
            return Err(ConfigError::Invalid("binding prefixes must not be empty".into()));
        }
        Ok(())
    }
}

/// Error from loading, parsing or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("config error: {0}")]
    NotFound(String),
    /// The file exists but cannot be read, parsed or validated.
    #[error("config error: {0}")]
    Invalid(String),
}
