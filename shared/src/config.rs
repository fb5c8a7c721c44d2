use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_TRIVIAL_MAX_CHARS: usize = 40;
pub const DEFAULT_COPY_CONFIRMATION_MS: u64 = 1200;

/// Rendering options shared by the static and interactive renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Highlighting theme name, looked up in the bundled theme set.
    pub theme: String,
    /// Longest single-line plain code span still rendered inline.
    pub trivial_max_chars: usize,
    /// How long the copy button shows its confirmation label.
    pub copy_confirmation_ms: u64,
    pub line_numbers: bool,
    /// Turn bare `http(s)://` and `www.` URLs in text into links.
    pub autolinks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            trivial_max_chars: DEFAULT_TRIVIAL_MAX_CHARS,
            copy_confirmation_ms: DEFAULT_COPY_CONFIRMATION_MS,
            line_numbers: true,
            autolinks: true,
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.copy_confirmation_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "copy_confirmation_ms",
                reason: "must be greater than zero",
            });
        }
        if self.theme.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "theme",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}
