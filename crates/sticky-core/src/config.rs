//! Widget configuration (stored in ~/.config/sticky/config.toml)
//!
//! Every field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StickyError};
use crate::presentation::Variant;
use crate::store::IdScheme;

const CONFIG_DIR: &str = "sticky";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "STICKY_CONFIG_DIR";

/// Default notes file, relative to the working directory
pub const DEFAULT_NOTES_FILE: &str = "notes.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Notes file location
    #[serde(default = "default_notes_file")]
    pub notes_file: PathBuf,

    /// Id assignment for new notes
    #[serde(default)]
    pub id_scheme: IdScheme,

    /// Widget flavour
    #[serde(default)]
    pub variant: Variant,

    /// How long a notice stays up, in milliseconds
    #[serde(default = "default_notice_ms")]
    pub notice_ms: u64,

    /// Fade-in length, in milliseconds
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,

    /// Number of opacity steps in the fade-in
    #[serde(default = "default_fade_steps")]
    pub fade_steps: u32,
}

fn default_notes_file() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_FILE)
}

fn default_notice_ms() -> u64 {
    2000
}

fn default_fade_ms() -> u64 {
    380
}

fn default_fade_steps() -> u32 {
    19
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            notes_file: default_notes_file(),
            id_scheme: IdScheme::default(),
            variant: Variant::default(),
            notice_ms: default_notice_ms(),
            fade_ms: default_fade_ms(),
            fade_steps: default_fade_steps(),
        }
    }
}

impl WidgetConfig {
    /// Location of the config file
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    StickyError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location, or defaults if there is no file
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StickyError::io_operation("read config", path, e))?;
        let config: WidgetConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| StickyError::Other(format!("failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        if self.notes_file.as_os_str().is_empty() {
            return Err(StickyError::invalid_value("notes_file", "(empty)"));
        }
        Ok(())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}
