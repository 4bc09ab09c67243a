use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pitboard.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitboardConfig {
    pub roster: RosterConfig,
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Path of the roster text file
    pub file: PathBuf,

    /// Copy the previous version aside before overwriting the roster file
    pub keep_backup: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Idle-season count at which an unreported number is dropped
    pub expiry_threshold: u32,
}

impl Default for PitboardConfig {
    fn default() -> Self {
        Self {
            roster: RosterConfig {
                file: PathBuf::from("roster.txt"),
                keep_backup: true,
            },
            policy: PolicyConfig {
                expiry_threshold: 3,
            },
        }
    }
}

impl PitboardConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow!("Failed to read config file: {}", e))?;

        let config: PitboardConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file: {}", e))?;

        Ok(config)
    }

    pub fn load_from_env() -> Self {
        let mut config = Self::default();

        // Override with environment variables
        if let Ok(file) = std::env::var("PITBOARD_ROSTER_FILE") {
            config.roster.file = PathBuf::from(file);
        }

        if let Ok(expiry) = std::env::var("PITBOARD_EXPIRY") {
            if let Ok(value) = expiry.parse::<u32>() {
                config.policy.expiry_threshold = value;
            }
        }

        config
    }

    /// Explicit `--config` path, else `pitboard.toml` in the working
    /// directory, else defaults with environment overrides.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::load_from_env()),
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| anyhow!("Failed to serialize config: {}", e))?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| anyhow!("Failed to write config file: {}", e))?;

        Ok(())
    }
}
