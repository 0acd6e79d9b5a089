//! User configuration read from `~/.oche/config.toml`.
//!
//! ```toml
//! [match]
//! starting_score = 301
//! legs_to_win_set = 2
//! sets_to_win_match = 3
//!
//! [roster]
//! dir = "/home/ann/.local/share/oche"
//!
//! [doubles]
//! seed = 42
//! ```

use crate::roster::{FileStore, RosterError, RosterRepository};
use crate::x01::MatchConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path:?}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Failed to parse config at {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Default, Deserialize)]
pub struct ScorerConfig {
    #[serde(rename = "match")]
    pub match_defaults: Option<MatchDefaults>,
    pub roster: Option<RosterConfig>,
    pub doubles: Option<DoublesConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchDefaults {
    pub starting_score: Option<u32>,
    pub legs_to_win_set: Option<u32>,
    pub sets_to_win_match: Option<u32>,
    pub start_player: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterConfig {
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DoublesConfig {
    pub seed: Option<u64>,
}

impl ScorerConfig {
    /// Load the user config. `None` when absent or unusable.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        if !path.exists() {
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|err| ConfigError::Parse {
            path: PathBuf::new(),
            message: err.to_string(),
        })
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Match rules with configured values over the defaults.
    pub fn match_config(&self) -> MatchConfig {
        let defaults = MatchConfig::default();
        let Some(section) = &self.match_defaults else {
            return defaults;
        };
        MatchConfig {
            starting_score: section.starting_score.unwrap_or(defaults.starting_score),
            legs_to_win_set: section.legs_to_win_set.unwrap_or(defaults.legs_to_win_set),
            sets_to_win_match: section.sets_to_win_match.or(defaults.sets_to_win_match),
            start_player: section.start_player.unwrap_or(defaults.start_player),
        }
    }

    /// Roster directory, falling back to the platform data directory.
    pub fn roster_dir(&self) -> Option<PathBuf> {
        self.roster
            .as_ref()
            .and_then(|r| r.dir.clone())
            .or_else(default_roster_dir)
    }

    pub fn doubles_seed(&self) -> Option<u64> {
        self.doubles.as_ref().and_then(|d| d.seed)
    }

    /// File-backed roster in [`roster_dir`](Self::roster_dir).
    pub fn open_roster(&self) -> Result<RosterRepository<FileStore>, RosterError> {
        let dir = self
            .roster_dir()
            .ok_or_else(|| RosterError::Store("no roster directory available".to_string()))?;
        Ok(RosterRepository::new(FileStore::open(dir)?))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".oche").join("config.toml"))
}

fn default_roster_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|data| data.join("oche"))
}
