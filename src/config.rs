//! Startup configuration read from environment variables.
//!
//! | variable           | meaning                                  | default            |
//! |--------------------|------------------------------------------|--------------------|
//! | `FRETBOARD_MODE`   | `free`, `guided` (alias `restricted`)    | `free`             |
//! | `FRETBOARD_TARGET` | a natural note or `random`               | `random`           |
//! | `FRETBOARD_SEED`   | `u64` seed for every random draw         | OS entropy         |
//! | `FRETBOARD_LOG`    | log file path                            | `~/.fretboard-trainer/trainer.log` |

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{PracticeMode, TargetChoice};
use crate::session::Session;

pub const MODE_VAR: &str = "FRETBOARD_MODE";
pub const TARGET_VAR: &str = "FRETBOARD_TARGET";
pub const SEED_VAR: &str = "FRETBOARD_SEED";
pub const LOG_VAR: &str = "FRETBOARD_LOG";

/// Folder name used beneath the user's home directory for the log file.
const DATA_DIR_NAME: &str = ".fretboard-trainer";
/// Log file name stored inside the data directory.
const LOG_FILE_NAME: &str = "trainer.log";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub mode: PracticeMode,
    pub target: TargetChoice,
    pub seed: Option<u64>,
    /// Explicit log destination; `None` falls back to the home data dir.
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset and blank values keep their
    /// defaults; anything else must parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = value(MODE_VAR) {
            config.mode = raw.parse().with_context(|| format!("failed to read {MODE_VAR}"))?;
        }
        if let Some(raw) = value(TARGET_VAR) {
            config.target = raw
                .parse()
                .with_context(|| format!("failed to read {TARGET_VAR}"))?;
        }
        if let Some(raw) = value(SEED_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?;
            config.seed = Some(seed);
        }
        if let Some(raw) = value(LOG_VAR) {
            config.log_path = Some(PathBuf::from(raw));
        }

        Ok(config)
    }

    /// Random source for the session: seeded when configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn build_session(&self) -> Session {
        Session::new(self.mode, self.target, self.rng())
    }

    /// Where log output goes.
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_path {
            return Ok(path.clone());
        }
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
    }
}
