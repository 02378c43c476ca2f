use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GameResult;
use crate::model::{LayoutSpec, TileCatalog};

pub const SETTINGS_PATH_VAR: &str = "MAHJONG_SETTINGS";
const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub layout: LayoutSpec,

    #[serde(default)]
    pub catalog: TileCatalog,

    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: CURRENT_VERSION,
            layout: LayoutSpec::default(),
            catalog: TileCatalog::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Loads from the file named by `MAHJONG_SETTINGS`, or the defaults.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Settings::default(),
        }
    }

    /// Like [`Settings::try_load_from`], but falls back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(target: "settings", "Using default settings, could not load {:?}: {}", path, err);
                Settings::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> GameResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut settings = serde_json::from_str::<Settings>(&contents)?;
        settings.migrate();
        info!(target: "settings", "Loaded settings from {:?}", path);
        Ok(settings)
    }

    fn settings_path() -> Option<PathBuf> {
        std::env::var_os(SETTINGS_PATH_VAR).map(PathBuf::from)
    }

    fn migrate(&mut self) {
        match self.version {
            // version 1 files predate the wings; their closed rows meant nothing
            1 if self.layout.left_wing == 0 && self.layout.right_wing == 0 => {
                self.layout.closed_rows.clear();
                self.version = CURRENT_VERSION;
            }
            v if v < CURRENT_VERSION => {
                self.version = CURRENT_VERSION;
            }
            _ => (),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// `SEED` from the environment wins over the configured seed.
    pub fn seed(&self) -> Option<u64> {
        Self::seed_from_env().or(self.seed)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok().and_then(|v| v.parse::<u64>().ok())
    }
}
