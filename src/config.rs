// Application configuration
// Startup options read from config.toml; view preferences live in the database

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "planning.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the platform data directory when set
    pub database_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
    /// Fill an empty database with a demo roster on startup
    pub seed_sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            window_width: 1400.0,
            window_height: 860.0,
            seed_sample_data: true,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("fr", "Chantier", "ChantierPlanning")
}

impl AppConfig {
    /// `<config dir>/config.toml`, or `None` when the platform has no home.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads the user's config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("No config directory available, using default configuration");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{:#}, using default configuration", err);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn resolve_database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }

        #[cfg(debug_assertions)]
        {
            PathBuf::from(DATABASE_FILE)
        }

        #[cfg(not(debug_assertions))]
        {
            project_dirs()
                .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
                .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
        }
    }
}
