use crate::models::settings::Settings;
use crate::services::database::Database;
use anyhow::{anyhow, Context, Result};

use super::mapper::{row_to_settings, serialize_categories};

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                "SELECT id, view_mode, show_weekend, expanded_categories,
                        default_start_time, default_end_time
                 FROM settings WHERE id = 1",
                [],
                row_to_settings,
            )
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE settings \
             SET view_mode = ?1, \
                 show_weekend = ?2, \
                 expanded_categories = ?3, \
                 default_start_time = ?4, \
                 default_end_time = ?5, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1",
            (
                settings.view_mode.as_str(),
                settings.show_weekend as i32,
                serialize_categories(&settings.expanded_categories),
                &settings.default_start_time,
                &settings.default_end_time,
            ),
        )
        .context("Failed to update settings")?;

        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&Settings::default())
    }
}
