use super::confirm::ConfirmDialogState;
use super::context::AppContext;
use super::state::AppState;
use super::toast::ToastManager;
use super::PlanningApp;
use crate::config::AppConfig;
use crate::models::settings::Settings;
use crate::services::database::{seed, Database};
use crate::services::planning::visible_days;
use crate::services::settings::SettingsService;
use crate::ui_egui::views::PlanningGrid;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::sync::Arc;

impl PlanningApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        database: &'static Database,
        today: NaiveDate,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_database(database, today)
    }

    /// Build the app around an opened database, without a window.
    pub fn with_database(database: &'static Database, today: NaiveDate) -> Self {
        let context = AppContext::new(database);
        let settings = load_settings_or_default(&context.settings_service());
        log::info!(
            "Loaded settings: view_mode={}, show_weekend={}",
            settings.view_mode.as_str(),
            settings.show_weekend
        );
        let expanded = settings.expanded_categories.iter().copied().collect();

        let mut app = Self {
            context,
            settings,
            state: AppState::new(today, expanded),
            grid: PlanningGrid::new(),
            assignment_dialog: None,
            toast_manager: ToastManager::new(),
            confirm_dialog: ConfirmDialogState::new(),
        };
        app.reload_data();
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        if self.state.needs_reload {
            self.reload_data();
        }

        self.handle_keyboard_shortcuts(ctx);
        self.render_toolbar(ctx);
        self.render_grid(ctx);
        self.render_assignment_dialog(ctx);
        self.handle_confirm_dialog(ctx);

        // Last, so toasts appear on top
        self.toast_manager.render(ctx);
    }

    pub(super) fn request_reload(&mut self) {
        self.state.needs_reload = true;
    }

    /// Reload workers, chantiers and the assignments of the displayed range.
    ///
    /// Weekend days are always fetched so toggling them needs no reload.
    pub(super) fn reload_data(&mut self) {
        self.state.needs_reload = false;

        let days = visible_days(self.state.reference, self.settings.view_mode, true);
        let (Some(&start), Some(&end)) = (days.first(), days.last()) else {
            return;
        };

        match self.context.assignment_service().list_between(start, end) {
            Ok(assignments) => self.state.data.assignments = Arc::from(assignments),
            Err(err) => {
                log::error!("Failed to load assignments: {:#}", err);
                self.toast_manager
                    .error("Impossible de charger les affectations");
            }
        }
        match self.context.worker_service().list_all() {
            Ok(workers) => self.state.data.workers = workers,
            Err(err) => log::error!("Failed to load workers: {:#}", err),
        }
        match self.context.chantier_service().list_all() {
            Ok(chantiers) => self.state.data.chantiers = chantiers,
            Err(err) => log::error!("Failed to load chantiers: {:#}", err),
        }

        log::debug!(
            "Loaded {} assignments between {} and {}",
            self.state.data.assignments.len(),
            start,
            end
        );
    }

    pub(super) fn persist_settings(&mut self) {
        let mut expanded: Vec<_> = self.state.expanded.iter().copied().collect();
        expanded.sort();
        self.settings.expanded_categories = expanded;

        if let Err(err) = self.context.settings_service().update(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
            self.toast_manager
                .error("Impossible d'enregistrer les préférences");
        }
    }
}

/// Open the configured database, create the schema and optionally seed a
/// demo roster. The database lives for the whole process.
pub fn initialize_database(config: &AppConfig, today: NaiveDate) -> Result<&'static Database> {
    let db_path = config.resolve_database_path();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    let db = Database::new(&db_path.to_string_lossy())?;
    db.initialize_schema()?;
    log::info!("Database ready at {}", db_path.display());

    if config.seed_sample_data && seed::is_empty(db.connection())? {
        seed::seed_sample_data(db.connection(), today)?;
        log::info!("Seeded sample planning data");
    }

    Ok(Box::leak(Box::new(db)))
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}
