use crate::services::assignment::AssignmentService;
use crate::services::chantier::ChantierService;
use crate::services::database::Database;
use crate::services::settings::SettingsService;
use crate::services::worker::WorkerService;

/// Shared access point for the services the app modules need.
pub struct AppContext {
    database: &'static Database,
}

impl AppContext {
    pub fn new(database: &'static Database) -> Self {
        Self { database }
    }

    pub fn settings_service(&self) -> SettingsService<'_> {
        SettingsService::new(self.database)
    }

    pub fn assignment_service(&self) -> AssignmentService<'_> {
        AssignmentService::new(self.database.connection())
    }

    pub fn worker_service(&self) -> WorkerService<'_> {
        WorkerService::new(self.database.connection())
    }

    pub fn chantier_service(&self) -> ChantierService<'_> {
        ChantierService::new(self.database.connection())
    }
}
