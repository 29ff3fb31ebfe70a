use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

use crate::models::assignment::Assignment;
use crate::models::chantier::Chantier;
use crate::models::worker::{Worker, WorkerCategory};

/// Data loaded from the database for the visible range.
///
/// `assignments` is replaced wholesale on reload so the grid can detect a
/// new list by pointer identity and rebuild its index.
pub struct PlanningData {
    pub assignments: Arc<[Assignment]>,
    pub workers: Vec<Worker>,
    pub chantiers: Vec<Chantier>,
}

impl Default for PlanningData {
    fn default() -> Self {
        Self {
            assignments: Arc::from(Vec::new()),
            workers: Vec::new(),
            chantiers: Vec::new(),
        }
    }
}

pub struct AppState {
    /// Any day inside the displayed week or month
    pub reference: NaiveDate,
    pub today: NaiveDate,
    pub expanded: HashSet<WorkerCategory>,
    pub data: PlanningData,
    pub needs_reload: bool,
}

impl AppState {
    pub fn new(today: NaiveDate, expanded: HashSet<WorkerCategory>) -> Self {
        Self {
            reference: today,
            today,
            expanded,
            data: PlanningData::default(),
            needs_reload: true,
        }
    }

    pub fn worker(&self, worker_id: i64) -> Option<&Worker> {
        self.data.workers.iter().find(|w| w.id == Some(worker_id))
    }
}
