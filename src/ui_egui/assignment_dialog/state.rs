use chrono::NaiveDate;

use crate::models::assignment::Assignment;
use crate::models::chantier::Chantier;
use crate::models::settings::{parse_hhmm, Settings};
use crate::models::worker::Worker;

/// State for the assignment create/edit dialog
#[derive(Debug, Clone)]
pub struct AssignmentDialogState {
    /// Record being edited, `None` when creating
    pub original: Option<Assignment>,
    pub worker_id: i64,
    pub worker_name: String,
    pub date: NaiveDate,
    pub chantier_id: Option<i64>,
    /// "HH:MM"; empty means no time
    pub start_time: String,
    pub end_time: String,
    pub note: String,
    pub error_message: Option<String>,
}

impl AssignmentDialogState {
    pub fn new_assignment(worker: &Worker, worker_id: i64, date: NaiveDate, settings: &Settings) -> Self {
        Self {
            original: None,
            worker_id,
            worker_name: worker.display_name(),
            date,
            chantier_id: None,
            start_time: settings.default_start_time.clone(),
            end_time: settings.default_end_time.clone(),
            note: String::new(),
            error_message: None,
        }
    }

    pub fn from_assignment(assignment: &Assignment, worker_name: impl Into<String>) -> Self {
        let format_time = |time: Option<chrono::NaiveTime>| {
            time.map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default()
        };

        Self {
            original: Some(assignment.clone()),
            worker_id: assignment.worker_id,
            worker_name: worker_name.into(),
            date: assignment.date,
            chantier_id: Some(assignment.chantier_id),
            start_time: format_time(assignment.start_time),
            end_time: format_time(assignment.end_time),
            note: assignment.note.clone().unwrap_or_default(),
            error_message: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    /// Build the record to save from the form fields.
    pub fn to_assignment(&self, chantiers: &[Chantier]) -> Result<Assignment, String> {
        let chantier = self
            .chantier_id
            .and_then(|id| chantiers.iter().find(|c| c.id == Some(id)))
            .ok_or_else(|| "Choisissez un chantier".to_string())?;
        let chantier_id = chantier.id.ok_or_else(|| "Chantier non enregistré".to_string())?;

        let start_time = parse_optional_time(&self.start_time, "début")?;
        let end_time = parse_optional_time(&self.end_time, "fin")?;

        let mut assignment = match &self.original {
            Some(original) => original.clone(),
            None => Assignment::new(self.worker_id, chantier_id, chantier.name.clone(), self.date),
        };
        assignment.chantier_id = chantier_id;
        assignment.chantier_name = chantier.name.clone();
        assignment.color = chantier.color.clone();
        assignment.date = self.date;
        assignment.start_time = start_time;
        assignment.end_time = end_time;
        let note = self.note.trim();
        assignment.note = (!note.is_empty()).then(|| note.to_string());

        assignment.validate().map_err(|e| e.to_string())?;
        Ok(assignment)
    }
}

fn parse_optional_time(value: &str, label: &str) -> Result<Option<chrono::NaiveTime>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_hhmm(value)
        .map(Some)
        .ok_or_else(|| format!("Heure de {} invalide (HH:MM)", label))
}
