// Assignment module
// One worker planned on one chantier for one day

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use std::collections::BTreeSet;

use super::error::{validate_hex_color, ValidationError};

/// A worker's planned presence on a chantier for a single day.
///
/// Multi-day presence is stored as one record per day; a contiguous run of
/// records sharing `(worker_id, chantier_id)` is displayed and resized as a
/// block.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub id: Option<i64>,
    pub worker_id: i64,
    pub chantier_id: i64,
    /// Denormalized from the chantier so confirmations can name it.
    pub chantier_name: String,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub note: Option<String>,
    /// Chantier color (hex), `None` for the default block color
    pub color: Option<String>,
    pub created_at: Option<DateTime<Local>>,
    pub updated_at: Option<DateTime<Local>>,
}

impl Assignment {
    /// Create a new, unsaved assignment
    ///
    /// # Examples
    /// ```
    /// use chantier_planning::models::assignment::Assignment;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    /// let assignment = Assignment::new(1, 7, "Résidence Les Tilleuls", date);
    /// assert!(assignment.id.is_none());
    /// assert_eq!(assignment.block_key(), (1, 7));
    /// ```
    pub fn new(
        worker_id: i64,
        chantier_id: i64,
        chantier_name: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            worker_id,
            chantier_id,
            chantier_name: chantier_name.into(),
            date,
            start_time: None,
            end_time: None,
            note: None,
            color: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The `(worker, chantier)` pair that identifies the block this record belongs to.
    pub fn block_key(&self) -> (i64, i64) {
        (self.worker_id, self.chantier_id)
    }

    pub fn same_block(&self, other: &Assignment) -> bool {
        self.block_key() == other.block_key()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chantier_name.trim().is_empty() {
            return Err(ValidationError::Empty("Chantier name"));
        }

        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if end <= start {
                return Err(ValidationError::TimeRange { start, end });
            }
        }

        if let Some(ref color) = self.color {
            validate_hex_color(color)?;
        }

        Ok(())
    }

    /// Short "08:00-17:00" label, or `None` when no times are set.
    pub fn time_label(&self) -> Option<String> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                Some(format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")))
            }
            (Some(start), None) => Some(start.format("%H:%M").to_string()),
            _ => None,
        }
    }
}

/// Inclusive bounds of the run of consecutive days in `dates` that contains `date`.
///
/// When `date` itself is not in the set the run degenerates to `(date, date)`.
pub fn contiguous_run(date: NaiveDate, dates: &BTreeSet<NaiveDate>) -> (NaiveDate, NaiveDate) {
    if !dates.contains(&date) {
        return (date, date);
    }

    let mut start = date;
    while dates.contains(&(start - Duration::days(1))) {
        start -= Duration::days(1);
    }

    let mut end = date;
    while dates.contains(&(end + Duration::days(1))) {
        end += Duration::days(1);
    }

    (start, end)
}
