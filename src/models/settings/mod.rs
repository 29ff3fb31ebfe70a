// Settings module
// Persisted planning board preferences

use chrono::NaiveTime;

use super::worker::WorkerCategory;

/// How many days the planning board shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }

    /// Unknown values fall back to the week view.
    pub fn parse(value: &str) -> Self {
        match value {
            "Month" => ViewMode::Month,
            _ => ViewMode::Week,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: Option<i64>,
    pub view_mode: ViewMode,
    pub show_weekend: bool,
    pub expanded_categories: Vec<WorkerCategory>,
    /// "HH:MM", prefilled in the assignment dialog
    pub default_start_time: String,
    pub default_end_time: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            view_mode: ViewMode::Week,
            show_weekend: false,
            expanded_categories: WorkerCategory::ALL.to_vec(),
            default_start_time: "07:30".to_string(),
            default_end_time: "16:30".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        let start = parse_hhmm(&self.default_start_time)
            .ok_or_else(|| format!("Invalid start time: {}", self.default_start_time))?;
        let end = parse_hhmm(&self.default_end_time)
            .ok_or_else(|| format!("Invalid end time: {}", self.default_end_time))?;
        if end <= start {
            return Err("Default end time must be after default start time".to_string());
        }
        Ok(())
    }

    pub fn default_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((
            parse_hhmm(&self.default_start_time)?,
            parse_hhmm(&self.default_end_time)?,
        ))
    }
}

pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}
