use crate::models::settings::{Settings, ViewMode};
use crate::models::worker::WorkerCategory;
use rusqlite::Row;

pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    let expanded_json: Option<String> = row.get(3)?;
    Ok(Settings {
        id: Some(row.get(0)?),
        view_mode: ViewMode::parse(&row.get::<_, String>(1)?),
        show_weekend: row.get::<_, i32>(2)? != 0,
        expanded_categories: deserialize_categories(expanded_json.as_deref()),
        default_start_time: row.get(4)?,
        default_end_time: row.get(5)?,
    })
}

/// `NULL` means "never saved": every group starts expanded.
pub fn deserialize_categories(json: Option<&str>) -> Vec<WorkerCategory> {
    let Some(json) = json else {
        return WorkerCategory::ALL.to_vec();
    };
    match serde_json::from_str(json) {
        Ok(categories) => categories,
        Err(err) => {
            log::warn!("Ignoring malformed expanded_categories {:?}: {}", json, err);
            WorkerCategory::ALL.to_vec()
        }
    }
}

pub fn serialize_categories(categories: &[WorkerCategory]) -> String {
    serde_json::to_string(categories).unwrap_or_else(|_| "[]".to_string())
}
