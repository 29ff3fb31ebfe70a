use chrono::{DateTime, Local};
use rusqlite::{self, Row};

use crate::models::assignment::Assignment;

/// Columns read by every assignment query; the chantier join supplies the
/// name and the inherited block color.
pub(crate) const SELECT_ASSIGNMENT: &str = "SELECT a.id, a.worker_id, a.chantier_id, c.name, a.date,
            a.start_time, a.end_time, a.note, c.color, a.created_at, a.updated_at
     FROM assignments a
     JOIN chantiers c ON c.id = a.chantier_id";

pub(crate) fn map_assignment_row(row: &Row) -> rusqlite::Result<Assignment> {
    Ok(Assignment {
        id: Some(row.get(0)?),
        worker_id: row.get(1)?,
        chantier_id: row.get(2)?,
        chantier_name: row.get(3)?,
        date: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        note: row.get(7)?,
        color: row.get(8)?,
        created_at: Some(to_local_datetime(row.get::<_, String>(9)?)?),
        updated_at: Some(to_local_datetime(row.get::<_, String>(10)?)?),
    })
}

pub(crate) fn to_local_datetime(value: String) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}
