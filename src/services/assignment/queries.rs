use super::shared::{map_assignment_row, SELECT_ASSIGNMENT};
use super::AssignmentService;
use crate::models::assignment::Assignment;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{self, params};

impl<'a> AssignmentService<'a> {
    /// Assignments dated within `start..=end`, ordered by date then id.
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Assignment>> {
        let sql = format!(
            "{SELECT_ASSIGNMENT}
             WHERE a.date >= ?1 AND a.date <= ?2
             ORDER BY a.date ASC, a.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let assignments = stmt
            .query_map(params![start, end], map_assignment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list assignments")?;
        Ok(assignments)
    }

    /// Every daily record of one `(worker, chantier)` pair.
    pub fn list_for_block(&self, worker_id: i64, chantier_id: i64) -> Result<Vec<Assignment>> {
        let sql = format!(
            "{SELECT_ASSIGNMENT}
             WHERE a.worker_id = ?1 AND a.chantier_id = ?2
             ORDER BY a.date ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let assignments = stmt
            .query_map(params![worker_id, chantier_id], map_assignment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list block assignments")?;
        Ok(assignments)
    }

    pub fn list_for_worker_between(
        &self,
        worker_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Assignment>> {
        let sql = format!(
            "{SELECT_ASSIGNMENT}
             WHERE a.worker_id = ?1 AND a.date >= ?2 AND a.date <= ?3
             ORDER BY a.date ASC, a.id ASC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let assignments = stmt
            .query_map(params![worker_id, start, end], map_assignment_row)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list worker assignments")?;
        Ok(assignments)
    }
}
