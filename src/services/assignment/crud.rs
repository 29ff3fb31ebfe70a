use super::shared::{map_assignment_row, SELECT_ASSIGNMENT};
use super::AssignmentService;
use crate::models::assignment::Assignment;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::{self, params, OptionalExtension};

impl<'a> AssignmentService<'a> {
    /// Insert a new assignment and return it as stored (with chantier name and color).
    pub fn create(&self, assignment: Assignment) -> Result<Assignment> {
        assignment.validate()?;

        let now = Local::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO assignments (
                    worker_id, chantier_id, date, start_time, end_time, note,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    assignment.worker_id,
                    assignment.chantier_id,
                    assignment.date,
                    assignment.start_time,
                    assignment.end_time,
                    assignment.note,
                    &now,
                    &now,
                ],
            )
            .context("Failed to insert assignment")?;

        let id = self.conn.last_insert_rowid();
        self.get(id)?
            .ok_or_else(|| anyhow!("Assignment {} vanished after insert", id))
    }

    pub fn get(&self, id: i64) -> Result<Option<Assignment>> {
        let sql = format!("{SELECT_ASSIGNMENT} WHERE a.id = ?");
        let assignment = self
            .conn
            .query_row(&sql, [id], map_assignment_row)
            .optional()
            .context("Failed to load assignment")?;
        Ok(assignment)
    }

    /// Persist worker, chantier, date, times and note of an existing assignment.
    pub fn update(&self, assignment: &Assignment) -> Result<()> {
        let id = assignment
            .id
            .ok_or_else(|| anyhow!("Assignment ID is required for update"))?;
        assignment.validate()?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE assignments SET
                    worker_id = ?, chantier_id = ?, date = ?, start_time = ?, end_time = ?,
                    note = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    assignment.worker_id,
                    assignment.chantier_id,
                    assignment.date,
                    assignment.start_time,
                    assignment.end_time,
                    assignment.note,
                    Local::now().to_rfc3339(),
                    id,
                ],
            )
            .context("Failed to update assignment")?;

        if rows_affected == 0 {
            return Err(anyhow!("Assignment with id {} not found", id));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM assignments WHERE id = ?", [id])
            .context("Failed to delete assignment")?;

        if rows_affected == 0 {
            return Err(anyhow!("Assignment with id {} not found", id));
        }

        Ok(())
    }
}
