//! Mutations requested by the planning grid: move, extend, bulk delete and
//! week duplication.

use super::AssignmentService;
use crate::models::assignment::Assignment;
use crate::services::database::Database;
use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

impl<'a> AssignmentService<'a> {
    /// Moves one assignment to another day and, optionally, another worker.
    pub fn move_to(
        &self,
        id: i64,
        new_date: NaiveDate,
        new_worker_id: Option<i64>,
    ) -> Result<Assignment> {
        let mut assignment = self
            .get(id)?
            .ok_or_else(|| anyhow!("Assignment with id {} not found", id))?;

        assignment.date = new_date;
        if let Some(worker_id) = new_worker_id {
            assignment.worker_id = worker_id;
        }
        self.update(&assignment)?;

        log::info!(
            "Moved assignment {} to worker {} on {}",
            id,
            assignment.worker_id,
            new_date
        );
        Ok(assignment)
    }

    /// Fills every day of `start..=end` that has no record yet for the
    /// anchor's `(worker, chantier)` pair, copying the anchor's times and note.
    ///
    /// Returns the newly created records.
    pub fn extend_block(
        &self,
        anchor_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Assignment>> {
        if end < start {
            return Err(anyhow!("Invalid range: {} is after {}", start, end));
        }

        let anchor = self
            .get(anchor_id)?
            .ok_or_else(|| anyhow!("Assignment with id {} not found", anchor_id))?;

        let existing: HashSet<NaiveDate> = self
            .list_for_block(anchor.worker_id, anchor.chantier_id)?
            .into_iter()
            .map(|a| a.date)
            .collect();

        Database::with_transaction(self.conn, |_| {
            let mut created = Vec::new();
            for date in start.iter_days().take_while(|d| *d <= end) {
                if existing.contains(&date) {
                    continue;
                }
                let copy = Assignment {
                    id: None,
                    date,
                    created_at: None,
                    updated_at: None,
                    ..anchor.clone()
                };
                created.push(self.create(copy)?);
            }
            Ok(created)
        })
    }

    /// Deletes all given assignments in one transaction.
    ///
    /// Ids that no longer exist are skipped; returns how many rows went away.
    pub fn delete_many(&self, ids: &[i64]) -> Result<usize> {
        Database::with_transaction(self.conn, |tx| {
            let mut removed = 0;
            for id in ids {
                let rows = tx.execute("DELETE FROM assignments WHERE id = ?", [id])?;
                if rows == 0 {
                    log::warn!("Assignment {} already deleted", id);
                }
                removed += rows;
            }
            Ok(removed)
        })
    }

    /// Copies a worker's week (Monday `week_start`) onto the following week.
    ///
    /// Days already planned on the same chantier in the target week are left alone.
    pub fn duplicate_week(&self, worker_id: i64, week_start: NaiveDate) -> Result<Vec<Assignment>> {
        let week_end = week_start + Duration::days(6);
        let source = self.list_for_worker_between(worker_id, week_start, week_end)?;

        let target_start = week_start + Duration::weeks(1);
        let target_end = week_end + Duration::weeks(1);
        let taken: HashSet<(i64, NaiveDate)> = self
            .list_for_worker_between(worker_id, target_start, target_end)?
            .into_iter()
            .map(|a| (a.chantier_id, a.date))
            .collect();

        Database::with_transaction(self.conn, |_| {
            let mut created = Vec::new();
            for assignment in source {
                let date = assignment.date + Duration::weeks(1);
                if taken.contains(&(assignment.chantier_id, date)) {
                    continue;
                }
                let copy = Assignment {
                    id: None,
                    date,
                    created_at: None,
                    updated_at: None,
                    ..assignment
                };
                created.push(self.create(copy)?);
            }
            Ok(created)
        })
    }
}
