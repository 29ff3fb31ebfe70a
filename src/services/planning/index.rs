//! Per-cell lookup of assignments.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::models::assignment::Assignment;

/// Groups a shared assignment list by worker, then by day.
///
/// Positions point into the list the index was built from; records within a
/// cell keep their input order.
#[derive(Debug, Clone)]
pub struct AssignmentIndex {
    source: Arc<[Assignment]>,
    cells: HashMap<i64, HashMap<NaiveDate, Vec<usize>>>,
}

impl AssignmentIndex {
    pub fn build(source: Arc<[Assignment]>) -> Self {
        let mut cells: HashMap<i64, HashMap<NaiveDate, Vec<usize>>> = HashMap::new();
        for (position, assignment) in source.iter().enumerate() {
            cells
                .entry(assignment.worker_id)
                .or_default()
                .entry(assignment.date)
                .or_default()
                .push(position);
        }
        Self { source, cells }
    }

    /// True when this index was built from exactly this list (pointer identity).
    pub fn is_built_from(&self, source: &Arc<[Assignment]>) -> bool {
        Arc::ptr_eq(&self.source, source)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.source
    }

    /// Assignments of `worker_id` on `date`; empty when the cell is free.
    pub fn lookup(&self, worker_id: i64, date: NaiveDate) -> Vec<&Assignment> {
        self.cells
            .get(&worker_id)
            .and_then(|by_date| by_date.get(&date))
            .map(|positions| positions.iter().map(|&pos| &self.source[pos]).collect())
            .unwrap_or_default()
    }

    pub fn is_empty_cell(&self, worker_id: i64, date: NaiveDate) -> bool {
        self.cells
            .get(&worker_id)
            .and_then(|by_date| by_date.get(&date))
            .map_or(true, |positions| positions.is_empty())
    }

    /// All planned days of one `(worker, chantier)` pair.
    pub fn block_dates(&self, worker_id: i64, chantier_id: i64) -> BTreeSet<NaiveDate> {
        let Some(by_date) = self.cells.get(&worker_id) else {
            return BTreeSet::new();
        };
        by_date
            .iter()
            .filter(|(_, positions)| {
                positions
                    .iter()
                    .any(|&pos| self.source[pos].chantier_id == chantier_id)
            })
            .map(|(date, _)| *date)
            .collect()
    }
}
