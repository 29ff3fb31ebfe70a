//! Pure planning computations behind the assignment grid: day columns,
//! per-cell lookup and worker row grouping. Nothing here touches the UI or
//! the database.

pub mod day_axis;
pub mod grouping;
pub mod index;

pub use day_axis::{is_weekend, range_title, shift_reference, visible_days, week_start};
pub use grouping::{group_workers, CategoryPriority, CategoryRule, CategoryRules, WorkerGroup};
pub use index::AssignmentIndex;

use chrono::NaiveDate;

/// A (worker, day) coordinate of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub worker_id: i64,
    pub date: NaiveDate,
}

impl CellKey {
    pub fn new(worker_id: i64, date: NaiveDate) -> Self {
        Self { worker_id, date }
    }
}
