// Assignment Drag System
//
// Moves one assignment to another (worker, day) cell by drag-and-drop.
// The controller only tracks the gesture; persisting the move is the
// caller's job.

use chrono::NaiveDate;

use crate::models::assignment::Assignment;
use crate::services::planning::CellKey;

/// Result of a drop on a different cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub assignment_id: i64,
    pub new_date: NaiveDate,
    pub new_worker_id: Option<i64>,
}

/// `idle -> dragging -> idle` state machine for moving assignments.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    dragged: Option<Assignment>,
    drop_target: Option<CellKey>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `assignment`. Unsaved assignments cannot be dragged.
    pub fn drag_start(&mut self, assignment: &Assignment) -> bool {
        if assignment.id.is_none() {
            return false;
        }
        log::debug!("Drag start for assignment {:?}", assignment.id);
        self.dragged = Some(assignment.clone());
        self.drop_target = None;
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged(&self) -> Option<&Assignment> {
        self.dragged.as_ref()
    }

    pub fn is_dragging_assignment(&self, assignment_id: Option<i64>) -> bool {
        assignment_id.is_some() && self.dragged.as_ref().and_then(|a| a.id) == assignment_id
    }

    /// Remember the hovered cell for highlighting. Ignored while idle.
    pub fn drag_over(&mut self, cell: CellKey) {
        if self.dragged.is_some() {
            self.drop_target = Some(cell);
        }
    }

    /// The pointer left every cell; forget the highlighted target.
    pub fn leave(&mut self) {
        self.drop_target = None;
    }

    pub fn drop_target(&self) -> Option<CellKey> {
        self.drop_target
    }

    /// Finish the drag on `(worker_id, date)`.
    ///
    /// Returns a move request only when the target differs from the current
    /// placement. Drag state is cleared in every case.
    pub fn drop(&mut self, worker_id: i64, date: NaiveDate) -> Option<MoveRequest> {
        let dragged = self.dragged.take();
        self.drop_target = None;

        let assignment = dragged?;
        let assignment_id = assignment.id?;
        if assignment.worker_id == worker_id && assignment.date == date {
            log::debug!("Assignment {} dropped on its own cell", assignment_id);
            return None;
        }

        Some(MoveRequest {
            assignment_id,
            new_date: date,
            new_worker_id: Some(worker_id),
        })
    }

    /// Clear all drag state, e.g. when the pointer was released outside the grid.
    pub fn drag_end(&mut self) {
        self.dragged = None;
        self.drop_target = None;
    }
}
