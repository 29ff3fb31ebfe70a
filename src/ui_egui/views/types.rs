//! Shared types for the planning grid.
//!
//! The grid never mutates assignments itself: everything the user asks for
//! during a frame is collected in a [`GridInteractionResult`] and handed to
//! a [`PlanningHandler`] once rendering is done.

use chrono::NaiveDate;

use crate::models::assignment::Assignment;
use crate::models::worker::WorkerCategory;
use crate::ui_egui::drag::MoveRequest;
use crate::ui_egui::resize::{BlockDeleteConfirm, ResizeRequest};

/// Receiver of the requests emitted by the planning grid.
///
/// All calls are fire-and-forget; the grid has already cleared its own
/// gesture state when they run.
#[cfg_attr(test, mockall::automock)]
pub trait PlanningHandler {
    /// An existing assignment was clicked or double-clicked.
    fn on_affectation_click(&mut self, assignment: &Assignment);
    /// Explicit delete of a single assignment (context menu).
    fn on_affectation_delete(&mut self, assignment: &Assignment);
    /// An empty cell was clicked; the user wants to create an assignment.
    fn on_cell_click(&mut self, worker_id: i64, date: NaiveDate);
    /// Duplicate the worker's displayed week.
    fn on_duplicate(&mut self, worker_id: i64);
    fn on_affectation_move(&mut self, request: &MoveRequest);
    fn on_affectation_resize(&mut self, request: &ResizeRequest);
    fn on_affectations_delete(&mut self, assignments: &[Assignment]);
    /// A reduction would remove every day of a block; ask the user first and
    /// only call [`PlanningHandler::on_affectations_delete`] once confirmed.
    fn request_block_delete_confirmation(&mut self, confirm: BlockDeleteConfirm);
    /// A category header was clicked.
    fn on_toggle_category(&mut self, category: WorkerCategory);
}

/// Requests gathered while rendering one frame of the grid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GridInteractionResult {
    pub clicked: Option<Assignment>,
    pub delete_one: Option<Assignment>,
    pub create_at: Option<(i64, NaiveDate)>,
    pub duplicate_worker: Option<i64>,
    pub moved: Option<MoveRequest>,
    pub resized: Option<ResizeRequest>,
    pub bulk_delete: Vec<Assignment>,
    pub confirm_block_delete: Option<BlockDeleteConfirm>,
    pub toggled_categories: Vec<WorkerCategory>,
}

impl GridInteractionResult {
    /// Merge another result into this one; later single-valued requests win.
    pub fn merge(&mut self, other: GridInteractionResult) {
        if other.clicked.is_some() {
            self.clicked = other.clicked;
        }
        if other.delete_one.is_some() {
            self.delete_one = other.delete_one;
        }
        if other.create_at.is_some() {
            self.create_at = other.create_at;
        }
        if other.duplicate_worker.is_some() {
            self.duplicate_worker = other.duplicate_worker;
        }
        if other.moved.is_some() {
            self.moved = other.moved;
        }
        if other.resized.is_some() {
            self.resized = other.resized;
        }
        self.bulk_delete.extend(other.bulk_delete);
        if other.confirm_block_delete.is_some() {
            self.confirm_block_delete = other.confirm_block_delete;
        }
        self.toggled_categories.extend(other.toggled_categories);
    }

    pub fn has_actions(&self) -> bool {
        self.clicked.is_some()
            || self.delete_one.is_some()
            || self.create_at.is_some()
            || self.duplicate_worker.is_some()
            || self.moved.is_some()
            || self.resized.is_some()
            || !self.bulk_delete.is_empty()
            || self.confirm_block_delete.is_some()
            || !self.toggled_categories.is_empty()
    }

    /// Invoke the handler once per collected request.
    pub fn dispatch(self, handler: &mut impl PlanningHandler) {
        for category in self.toggled_categories {
            handler.on_toggle_category(category);
        }
        if let Some(request) = self.moved {
            log::info!(
                "Move request: assignment {} to worker {:?} on {}",
                request.assignment_id,
                request.new_worker_id,
                request.new_date
            );
            handler.on_affectation_move(&request);
        }
        if let Some(request) = self.resized {
            log::info!(
                "Resize request: assignment {} to {}..={}",
                request.assignment_id,
                request.new_start,
                request.new_end
            );
            handler.on_affectation_resize(&request);
        }
        if !self.bulk_delete.is_empty() {
            log::info!("Bulk delete request for {} assignments", self.bulk_delete.len());
            handler.on_affectations_delete(&self.bulk_delete);
        }
        if let Some(confirm) = self.confirm_block_delete {
            handler.request_block_delete_confirmation(confirm);
        }
        if let Some(assignment) = self.delete_one {
            handler.on_affectation_delete(&assignment);
        }
        if let Some(assignment) = self.clicked {
            handler.on_affectation_click(&assignment);
        }
        if let Some((worker_id, date)) = self.create_at {
            handler.on_cell_click(worker_id, date);
        }
        if let Some(worker_id) = self.duplicate_worker {
            handler.on_duplicate(worker_id);
        }
    }
}
