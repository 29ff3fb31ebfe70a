// Assignment Resize System
//
// Grows or shrinks a block (contiguous daily assignments of one worker on
// one chantier) by dragging its left or right edge.
// - Dragging outward proposes new days (extension)
// - Dragging inward proposes days to delete (reduction)

use chrono::{Duration, NaiveDate};
use egui::{Pos2, Rect, Vec2};
use std::collections::{BTreeSet, HashMap};
use std::ops::Bound::{Excluded, Included};

use crate::models::assignment::{contiguous_run, Assignment};

/// Gestures shorter than this are treated as clicks.
pub const CLICK_TIME_THRESHOLD_SECS: f64 = 0.1;
/// Gestures moving less than this are treated as clicks.
pub const CLICK_DISTANCE_THRESHOLD_PX: f32 = 10.0;

/// Size of the resize handle hit area
pub const HANDLE_SIZE: f32 = 8.0;
/// Visual size of the handle circle
pub const HANDLE_VISUAL_SIZE: f32 = 6.0;

/// Which edge of the block is being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    /// Start of the block
    Left,
    /// End of the block
    Right,
}

impl ResizeEdge {
    /// Dragging away from the block adds days.
    pub fn extends(&self, days_delta: i64) -> bool {
        match self {
            ResizeEdge::Left => days_delta < 0,
            ResizeEdge::Right => days_delta > 0,
        }
    }

    /// Dragging into the block removes days.
    pub fn shrinks(&self, days_delta: i64) -> bool {
        match self {
            ResizeEdge::Left => days_delta > 0,
            ResizeEdge::Right => days_delta < 0,
        }
    }

    pub fn cursor_icon(&self) -> egui::CursorIcon {
        match self {
            ResizeEdge::Left => egui::CursorIcon::ResizeWest,
            ResizeEdge::Right => egui::CursorIcon::ResizeEast,
        }
    }
}

/// Which resize results the caller is able to apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeCapabilities {
    pub extend: bool,
    pub delete_range: bool,
}

impl ResizeCapabilities {
    pub const ALL: ResizeCapabilities = ResizeCapabilities {
        extend: true,
        delete_range: true,
    };

    pub fn any(&self) -> bool {
        self.extend || self.delete_range
    }
}

/// Days that the current gesture would add or remove. Both lists are sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResizePreview {
    pub additions: Vec<NaiveDate>,
    pub removals: Vec<NaiveDate>,
}

impl ResizePreview {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    pub fn adds(&self, date: NaiveDate) -> bool {
        self.additions.binary_search(&date).is_ok()
    }

    pub fn removes(&self, date: NaiveDate) -> bool {
        self.removals.binary_search(&date).is_ok()
    }
}

/// Whole days covered by a horizontal pointer movement.
pub fn days_delta(origin_x: f32, pointer_x: f32, cell_width: f32) -> i64 {
    ((pointer_x - origin_x) / cell_width).round() as i64
}

/// Additions and removals for dragging `edge` (located on `edge_date`) by
/// `days_delta` cells, given the block's existing days.
pub fn compute_preview(
    edge: ResizeEdge,
    edge_date: NaiveDate,
    days_delta: i64,
    existing: &BTreeSet<NaiveDate>,
) -> ResizePreview {
    let mut preview = ResizePreview::default();
    let missing = |offset: i64| {
        let date = edge_date + Duration::days(offset);
        (!existing.contains(&date)).then_some(date)
    };

    match edge {
        ResizeEdge::Right if days_delta > 0 => {
            preview.additions = (1..=days_delta).filter_map(missing).collect();
        }
        ResizeEdge::Right if days_delta < 0 => {
            let lower = edge_date + Duration::days(days_delta);
            preview.removals = existing
                .range((Excluded(lower), Included(edge_date)))
                .copied()
                .collect();
        }
        ResizeEdge::Left if days_delta < 0 => {
            preview.additions = (days_delta..=-1).filter_map(missing).collect();
        }
        ResizeEdge::Left if days_delta > 0 => {
            let upper = edge_date + Duration::days(days_delta);
            preview.removals = existing.range(edge_date..upper).copied().collect();
        }
        _ => {}
    }

    preview
}

/// Request to stretch the anchor's block to `new_start..=new_end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizeRequest {
    pub assignment_id: i64,
    pub new_start: NaiveDate,
    pub new_end: NaiveDate,
}

/// A reduction that would wipe out every day of a `(worker, chantier)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockDeleteConfirm {
    pub chantier_name: String,
    pub assignments: Vec<Assignment>,
}

impl BlockDeleteConfirm {
    pub fn message(&self) -> String {
        format!(
            "Supprimer toutes les affectations ({}) sur le chantier \"{}\" ?\n\nCette action est irréversible.",
            self.assignments.len(),
            self.chantier_name
        )
    }

    pub fn ids(&self) -> Vec<i64> {
        self.assignments.iter().filter_map(|a| a.id).collect()
    }
}

/// What releasing the pointer produced.
#[derive(Clone, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// Click, zero-length drag, or an action the caller cannot apply
    Ignored,
    Extend(ResizeRequest),
    Delete(Vec<Assignment>),
    /// Full-block deletion; must be confirmed by the user before deleting
    ConfirmDelete(BlockDeleteConfirm),
}

/// State captured when a resize gesture starts.
///
/// The block snapshot is taken once so pointer moves never rescan the full
/// assignment list.
#[derive(Clone, Debug)]
pub struct ResizeSession {
    pub anchor: Assignment,
    pub anchor_id: i64,
    pub edge: ResizeEdge,
    pub origin_x: f32,
    pub cell_width: f32,
    /// Input clock (seconds) at gesture start
    pub started_at: f64,
    /// Day the dragged edge sits on
    pub edge_date: NaiveDate,
    pub run_start: NaiveDate,
    pub run_end: NaiveDate,
    /// Every record of the anchor's `(worker, chantier)` pair
    pub block: Vec<Assignment>,
    pub block_dates: BTreeSet<NaiveDate>,
    pub by_date: HashMap<NaiveDate, Vec<usize>>,
    pub last_days_delta: i64,
}

impl ResizeSession {
    fn new(
        anchor: &Assignment,
        anchor_id: i64,
        edge: ResizeEdge,
        origin_x: f32,
        cell_width: f32,
        started_at: f64,
        assignments: &[Assignment],
    ) -> Self {
        let mut block: Vec<Assignment> = assignments
            .iter()
            .filter(|a| a.same_block(anchor))
            .cloned()
            .collect();
        if !block.iter().any(|a| a.id == anchor.id) {
            block.push(anchor.clone());
        }

        let mut by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
        for (pos, assignment) in block.iter().enumerate() {
            by_date.entry(assignment.date).or_default().push(pos);
        }
        let block_dates: BTreeSet<NaiveDate> = by_date.keys().copied().collect();

        let (run_start, run_end) = contiguous_run(anchor.date, &block_dates);
        let edge_date = match edge {
            ResizeEdge::Left => run_start,
            ResizeEdge::Right => run_end,
        };

        Self {
            anchor: anchor.clone(),
            anchor_id,
            edge,
            origin_x,
            cell_width,
            started_at,
            edge_date,
            run_start,
            run_end,
            block,
            block_dates,
            by_date,
            last_days_delta: 0,
        }
    }

    pub fn days_delta(&self, pointer_x: f32) -> i64 {
        days_delta(self.origin_x, pointer_x, self.cell_width)
    }

    pub fn preview_for(&self, days_delta: i64) -> ResizePreview {
        compute_preview(self.edge, self.edge_date, days_delta, &self.block_dates)
    }

    /// The run's new bounds after extending by `days_delta`.
    pub fn extended_range(&self, days_delta: i64) -> (NaiveDate, NaiveDate) {
        let moved = self.edge_date + Duration::days(days_delta);
        match self.edge {
            ResizeEdge::Left => (moved, self.run_end),
            ResizeEdge::Right => (self.run_start, moved),
        }
    }

    fn records_on(&self, dates: &[NaiveDate]) -> Vec<Assignment> {
        dates
            .iter()
            .filter_map(|date| self.by_date.get(date))
            .flatten()
            .map(|&pos| self.block[pos].clone())
            .collect()
    }

    fn is_click(&self, pointer_x: f32, now: f64) -> bool {
        now - self.started_at < CLICK_TIME_THRESHOLD_SECS
            || (pointer_x - self.origin_x).abs() < CLICK_DISTANCE_THRESHOLD_PX
    }
}

/// `idle -> resizing -> idle` state machine for block edges.
#[derive(Clone, Debug)]
pub struct ResizeController {
    capabilities: ResizeCapabilities,
    session: Option<ResizeSession>,
    preview: ResizePreview,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(ResizeCapabilities::ALL)
    }
}

impl ResizeController {
    pub fn new(capabilities: ResizeCapabilities) -> Self {
        Self {
            capabilities,
            session: None,
            preview: ResizePreview::default(),
        }
    }

    pub fn capabilities(&self) -> ResizeCapabilities {
        self.capabilities
    }

    pub fn set_capabilities(&mut self, capabilities: ResizeCapabilities) {
        self.capabilities = capabilities;
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    pub fn preview(&self) -> &ResizePreview {
        &self.preview
    }

    pub fn is_resizing(&self, assignment_id: Option<i64>) -> bool {
        assignment_id.is_some() && self.session.as_ref().map(|s| s.anchor_id) == assignment_id
    }

    /// Start resizing `anchor` from `edge`.
    ///
    /// `cell_width` is the measured width of one day column; `None` means the
    /// grid has not laid out any day cell yet and the gesture is abandoned.
    pub fn begin(
        &mut self,
        anchor: &Assignment,
        edge: ResizeEdge,
        pointer_x: f32,
        cell_width: Option<f32>,
        now: f64,
        assignments: &[Assignment],
    ) -> bool {
        if !self.capabilities.any() {
            return false;
        }
        let Some(anchor_id) = anchor.id else {
            return false;
        };
        let Some(cell_width) = cell_width.filter(|w| *w > 0.0) else {
            log::debug!("No day cell measured, resize of {} abandoned", anchor_id);
            return false;
        };

        let session = ResizeSession::new(
            anchor,
            anchor_id,
            edge,
            pointer_x,
            cell_width,
            now,
            assignments,
        );
        log::debug!(
            "Resize start: assignment {} {:?} edge on {} (block of {} days)",
            anchor_id,
            edge,
            session.edge_date,
            session.block_dates.len()
        );
        self.session = Some(session);
        self.preview = ResizePreview::default();
        true
    }

    /// Track the pointer. Returns true when the preview changed.
    pub fn update(&mut self, pointer_x: f32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let delta = session.days_delta(pointer_x);
        if delta == session.last_days_delta {
            return false;
        }
        session.last_days_delta = delta;
        self.preview = session.preview_for(delta);
        true
    }

    /// Release the pointer. The session and preview are always cleared.
    pub fn end(&mut self, pointer_x: f32, now: f64) -> ResizeOutcome {
        self.preview = ResizePreview::default();
        let Some(session) = self.session.take() else {
            return ResizeOutcome::Ignored;
        };

        if session.is_click(pointer_x, now) {
            log::debug!("Resize of {} treated as a click", session.anchor_id);
            return ResizeOutcome::Ignored;
        }

        let delta = session.days_delta(pointer_x);
        if session.edge.extends(delta) {
            if !self.capabilities.extend {
                return ResizeOutcome::Ignored;
            }
            let (new_start, new_end) = session.extended_range(delta);
            return ResizeOutcome::Extend(ResizeRequest {
                assignment_id: session.anchor_id,
                new_start,
                new_end,
            });
        }

        if session.edge.shrinks(delta) {
            if !self.capabilities.delete_range {
                return ResizeOutcome::Ignored;
            }
            let removals = session.preview_for(delta).removals;
            let doomed = session.records_on(&removals);
            if doomed.is_empty() {
                return ResizeOutcome::Ignored;
            }
            if doomed.len() == session.block.len() {
                return ResizeOutcome::ConfirmDelete(BlockDeleteConfirm {
                    chantier_name: session.anchor.chantier_name.clone(),
                    assignments: doomed,
                });
            }
            return ResizeOutcome::Delete(doomed);
        }

        ResizeOutcome::Ignored
    }

    /// Abandon the gesture without any side effect.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("Resize of {} cancelled", session.anchor_id);
        }
        self.preview = ResizePreview::default();
    }
}

/// Hit areas of a block's edges.
pub struct HandleRects {
    pub left: Option<Rect>,
    pub right: Option<Rect>,
}

impl HandleRects {
    /// Handles sit on the outer edges of the block's first and last day only.
    pub fn for_block(block_rect: Rect, show_left: bool, show_right: bool) -> Self {
        let handle_height = block_rect.height().min(20.0);
        let handle = |x: f32| {
            Rect::from_center_size(
                Pos2::new(x, block_rect.center().y),
                Vec2::new(HANDLE_SIZE, handle_height),
            )
        };

        Self {
            left: show_left.then(|| handle(block_rect.left() + HANDLE_SIZE / 2.0)),
            right: show_right.then(|| handle(block_rect.right() - HANDLE_SIZE / 2.0)),
        }
    }

    pub fn hit_test(&self, pos: Pos2) -> Option<ResizeEdge> {
        if self.left.map_or(false, |r| r.contains(pos)) {
            Some(ResizeEdge::Left)
        } else if self.right.map_or(false, |r| r.contains(pos)) {
            Some(ResizeEdge::Right)
        } else {
            None
        }
    }

    pub fn get(&self, edge: ResizeEdge) -> Option<Rect> {
        match edge {
            ResizeEdge::Left => self.left,
            ResizeEdge::Right => self.right,
        }
    }
}
