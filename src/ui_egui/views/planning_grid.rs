//! The planning grid: one row per worker, one column per visible day.
//!
//! Rows are bucketed into collapsible category groups. Each cell shows the
//! worker's assignments for that day as coloured blocks that can be moved
//! by drag-and-drop or stretched/shrunk from the edges of their run.

use chrono::{Duration, NaiveDate};
use egui::{Align2, Color32, CursorIcon, FontId, Id, Pos2, Rect, Sense, Stroke, Vec2};
use std::collections::HashSet;
use std::sync::Arc;

use super::palette::GridPalette;
use super::types::GridInteractionResult;
use super::utils::{
    assignment_color, contrast_text, format_assignment_tooltip, format_day_header, parse_color,
};
use crate::models::assignment::Assignment;
use crate::models::settings::ViewMode;
use crate::models::worker::{Worker, WorkerCategory};
use crate::services::planning::{
    group_workers, is_weekend, visible_days, AssignmentIndex, CategoryPriority, CategoryRules,
    CellKey, WorkerGroup,
};
use crate::ui_egui::drag::DragController;
use crate::ui_egui::resize::{HandleRects, ResizeCapabilities, ResizeController, ResizeOutcome};
use crate::ui_egui::resize_drawing::{draw_handles, draw_preview_cell, PreviewMark};

pub const WORKER_COLUMN_WIDTH: f32 = 190.0;
pub const ROW_HEIGHT: f32 = 46.0;
pub const HEADER_HEIGHT: f32 = 30.0;
pub const GROUP_HEADER_HEIGHT: f32 = 26.0;
pub const MIN_DAY_WIDTH: f32 = 38.0;
const BLOCK_GAP: f32 = 2.0;

/// Everything the grid renders from. Owned by the caller; never mutated here.
pub struct PlanningInput<'a> {
    pub assignments: &'a Arc<[Assignment]>,
    pub workers: &'a [Worker],
    pub reference: NaiveDate,
    pub view_mode: ViewMode,
    pub show_weekend: bool,
    pub expanded: &'a HashSet<WorkerCategory>,
    pub today: NaiveDate,
}

/// Grid renderer with its own gesture state.
///
/// Each instance owns its controllers and index cache, so two grids never
/// share a drag or resize session.
#[derive(Debug, Default)]
pub struct PlanningGrid {
    drag: DragController,
    resize: ResizeController,
    rules: CategoryRules,
    priority: CategoryPriority,
    index: Option<AssignmentIndex>,
    /// Width of a laid-out day column, `None` until a day cell exists
    cell_width: Option<f32>,
}

impl PlanningGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capabilities(mut self, capabilities: ResizeCapabilities) -> Self {
        self.resize.set_capabilities(capabilities);
        self
    }

    pub fn with_grouping(mut self, rules: CategoryRules, priority: CategoryPriority) -> Self {
        self.rules = rules;
        self.priority = priority;
        self
    }

    pub fn cell_width(&self) -> Option<f32> {
        self.cell_width
    }

    /// A drag or resize gesture is in progress.
    pub fn is_busy(&self) -> bool {
        self.drag.is_dragging() || self.resize.is_active()
    }

    /// Abandon any gesture in progress without emitting anything.
    pub fn cancel_gestures(&mut self) {
        self.drag.drag_end();
        self.resize.cancel();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, input: &PlanningInput<'_>) -> GridInteractionResult {
        let mut result = GridInteractionResult::default();
        self.track_pointer(ui, &mut result);

        let index = match self.index.take() {
            Some(index) if index.is_built_from(input.assignments) => index,
            _ => AssignmentIndex::build(Arc::clone(input.assignments)),
        };
        let days = visible_days(input.reference, input.view_mode, input.show_weekend);
        let groups = group_workers(input.workers, &self.rules, &self.priority, input.expanded);
        let palette = GridPalette::from_visuals(ui.visuals());
        self.cell_width = None;

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing = Vec2::ZERO;
                let day_width = ((ui.available_width() - WORKER_COLUMN_WIDTH)
                    / days.len().max(1) as f32)
                    .max(MIN_DAY_WIDTH);
                let layout = RowLayout {
                    days: &days,
                    day_width,
                    today: input.today,
                    palette,
                };

                self.render_header(ui, &layout);

                if self.drag.is_dragging() {
                    self.drag.leave();
                }
                for group in &groups {
                    render_group_header(ui, group, &layout, &mut result);
                    if !group.expanded {
                        continue;
                    }
                    for worker in &group.workers {
                        self.render_worker_row(ui, worker, &layout, &index, input, &mut result);
                    }
                }

                if groups.is_empty() {
                    ui.add_space(12.0);
                    ui.weak("Aucun ouvrier à planifier");
                }
            });

        self.index = Some(index);
        result
    }

    /// Pointer handling that runs only while a gesture is active.
    ///
    /// Release, loss of the button and Escape all end the gesture, so no
    /// session outlives the pointer press that started it.
    fn track_pointer(&mut self, ui: &egui::Ui, result: &mut GridInteractionResult) {
        if !self.is_busy() {
            return;
        }

        let (escape, released, down, pos, now) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.pointer.any_released(),
                i.pointer.any_down(),
                i.pointer.latest_pos(),
                i.time,
            )
        });

        if escape {
            log::debug!("Gesture cancelled with Escape");
            self.cancel_gestures();
            return;
        }

        if let Some(session) = self.resize.session() {
            let edge = session.edge;
            let x = pos.map_or(session.origin_x, |p| p.x);
            self.resize.update(x);
            if released || !down {
                match self.resize.end(x, now) {
                    ResizeOutcome::Extend(request) => result.resized = Some(request),
                    ResizeOutcome::Delete(assignments) => result.bulk_delete = assignments,
                    ResizeOutcome::ConfirmDelete(confirm) => {
                        result.confirm_block_delete = Some(confirm)
                    }
                    ResizeOutcome::Ignored => {}
                }
            } else {
                ui.ctx().set_cursor_icon(edge.cursor_icon());
            }
        }

        if self.drag.is_dragging() {
            if released || !down {
                match self.drag.drop_target() {
                    Some(target) => result.moved = self.drag.drop(target.worker_id, target.date),
                    None => self.drag.drag_end(),
                }
            } else {
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            }
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui, layout: &RowLayout<'_>) {
        let (row_rect, _) =
            ui.allocate_exact_size(Vec2::new(layout.total_width(), HEADER_HEIGHT), Sense::hover());
        let palette = &layout.palette;
        let painter = ui.painter();

        painter.rect_filled(row_rect, 0.0, palette.header_bg);
        painter.text(
            row_rect.left_center() + Vec2::new(8.0, 0.0),
            Align2::LEFT_CENTER,
            "Équipe",
            FontId::proportional(13.0),
            palette.header_text,
        );

        for (column, &date) in layout.days.iter().enumerate() {
            let rect = layout.day_rect(row_rect, column);
            if column == 0 {
                self.cell_width = Some(rect.width());
            }
            let is_today = date == layout.today;
            if is_today {
                painter.rect_filled(rect, 0.0, palette.today_bg);
            }
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, palette.border));
            let label = if layout.day_width < 70.0 {
                date.format("%d").to_string()
            } else {
                format_day_header(date)
            };
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(12.0),
                if is_today {
                    palette.today_border
                } else {
                    palette.header_text
                },
            );
        }
    }

    fn render_worker_row(
        &mut self,
        ui: &mut egui::Ui,
        worker: &Worker,
        layout: &RowLayout<'_>,
        index: &AssignmentIndex,
        input: &PlanningInput<'_>,
        result: &mut GridInteractionResult,
    ) {
        let Some(worker_id) = worker.id else {
            return;
        };
        let (row_rect, _) =
            ui.allocate_exact_size(Vec2::new(layout.total_width(), ROW_HEIGHT), Sense::hover());

        let header_rect =
            Rect::from_min_size(row_rect.min, Vec2::new(WORKER_COLUMN_WIDTH, ROW_HEIGHT));
        render_worker_header(ui, worker, worker_id, header_rect, &layout.palette, result);

        let pointer = ui.input(|i| i.pointer.hover_pos());
        for (column, &date) in layout.days.iter().enumerate() {
            let cell_rect = layout.day_rect(row_rect, column);
            let cell = CellKey::new(worker_id, date);
            if self.drag.is_dragging() && pointer.is_some_and(|p| cell_rect.contains(p)) {
                self.drag.drag_over(cell);
            }
            self.render_cell(ui, cell, cell_rect, layout, index, input, result);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_cell(
        &mut self,
        ui: &mut egui::Ui,
        cell: CellKey,
        cell_rect: Rect,
        layout: &RowLayout<'_>,
        index: &AssignmentIndex,
        input: &PlanningInput<'_>,
        result: &mut GridInteractionResult,
    ) {
        let palette = &layout.palette;
        let background = if cell.date == layout.today {
            palette.today_bg
        } else if is_weekend(cell.date) {
            palette.weekend_bg
        } else {
            palette.cell_bg
        };
        ui.painter().rect_filled(cell_rect, 0.0, background);
        ui.painter()
            .rect_stroke(cell_rect, 0.0, Stroke::new(1.0, palette.border));
        if self.drag.drop_target() == Some(cell) {
            ui.painter()
                .rect_filled(cell_rect.shrink(1.0), 2.0, palette.drop_target);
        }

        let assignments = index.lookup(cell.worker_id, cell.date);
        if assignments.is_empty() {
            let response = ui.interact(
                cell_rect,
                Id::new(("planning_cell", cell.worker_id, cell.date)),
                Sense::click(),
            );
            if !self.is_busy() {
                if response.hovered() {
                    ui.painter()
                        .rect_filled(cell_rect.shrink(1.0), 2.0, palette.hover_overlay);
                    ui.painter().text(
                        cell_rect.center(),
                        Align2::CENTER_CENTER,
                        "+",
                        FontId::proportional(16.0),
                        palette.header_text,
                    );
                    ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                }
                if response.clicked() {
                    result.create_at = Some((cell.worker_id, cell.date));
                }
            }
        } else {
            let slots = assignments.len() as f32;
            let slot_height = (cell_rect.height() - BLOCK_GAP * (slots + 1.0)) / slots;
            for (slot, assignment) in assignments.iter().enumerate() {
                let top = cell_rect.top() + BLOCK_GAP + slot as f32 * (slot_height + BLOCK_GAP);
                let block_rect = Rect::from_min_size(
                    Pos2::new(cell_rect.left() + BLOCK_GAP, top),
                    Vec2::new(cell_rect.width() - 2.0 * BLOCK_GAP, slot_height),
                );
                self.render_block(ui, assignment, slot, block_rect, layout, index, input, result);
            }
        }

        self.draw_preview(ui, cell, cell_rect);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_block(
        &mut self,
        ui: &mut egui::Ui,
        assignment: &Assignment,
        slot: usize,
        block_rect: Rect,
        layout: &RowLayout<'_>,
        index: &AssignmentIndex,
        input: &PlanningInput<'_>,
        result: &mut GridInteractionResult,
    ) {
        let color = assignment_color(assignment);
        let is_resizing = self.resize.is_resizing(assignment.id);
        let is_dragged = self.drag.is_dragging_assignment(assignment.id);
        let fill = if is_dragged {
            color.linear_multiply(0.4)
        } else {
            color
        };

        let painter = ui.painter();
        painter.rect_filled(block_rect, 4.0, fill);
        if is_resizing {
            painter.rect_stroke(
                block_rect,
                4.0,
                Stroke::new(2.0, layout.palette.resizing_outline),
            );
        }

        let label = match assignment.time_label() {
            Some(times) if block_rect.height() >= 30.0 && layout.day_width >= 70.0 => {
                format!("{}\n{}", assignment.chantier_name, times)
            }
            _ => assignment.chantier_name.clone(),
        };
        painter.with_clip_rect(block_rect.shrink(2.0)).text(
            block_rect.left_center() + Vec2::new(6.0, 0.0),
            Align2::LEFT_CENTER,
            label,
            FontId::proportional(11.0),
            contrast_text(color),
        );

        let id = Id::new(("planning_block", assignment.id, assignment.date, slot));
        let mut response = ui.interact(block_rect, id, Sense::click_and_drag());
        if !self.is_busy() {
            response = response.on_hover_text(format_assignment_tooltip(assignment));
        }

        response.context_menu(|ui| {
            ui.set_min_width(150.0);
            ui.label(&assignment.chantier_name);
            ui.separator();
            if ui.button("✏ Modifier").clicked() {
                result.clicked = Some(assignment.clone());
                ui.close_menu();
            }
            if ui.button("🗑 Supprimer").clicked() {
                result.delete_one = Some(assignment.clone());
                ui.close_menu();
            }
        });

        if (response.clicked() || response.double_clicked()) && !self.is_busy() {
            result.clicked = Some(assignment.clone());
        }

        let can_resize = assignment.id.is_some()
            && self.resize.capabilities().any()
            && !self.drag.is_dragging();
        let (run_starts_here, run_ends_here) = run_edges(index, assignment);
        let handles = HandleRects::for_block(
            block_rect,
            can_resize && run_starts_here,
            can_resize && run_ends_here,
        );

        let pointer = ui.input(|i| i.pointer.hover_pos());
        let hovered_edge = pointer.and_then(|p| handles.hit_test(p));
        if !self.resize.is_active() && (response.hovered() || hovered_edge.is_some()) {
            draw_handles(ui, &handles, hovered_edge, color);
        }
        match hovered_edge {
            Some(edge) => ui.ctx().set_cursor_icon(edge.cursor_icon()),
            None if response.hovered() && !self.is_busy() => {
                ui.ctx().set_cursor_icon(CursorIcon::Grab)
            }
            None => {}
        }

        if response.drag_started() && !self.is_busy() {
            let (origin, pressed_at, now) = ui.input(|i| {
                (
                    i.pointer.press_origin(),
                    i.pointer.press_start_time(),
                    i.time,
                )
            });
            let started_at = pressed_at.unwrap_or(now);
            let edge = origin.and_then(|p| handles.hit_test(p));

            match (edge, origin) {
                (Some(edge), Some(origin)) => {
                    if self.resize.begin(
                        assignment,
                        edge,
                        origin.x,
                        self.cell_width,
                        started_at,
                        input.assignments,
                    ) {
                        ui.ctx().set_cursor_icon(edge.cursor_icon());
                    }
                }
                _ => {
                    if self.drag.drag_start(assignment) {
                        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
                    }
                }
            }
        }
    }

    /// Overlay on the anchor worker's row only.
    fn draw_preview(&self, ui: &egui::Ui, cell: CellKey, cell_rect: Rect) {
        let Some(session) = self.resize.session() else {
            return;
        };
        if session.anchor.worker_id != cell.worker_id {
            return;
        }
        let preview = self.resize.preview();
        let mark = if preview.adds(cell.date) {
            PreviewMark::Addition
        } else if preview.removes(cell.date) {
            PreviewMark::Removal
        } else {
            return;
        };
        draw_preview_cell(ui, cell_rect, mark, assignment_color(&session.anchor));
    }
}

struct RowLayout<'a> {
    days: &'a [NaiveDate],
    day_width: f32,
    today: NaiveDate,
    palette: GridPalette,
}

impl RowLayout<'_> {
    fn total_width(&self) -> f32 {
        WORKER_COLUMN_WIDTH + self.day_width * self.days.len() as f32
    }

    fn day_rect(&self, row_rect: Rect, column: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(
                row_rect.left() + WORKER_COLUMN_WIDTH + column as f32 * self.day_width,
                row_rect.top(),
            ),
            Vec2::new(self.day_width, row_rect.height()),
        )
    }
}

/// Whether `assignment` starts and/or ends its run of consecutive days.
fn run_edges(index: &AssignmentIndex, assignment: &Assignment) -> (bool, bool) {
    let continues = |offset: i64| {
        index
            .lookup(assignment.worker_id, assignment.date + Duration::days(offset))
            .iter()
            .any(|other| other.same_block(assignment))
    };
    (!continues(-1), !continues(1))
}

fn render_group_header(
    ui: &mut egui::Ui,
    group: &WorkerGroup<'_>,
    layout: &RowLayout<'_>,
    result: &mut GridInteractionResult,
) {
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(layout.total_width(), GROUP_HEADER_HEIGHT),
        Sense::click(),
    );
    let palette = &layout.palette;
    ui.painter().rect_filled(rect, 0.0, palette.group_bg);
    let arrow = if group.expanded { "▼" } else { "▶" };
    ui.painter().text(
        rect.left_center() + Vec2::new(8.0, 0.0),
        Align2::LEFT_CENTER,
        format!("{} {} ({})", arrow, group.category.label(), group.workers.len()),
        FontId::proportional(13.0),
        palette.group_text,
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
    }
    if response.clicked() {
        result.toggled_categories.push(group.category);
    }
}

fn render_worker_header(
    ui: &mut egui::Ui,
    worker: &Worker,
    worker_id: i64,
    rect: Rect,
    palette: &GridPalette,
    result: &mut GridInteractionResult,
) {
    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, palette.header_bg);
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, palette.border));

    let mut text_left = rect.left() + 8.0;
    if let Some(color) = worker.color.as_deref().and_then(parse_color) {
        painter.circle_filled(Pos2::new(rect.left() + 10.0, rect.center().y), 4.0, color);
        text_left += 10.0;
    }
    painter.text(
        Pos2::new(text_left, rect.top() + 7.0),
        Align2::LEFT_TOP,
        worker.display_name(),
        FontId::proportional(13.0),
        palette.header_text,
    );
    painter.text(
        Pos2::new(text_left, rect.top() + 25.0),
        Align2::LEFT_TOP,
        &worker.role,
        FontId::proportional(11.0),
        palette.header_text.linear_multiply(0.7),
    );

    let button_rect = Rect::from_center_size(
        Pos2::new(rect.right() - 18.0, rect.center().y),
        Vec2::splat(22.0),
    );
    let response = ui
        .interact(button_rect, Id::new(("duplicate_week", worker_id)), Sense::click())
        .on_hover_text("Dupliquer la semaine sur la semaine suivante");
    let button_bg = if response.hovered() {
        palette.hover_overlay
    } else {
        Color32::TRANSPARENT
    };
    ui.painter().rect_filled(button_rect, 4.0, button_bg);
    ui.painter().text(
        button_rect.center(),
        Align2::CENTER_CENTER,
        "⧉",
        FontId::proportional(14.0),
        palette.header_text,
    );
    if response.clicked() {
        result.duplicate_worker = Some(worker_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::drag::MoveRequest;
    use crate::ui_egui::resize::{ResizeEdge, ResizeRequest};
    use pretty_assertions::assert_eq;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn workers() -> Vec<Worker> {
        vec![
            Worker::new("Karim", "Benali", "Chef d'équipe").with_id(1),
            Worker::new("Lucas", "Martin", "Maçon").with_id(2),
        ]
    }

    fn block() -> Arc<[Assignment]> {
        [10, 11, 12]
            .iter()
            .map(|&d| Assignment::new(1, 10, "Gare Nord", day(d)).with_id(d as i64))
            .collect::<Vec<_>>()
            .into()
    }

    fn raw_input(time: f64, events: Vec<egui::Event>) -> egui::RawInput {
        egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1200.0, 800.0))),
            time: Some(time),
            events,
            ..Default::default()
        }
    }

    fn run_frame(
        grid: &mut PlanningGrid,
        assignments: &Arc<[Assignment]>,
        raw: egui::RawInput,
    ) -> GridInteractionResult {
        let workers = workers();
        let expanded: HashSet<_> = WorkerCategory::ALL.into_iter().collect();
        let input = PlanningInput {
            assignments,
            workers: &workers,
            reference: day(12),
            view_mode: ViewMode::Week,
            show_weekend: false,
            expanded: &expanded,
            today: day(12),
        };

        let ctx = egui::Context::default();
        let mut result = GridInteractionResult::default();
        let _ = ctx.run(raw, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = grid.show(ui, &input);
            });
        });
        result
    }

    fn release_at(x: f32) -> Vec<egui::Event> {
        let pos = Pos2::new(x, 300.0);
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::default(),
            },
        ]
    }

    #[test]
    fn test_first_frame_measures_day_width_and_emits_nothing() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        let result = run_frame(&mut grid, &assignments, raw_input(0.0, Vec::new()));

        assert!(!result.has_actions());
        assert!(grid.cell_width().is_some_and(|w| w >= MIN_DAY_WIDTH));
        assert!(!grid.is_busy());
    }

    #[test]
    fn test_index_is_reused_for_the_same_list() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        run_frame(&mut grid, &assignments, raw_input(0.0, Vec::new()));
        run_frame(&mut grid, &assignments, raw_input(0.1, Vec::new()));
        assert!(grid
            .index
            .as_ref()
            .is_some_and(|index| index.is_built_from(&assignments)));
    }

    #[test]
    fn test_pointer_release_ends_resize_with_extension() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        let anchor = assignments[2].clone();
        assert!(grid.resize.begin(
            &anchor,
            ResizeEdge::Right,
            500.0,
            Some(100.0),
            0.0,
            &assignments,
        ));

        let result = run_frame(&mut grid, &assignments, raw_input(1.0, release_at(700.0)));
        assert_eq!(
            result.resized,
            Some(ResizeRequest {
                assignment_id: 12,
                new_start: day(10),
                new_end: day(14),
            })
        );
        assert!(!grid.is_busy());
    }

    #[test]
    fn test_escape_cancels_resize_without_emitting() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        let anchor = assignments[2].clone();
        grid.resize
            .begin(&anchor, ResizeEdge::Right, 500.0, Some(100.0), 0.0, &assignments);

        let escape = egui::Event::Key {
            key: egui::Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        };
        let result = run_frame(&mut grid, &assignments, raw_input(1.0, vec![escape]));
        assert!(result.resized.is_none());
        assert!(result.bulk_delete.is_empty());
        assert!(!grid.is_busy());
    }

    #[test]
    fn test_pointer_release_drops_on_last_target() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        grid.drag.drag_start(&assignments[0]);
        grid.drag.drag_over(CellKey::new(2, day(13)));

        let result = run_frame(&mut grid, &assignments, raw_input(1.0, release_at(900.0)));
        assert_eq!(
            result.moved,
            Some(MoveRequest {
                assignment_id: 10,
                new_date: day(13),
                new_worker_id: Some(2),
            })
        );
        assert!(!grid.is_busy());
    }

    #[test]
    fn test_release_outside_any_cell_abandons_drag() {
        let mut grid = PlanningGrid::new();
        let assignments = block();
        grid.drag.drag_start(&assignments[0]);

        let result = run_frame(&mut grid, &assignments, raw_input(1.0, release_at(5.0)));
        assert_eq!(result.moved, None);
        assert!(!grid.is_busy());
    }

    #[test]
    fn test_run_edges() {
        let index = AssignmentIndex::build(block());
        let list = index.assignments().to_vec();
        assert_eq!(run_edges(&index, &list[0]), (true, false));
        assert_eq!(run_edges(&index, &list[1]), (false, false));
        assert_eq!(run_edges(&index, &list[2]), (false, true));
    }
}
