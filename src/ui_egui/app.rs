mod confirm;
mod context;
mod lifecycle;
mod navigation;
mod state;
mod toast;

pub use self::lifecycle::initialize_database;

use self::confirm::{ConfirmAction, ConfirmDialogState};
use self::context::AppContext;
use self::state::AppState;
use self::toast::ToastManager;
use crate::models::assignment::Assignment;
use crate::models::settings::{Settings, ViewMode};
use crate::models::worker::WorkerCategory;
use crate::services::planning::{range_title, week_start};
use crate::ui_egui::assignment_dialog::{
    render_assignment_dialog, AssignmentDialogAction, AssignmentDialogState,
};
use crate::ui_egui::drag::MoveRequest;
use crate::ui_egui::resize::{BlockDeleteConfirm, ResizeRequest};
use crate::ui_egui::views::{PlanningGrid, PlanningHandler, PlanningInput};
use chrono::NaiveDate;
use std::sync::Arc;

pub struct PlanningApp {
    context: AppContext,
    /// Persisted view preferences
    settings: Settings,
    state: AppState,
    grid: PlanningGrid,
    assignment_dialog: Option<AssignmentDialogState>,
    toast_manager: ToastManager,
    confirm_dialog: ConfirmDialogState,
}

impl eframe::App for PlanningApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}

impl PlanningApp {
    pub fn assignments(&self) -> &Arc<[Assignment]> {
        &self.state.data.assignments
    }

    pub fn reference(&self) -> NaiveDate {
        self.state.reference
    }

    pub fn is_dialog_open(&self) -> bool {
        self.assignment_dialog.is_some()
    }

    pub fn is_confirmation_pending(&self) -> bool {
        self.confirm_dialog.is_open()
    }

    /// Answer the pending confirmation as if the user clicked a button.
    pub fn resolve_confirmation(&mut self, confirmed: bool) {
        match self.confirm_dialog.take_action() {
            Some(action) if confirmed => self.execute_confirmed_action(action),
            _ => {}
        }
    }

    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("planning_toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("◀").on_hover_text("Précédent (Alt+←)").clicked() {
                    self.navigate_previous();
                }
                if ui.button("Aujourd'hui").clicked() {
                    self.jump_to_today();
                }
                if ui.button("▶").on_hover_text("Suivant (Alt+→)").clicked() {
                    self.navigate_next();
                }

                let mut reference = self.state.reference;
                ui.add(
                    egui_extras::DatePickerButton::new(&mut reference)
                        .id_source("planning_reference_date"),
                );
                self.go_to(reference);

                ui.heading(range_title(self.state.reference, self.settings.view_mode));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut show_weekend = self.settings.show_weekend;
                    if ui.checkbox(&mut show_weekend, "Week-end").changed() {
                        self.set_show_weekend(show_weekend);
                    }
                    ui.separator();

                    let mut view_mode = self.settings.view_mode;
                    ui.selectable_value(&mut view_mode, ViewMode::Month, "Mois");
                    ui.selectable_value(&mut view_mode, ViewMode::Week, "Semaine");
                    self.set_view_mode(view_mode);
                });
            });
            ui.add_space(4.0);
        });
    }

    fn render_grid(&mut self, ctx: &egui::Context) {
        let modal_open = self.assignment_dialog.is_some() || self.confirm_dialog.is_open();
        let input = PlanningInput {
            assignments: &self.state.data.assignments,
            workers: &self.state.data.workers,
            reference: self.state.reference,
            view_mode: self.settings.view_mode,
            show_weekend: self.settings.show_weekend,
            expanded: &self.state.expanded,
            today: self.state.today,
        };
        let grid = &mut self.grid;

        let result = egui::CentralPanel::default()
            .show(ctx, |ui| {
                ui.add_enabled_ui(!modal_open, |ui| grid.show(ui, &input))
                    .inner
            })
            .inner;

        if result.has_actions() {
            result.dispatch(self);
        }
    }

    fn render_assignment_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.assignment_dialog.as_mut() else {
            return;
        };

        match render_assignment_dialog(ctx, state, &self.state.data.chantiers) {
            AssignmentDialogAction::None => {}
            AssignmentDialogAction::Close => self.assignment_dialog = None,
            AssignmentDialogAction::Save(assignment) => {
                if self.save_assignment(assignment) {
                    self.assignment_dialog = None;
                }
            }
            AssignmentDialogAction::Delete(assignment) => {
                self.assignment_dialog = None;
                self.on_affectation_delete(&assignment);
            }
        }
    }

    fn save_assignment(&mut self, assignment: Assignment) -> bool {
        let service = self.context.assignment_service();
        let saved = match assignment.id {
            Some(_) => service.update(&assignment),
            None => service.create(assignment.clone()).map(|_| ()),
        };

        match saved {
            Ok(()) => {
                self.toast_manager
                    .success(format!("Affectation \"{}\" enregistrée", assignment.chantier_name));
                self.request_reload();
                true
            }
            Err(err) => {
                log::error!("Failed to save assignment: {:#}", err);
                if let Some(state) = self.assignment_dialog.as_mut() {
                    state.error_message = Some(format!("Échec de l'enregistrement : {}", err));
                }
                false
            }
        }
    }

    fn delete_assignments(&mut self, ids: &[i64]) {
        match self.context.assignment_service().delete_many(ids) {
            Ok(count) => {
                self.toast_manager
                    .success(format!("{} affectation(s) supprimée(s)", count));
                self.request_reload();
            }
            Err(err) => {
                log::error!("Failed to delete assignments {:?}: {:#}", ids, err);
                self.toast_manager
                    .error(format!("Échec de la suppression : {}", err));
            }
        }
    }
}

impl PlanningHandler for PlanningApp {
    fn on_affectation_click(&mut self, assignment: &Assignment) {
        let worker_name = self
            .state
            .worker(assignment.worker_id)
            .map(|w| w.display_name())
            .unwrap_or_default();
        self.assignment_dialog = Some(AssignmentDialogState::from_assignment(
            assignment,
            worker_name,
        ));
    }

    fn on_affectation_delete(&mut self, assignment: &Assignment) {
        let Some(assignment_id) = assignment.id else {
            return;
        };
        self.confirm_dialog.request(ConfirmAction::DeleteAssignment {
            assignment_id,
            chantier_name: assignment.chantier_name.clone(),
            date: assignment.date,
        });
    }

    fn on_cell_click(&mut self, worker_id: i64, date: NaiveDate) {
        if self.state.data.chantiers.is_empty() {
            self.toast_manager
                .error("Aucun chantier disponible pour créer une affectation");
            return;
        }
        let Some(worker) = self.state.worker(worker_id) else {
            log::warn!("Cell click for unknown worker {}", worker_id);
            return;
        };
        self.assignment_dialog = Some(AssignmentDialogState::new_assignment(
            worker,
            worker_id,
            date,
            &self.settings,
        ));
    }

    fn on_duplicate(&mut self, worker_id: i64) {
        let monday = week_start(self.state.reference);
        match self
            .context
            .assignment_service()
            .duplicate_week(worker_id, monday)
        {
            Ok(created) => {
                self.toast_manager.success(format!(
                    "{} affectation(s) copiée(s) sur la semaine suivante",
                    created.len()
                ));
                self.request_reload();
            }
            Err(err) => {
                log::error!("Failed to duplicate week for worker {}: {:#}", worker_id, err);
                self.toast_manager
                    .error(format!("Échec de la duplication : {}", err));
            }
        }
    }

    fn on_affectation_move(&mut self, request: &MoveRequest) {
        let moved = self.context.assignment_service().move_to(
            request.assignment_id,
            request.new_date,
            request.new_worker_id,
        );
        if let Err(err) = moved {
            log::error!("Failed to move assignment {}: {:#}", request.assignment_id, err);
            self.toast_manager
                .error(format!("Échec du déplacement : {}", err));
        }
        // Reload either way so the grid shows what is actually stored
        self.request_reload();
    }

    fn on_affectation_resize(&mut self, request: &ResizeRequest) {
        match self.context.assignment_service().extend_block(
            request.assignment_id,
            request.new_start,
            request.new_end,
        ) {
            Ok(created) => {
                log::info!(
                    "Extended assignment {} with {} day(s)",
                    request.assignment_id,
                    created.len()
                );
                self.request_reload();
            }
            Err(err) => {
                log::error!(
                    "Failed to extend assignment {}: {:#}",
                    request.assignment_id,
                    err
                );
                self.toast_manager
                    .error(format!("Échec de l'extension : {}", err));
            }
        }
    }

    fn on_affectations_delete(&mut self, assignments: &[Assignment]) {
        let ids: Vec<i64> = assignments.iter().filter_map(|a| a.id).collect();
        self.delete_assignments(&ids);
    }

    fn request_block_delete_confirmation(&mut self, confirm: BlockDeleteConfirm) {
        self.confirm_dialog.request(ConfirmAction::DeleteBlock(confirm));
    }

    fn on_toggle_category(&mut self, category: WorkerCategory) {
        if !self.state.expanded.remove(&category) {
            self.state.expanded.insert(category);
        }
        self.persist_settings();
    }
}
