//! Confirmation dialog for destructive actions.
//!
//! Declining (button or Escape) drops the pending action; nothing is
//! deleted until the user explicitly confirms.

use chrono::NaiveDate;
use egui::{Context, RichText};

use crate::ui_egui::resize::BlockDeleteConfirm;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Delete one assignment from its context menu
    DeleteAssignment {
        assignment_id: i64,
        chantier_name: String,
        date: NaiveDate,
    },
    /// Shrinking a block removed every one of its days
    DeleteBlock(BlockDeleteConfirm),
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteAssignment { .. } => "Supprimer l'affectation",
            ConfirmAction::DeleteBlock(_) => "Supprimer le bloc",
        }
    }

    pub fn message(&self) -> String {
        match self {
            ConfirmAction::DeleteAssignment {
                chantier_name,
                date,
                ..
            } => format!(
                "Supprimer l'affectation sur \"{}\" du {} ?",
                chantier_name,
                date.format("%d/%m/%Y")
            ),
            ConfirmAction::DeleteBlock(confirm) => confirm.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open (or closed)
    Pending,
}

#[derive(Debug, Default)]
pub struct ConfirmDialogState {
    pending_action: Option<ConfirmAction>,
}

impl ConfirmDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, action: ConfirmAction) {
        self.pending_action = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending_action.is_some()
    }

    /// Render the confirmation dialog and return the result.
    ///
    /// On `Confirmed` the action stays pending so the caller can
    /// [`take_action`](Self::take_action) it.
    pub fn render(&mut self, ctx: &Context) -> ConfirmResult {
        let Some(action) = &self.pending_action else {
            return ConfirmResult::Pending;
        };

        let mut result = ConfirmResult::Pending;

        egui::Window::new(action.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(300.0);
                ui.set_max_width(420.0);
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("⚠")
                            .size(24.0)
                            .color(egui::Color32::from_rgb(220, 150, 50)),
                    );
                    ui.vertical(|ui| {
                        ui.label(action.message());
                    });
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm_button = egui::Button::new(
                        RichText::new("Supprimer").color(egui::Color32::WHITE),
                    )
                    .fill(egui::Color32::from_rgb(180, 60, 60));
                    if ui.add(confirm_button).clicked() {
                        result = ConfirmResult::Confirmed;
                    }
                    ui.add_space(10.0);
                    if ui.button("Annuler").clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });
                ui.add_space(5.0);
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            result = ConfirmResult::Cancelled;
        }

        if result == ConfirmResult::Cancelled {
            log::debug!("Confirmation declined");
            self.pending_action = None;
        }

        result
    }

    pub fn take_action(&mut self) -> Option<ConfirmAction> {
        self.pending_action.take()
    }
}

use super::PlanningApp;

impl PlanningApp {
    pub(super) fn handle_confirm_dialog(&mut self, ctx: &Context) {
        if self.confirm_dialog.render(ctx) == ConfirmResult::Confirmed {
            if let Some(action) = self.confirm_dialog.take_action() {
                self.execute_confirmed_action(action);
            }
        }
    }

    pub(super) fn execute_confirmed_action(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteAssignment {
                assignment_id,
                chantier_name,
                ..
            } => match self.context.assignment_service().delete(assignment_id) {
                Ok(()) => {
                    log::info!("Deleted assignment {} ({})", assignment_id, chantier_name);
                    self.toast_manager
                        .success(format!("Affectation \"{}\" supprimée", chantier_name));
                    self.request_reload();
                }
                Err(err) => {
                    log::error!("Failed to delete assignment {}: {:#}", assignment_id, err);
                    self.toast_manager
                        .error(format!("Échec de la suppression : {}", err));
                }
            },
            ConfirmAction::DeleteBlock(confirm) => {
                self.delete_assignments(&confirm.ids());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignment::Assignment;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_request_and_take() {
        let mut dialog = ConfirmDialogState::new();
        assert!(!dialog.is_open());

        dialog.request(ConfirmAction::DeleteAssignment {
            assignment_id: 3,
            chantier_name: "Gare Nord".to_string(),
            date: day(),
        });
        assert!(dialog.is_open());
        assert!(matches!(
            dialog.take_action(),
            Some(ConfirmAction::DeleteAssignment { assignment_id: 3, .. })
        ));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_block_message_names_chantier() {
        let action = ConfirmAction::DeleteBlock(BlockDeleteConfirm {
            chantier_name: "École Jules Ferry".to_string(),
            assignments: vec![Assignment::new(1, 2, "École Jules Ferry", day()).with_id(9)],
        });
        assert!(action.message().contains("École Jules Ferry"));
        assert_eq!(action.title(), "Supprimer le bloc");
    }

    #[test]
    fn test_escape_declines_without_action() {
        let mut dialog = ConfirmDialogState::new();
        dialog.request(ConfirmAction::DeleteAssignment {
            assignment_id: 3,
            chantier_name: "Gare Nord".to_string(),
            date: day(),
        });

        let ctx = Context::default();
        let raw = egui::RawInput {
            events: vec![egui::Event::Key {
                key: egui::Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::default(),
            }],
            ..Default::default()
        };
        let mut result = ConfirmResult::Pending;
        let _ = ctx.run(raw, |ctx| {
            result = dialog.render(ctx);
        });

        assert_eq!(result, ConfirmResult::Cancelled);
        assert!(!dialog.is_open());
    }
}
