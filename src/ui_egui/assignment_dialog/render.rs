use egui::{Color32, RichText};

use super::state::AssignmentDialogState;
use crate::models::assignment::Assignment;
use crate::models::chantier::Chantier;

const FORM_LABEL_WIDTH: f32 = 110.0;

/// What the user did with the dialog this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentDialogAction {
    None,
    Save(Assignment),
    Delete(Assignment),
    Close,
}

pub fn render_assignment_dialog(
    ctx: &egui::Context,
    state: &mut AssignmentDialogState,
    chantiers: &[Chantier],
) -> AssignmentDialogAction {
    let mut action = AssignmentDialogAction::None;
    let mut open = true;

    let title = if state.is_new() {
        "Nouvelle affectation"
    } else {
        "Modifier l'affectation"
    };

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("assignment_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .min_col_width(FORM_LABEL_WIDTH)
                .show(ui, |ui| {
                    ui.label("Ouvrier");
                    ui.label(RichText::new(&state.worker_name).strong());
                    ui.end_row();

                    ui.label("Date");
                    ui.add(
                        egui_extras::DatePickerButton::new(&mut state.date)
                            .id_source("assignment_dialog_date"),
                    );
                    ui.end_row();

                    ui.label("Chantier");
                    let selected = state
                        .chantier_id
                        .and_then(|id| chantiers.iter().find(|c| c.id == Some(id)))
                        .map(|c| c.name.as_str())
                        .unwrap_or("Choisir…");
                    egui::ComboBox::from_id_source("assignment_dialog_chantier")
                        .selected_text(selected)
                        .width(220.0)
                        .show_ui(ui, |ui| {
                            for chantier in chantiers {
                                ui.selectable_value(
                                    &mut state.chantier_id,
                                    chantier.id,
                                    &chantier.name,
                                );
                            }
                        });
                    ui.end_row();

                    ui.label("Horaires");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut state.start_time)
                                .desired_width(60.0)
                                .hint_text("07:30"),
                        );
                        ui.label("→");
                        ui.add(
                            egui::TextEdit::singleline(&mut state.end_time)
                                .desired_width(60.0)
                                .hint_text("16:30"),
                        );
                    });
                    ui.end_row();

                    ui.label("Note");
                    ui.add(
                        egui::TextEdit::multiline(&mut state.note)
                            .desired_rows(3)
                            .desired_width(220.0),
                    );
                    ui.end_row();
                });

            if let Some(error) = &state.error_message {
                ui.add_space(6.0);
                ui.colored_label(Color32::from_rgb(200, 50, 50), error);
            }

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("💾 Enregistrer").clicked() {
                    match state.to_assignment(chantiers) {
                        Ok(assignment) => action = AssignmentDialogAction::Save(assignment),
                        Err(message) => state.error_message = Some(message),
                    }
                }
                if ui.button("Annuler").clicked() {
                    action = AssignmentDialogAction::Close;
                }
                if let Some(original) = &state.original {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("🗑 Supprimer").color(Color32::from_rgb(200, 50, 50)))
                            .clicked()
                        {
                            action = AssignmentDialogAction::Delete(original.clone());
                        }
                    });
                }
            });
        });

    if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = AssignmentDialogAction::Close;
    }

    action
}
