use super::PlanningApp;
use crate::models::settings::ViewMode;
use crate::services::planning::shift_reference;
use chrono::NaiveDate;

impl PlanningApp {
    pub(super) fn navigate_previous(&mut self) {
        self.navigate(-1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.navigate(1);
    }

    fn navigate(&mut self, steps: i32) {
        let reference = shift_reference(self.state.reference, self.settings.view_mode, steps);
        self.go_to(reference);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.go_to(self.state.today);
    }

    pub(super) fn go_to(&mut self, reference: NaiveDate) {
        if reference != self.state.reference {
            self.state.reference = reference;
            self.on_range_changed();
        }
    }

    pub(super) fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.settings.view_mode == view_mode {
            return;
        }
        self.settings.view_mode = view_mode;
        self.persist_settings();
        self.on_range_changed();
    }

    pub(super) fn set_show_weekend(&mut self, show_weekend: bool) {
        if self.settings.show_weekend == show_weekend {
            return;
        }
        self.settings.show_weekend = show_weekend;
        self.persist_settings();
        self.grid.cancel_gestures();
    }

    /// A gesture started on the old range must not land on the new one.
    fn on_range_changed(&mut self) {
        self.grid.cancel_gestures();
        self.request_reload();
    }

    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.assignment_dialog.is_some() || self.confirm_dialog.is_open() {
            return;
        }

        let (today, previous, next) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::T),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if today {
            self.jump_to_today();
        }
        if previous {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
    }
}
