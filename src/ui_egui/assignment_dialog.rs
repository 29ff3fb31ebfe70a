mod render;
mod state;

pub use render::{render_assignment_dialog, AssignmentDialogAction};
pub use state::AssignmentDialogState;
