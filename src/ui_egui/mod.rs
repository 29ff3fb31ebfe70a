mod app;
mod assignment_dialog;
pub mod drag;
pub mod resize;
mod resize_drawing;
pub mod views;

pub use app::{initialize_database, PlanningApp};
