mod palette;
pub mod planning_grid;
pub mod types;
pub mod utils;

pub use planning_grid::{PlanningGrid, PlanningInput};
pub use types::{GridInteractionResult, PlanningHandler};
