// Module exports for models

pub mod assignment;
pub mod chantier;
pub mod error;
pub mod settings;
pub mod worker;
