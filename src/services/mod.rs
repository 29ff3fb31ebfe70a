// Service module exports

pub mod assignment;
pub mod chantier;
pub mod database;
pub mod planning;
pub mod settings;
pub mod worker;
