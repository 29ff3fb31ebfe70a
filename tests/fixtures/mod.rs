// Test fixtures - reusable test data
// Provides a consistent team, chantiers and planning across test files

#![allow(dead_code)]

use chantier_planning::models::assignment::Assignment;
use chantier_planning::models::chantier::Chantier;
use chantier_planning::models::worker::Worker;
use chantier_planning::services::assignment::AssignmentService;
use chantier_planning::services::chantier::ChantierService;
use chantier_planning::services::database::Database;
use chantier_planning::services::worker::WorkerService;
use chrono::{Duration, NaiveDate};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday 10 March 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    pub fn day(offset: i64) -> NaiveDate {
        monday() + Duration::days(offset)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// In-memory database with the schema created.
pub fn memory_db() -> Database {
    let db = Database::new(":memory:").expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

/// Ids of the records inserted by [`seed_team`].
pub struct Team {
    pub chef: i64,
    pub macon: i64,
    pub apprenti: i64,
    pub gare: Chantier,
    pub ecole: Chantier,
}

/// Three workers and two chantiers, no assignments.
pub fn seed_team(db: &Database) -> Team {
    let workers = WorkerService::new(db.connection());
    let chantiers = ChantierService::new(db.connection());

    let create_worker = |worker: Worker| workers.create(worker).unwrap().id.unwrap();
    let chef = create_worker(Worker::new("Marc", "Lefèvre", "Chef d'équipe"));
    let macon = create_worker(Worker::new("Jean", "Dupont", "Maçon"));
    let apprenti = create_worker(Worker::new("Lucas", "Moreau", "Apprenti maçon"));

    let gare = chantiers
        .create(Chantier::new("Gare Nord").with_color("#3A7BD5"))
        .unwrap();
    let ecole = chantiers
        .create(Chantier::new("École Jules Ferry").with_color("#E67E22"))
        .unwrap();

    Team {
        chef,
        macon,
        apprenti,
        gare,
        ecole,
    }
}

/// Inserts one record per day of `days` (offsets from [`dates::monday`]).
pub fn plan_days(
    db: &Database,
    worker_id: i64,
    chantier: &Chantier,
    days: impl IntoIterator<Item = i64>,
) -> Vec<Assignment> {
    let service = AssignmentService::new(db.connection());
    days.into_iter()
        .map(|offset| {
            let mut assignment = Assignment::new(
                worker_id,
                chantier.id.unwrap(),
                chantier.name.clone(),
                dates::day(offset),
            );
            assignment.color = chantier.color.clone();
            service.create(assignment).unwrap()
        })
        .collect()
}

/// Unsaved assignment for pure tests.
pub fn draft(worker_id: i64, chantier_id: i64, date: NaiveDate) -> Assignment {
    Assignment::new(worker_id, chantier_id, format!("Chantier {chantier_id}"), date)
}
