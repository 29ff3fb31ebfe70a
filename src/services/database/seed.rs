//! Demo roster for a first launch on an empty database.

use anyhow::Result;
use chrono::{Duration, NaiveDate, NaiveTime};
use rusqlite::Connection;

use crate::models::assignment::Assignment;
use crate::models::chantier::Chantier;
use crate::models::worker::Worker;
use crate::services::assignment::AssignmentService;
use crate::services::chantier::ChantierService;
use crate::services::planning::week_start;
use crate::services::worker::WorkerService;

/// True when no worker has been recorded yet.
pub fn is_empty(conn: &Connection) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM workers", [], |row| row.get(0))?;
    Ok(count == 0)
}

/// Inserts a small team and a week of planning around `today`.
///
/// Does nothing when workers already exist.
pub fn seed_sample_data(conn: &Connection, today: NaiveDate) -> Result<()> {
    if !is_empty(conn)? {
        return Ok(());
    }

    let workers = WorkerService::new(conn);
    let chantiers = ChantierService::new(conn);
    let assignments = AssignmentService::new(conn);

    let team = [
        Worker::new("Claire", "Fontaine", "Conducteur de travaux"),
        Worker::new("Marc", "Lefèvre", "Chef d'équipe").with_color("#2E86C1"),
        Worker::new("Jean", "Dupont", "Maçon"),
        Worker::new("Karim", "Benali", "Coffreur"),
        Worker::new("Lucas", "Moreau", "Apprenti maçon"),
        Worker::new("Sofia", "Almeida", "Électricienne").with_type("interim"),
    ];
    let mut worker_ids = Vec::with_capacity(team.len());
    for worker in team {
        worker_ids.push(workers.create(worker)?.id.unwrap_or_default());
    }

    let gare = chantiers.create(
        Chantier::new("Gare Nord")
            .with_color("#3A7BD5")
            .with_address("12 rue de la Gare"),
    )?;
    let ecole = chantiers.create(Chantier::new("École Jules Ferry").with_color("#E67E22"))?;

    let monday = week_start(today);
    let start = NaiveTime::from_hms_opt(7, 30, 0);
    let end = NaiveTime::from_hms_opt(16, 30, 0);

    let plan: [(usize, &Chantier, i64, i64); 5] = [
        (1, &gare, 0, 4),
        (2, &gare, 0, 2),
        (3, &ecole, 1, 3),
        (4, &gare, 0, 2),
        (5, &ecole, 3, 4),
    ];
    for (worker_index, chantier, first, last) in plan {
        let (Some(chantier_id), Some(worker_id)) = (chantier.id, worker_ids.get(worker_index))
        else {
            continue;
        };
        for offset in first..=last {
            let mut assignment = Assignment::new(
                *worker_id,
                chantier_id,
                chantier.name.clone(),
                monday + Duration::days(offset),
            );
            assignment.start_time = start;
            assignment.end_time = end;
            assignments.create(assignment)?;
        }
    }

    log::info!("Seeded sample planning for week of {}", monday);
    Ok(())
}
