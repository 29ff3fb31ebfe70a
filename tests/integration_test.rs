// Integration tests: persistence plus grid gestures dispatched to the app
mod fixtures;

use chantier_planning::config::AppConfig;
use chantier_planning::models::settings::ViewMode;
use chantier_planning::models::worker::WorkerCategory;
use chantier_planning::services::assignment::AssignmentService;
use chantier_planning::services::database::Database;
use chantier_planning::services::planning::{AssignmentIndex, CellKey};
use chantier_planning::services::settings::SettingsService;
use chantier_planning::services::worker::WorkerService;
use chantier_planning::ui_egui::drag::DragController;
use chantier_planning::ui_egui::resize::{ResizeController, ResizeEdge, ResizeOutcome};
use chantier_planning::ui_egui::views::{GridInteractionResult, PlanningHandler};
use chantier_planning::ui_egui::{initialize_database, PlanningApp};
use chrono::NaiveDate;
use fixtures::{dates, memory_db, plan_days, seed_team};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const CELL: f32 = 40.0;

fn leak(db: Database) -> &'static Database {
    Box::leak(Box::new(db))
}

fn block_dates(db: &Database, worker_id: i64, chantier_id: i64) -> Vec<NaiveDate> {
    AssignmentService::new(db.connection())
        .list_for_block(worker_id, chantier_id)
        .unwrap()
        .into_iter()
        .map(|a| a.date)
        .collect()
}

#[test]
fn test_settings_persistence() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir.path().join("planning.db");

    {
        let db = Database::new(db_path.to_str().unwrap()).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");
        let service = SettingsService::new(&db);

        let mut settings = service.get().expect("Failed to get settings");
        assert_eq!(settings.view_mode, ViewMode::Week);
        assert!(!settings.show_weekend);

        settings.view_mode = ViewMode::Month;
        settings.show_weekend = true;
        settings.expanded_categories = vec![WorkerCategory::ChefsEquipe, WorkerCategory::Ouvriers];
        service.update(&settings).expect("Failed to update settings");
    }

    // Second launch on the same file
    let db = Database::new(db_path.to_str().unwrap()).unwrap();
    db.initialize_schema().unwrap();
    let loaded = SettingsService::new(&db).get().unwrap();
    assert_eq!(loaded.view_mode, ViewMode::Month);
    assert!(loaded.show_weekend);
    assert_eq!(
        loaded.expanded_categories,
        vec![WorkerCategory::ChefsEquipe, WorkerCategory::Ouvriers]
    );
}

#[test]
fn test_initialize_database_seeds_once() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: Some(temp_dir.path().join("data").join("planning.db")),
        ..AppConfig::default()
    };

    let db = initialize_database(&config, dates::monday()).unwrap();
    let workers = WorkerService::new(db.connection()).list_all().unwrap();
    assert!(!workers.is_empty());

    let again = initialize_database(&config, dates::monday()).unwrap();
    assert_eq!(
        WorkerService::new(again.connection()).list_all().unwrap().len(),
        workers.len()
    );
}

#[test]
fn test_initialize_database_without_seed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_path: Some(temp_dir.path().join("planning.db")),
        seed_sample_data: false,
        ..AppConfig::default()
    };

    let db = initialize_database(&config, dates::monday()).unwrap();
    assert!(WorkerService::new(db.connection()).list_all().unwrap().is_empty());
}

#[test]
fn test_app_loads_displayed_week() {
    let db = leak(memory_db());
    let team = seed_team(db);
    plan_days(db, team.macon, &team.gare, 0..=2);
    // Next week, outside the displayed range
    plan_days(db, team.macon, &team.gare, [8]);

    let app = PlanningApp::with_database(db, dates::monday());
    assert_eq!(app.reference(), dates::monday());
    assert_eq!(app.assignments().len(), 3);
    assert!(!app.is_dialog_open());
}

#[test]
fn test_right_edge_resize_extends_block() {
    let db = leak(memory_db());
    let team = seed_team(db);
    plan_days(db, team.macon, &team.gare, 0..=2);
    let mut app = PlanningApp::with_database(db, dates::monday());

    let assignments = Arc::clone(app.assignments());
    let index = AssignmentIndex::build(Arc::clone(&assignments));
    let anchor = index.lookup(team.macon, dates::day(2))[0].clone();

    let mut resize = ResizeController::default();
    assert!(resize.begin(&anchor, ResizeEdge::Right, 300.0, Some(CELL), 0.0, &assignments));
    assert!(resize.update(380.0));
    assert_eq!(resize.preview().additions, vec![dates::day(3), dates::day(4)]);

    let ResizeOutcome::Extend(request) = resize.end(380.0, 1.0) else {
        panic!("expected an extension");
    };
    assert_eq!(request.new_start, dates::day(0));
    assert_eq!(request.new_end, dates::day(4));

    GridInteractionResult {
        resized: Some(request),
        ..Default::default()
    }
    .dispatch(&mut app);

    let stored = block_dates(db, team.macon, team.gare.id.unwrap());
    assert_eq!(stored, (0..=4).map(dates::day).collect::<Vec<_>>());
}

#[test]
fn test_left_edge_shrink_deletes_removed_days() {
    let db = leak(memory_db());
    let team = seed_team(db);
    plan_days(db, team.macon, &team.gare, 0..=3);
    let mut app = PlanningApp::with_database(db, dates::monday());
    let assignments = Arc::clone(app.assignments());
    let anchor = assignments
        .iter()
        .find(|a| a.date == dates::day(0))
        .cloned()
        .unwrap();

    let mut resize = ResizeController::default();
    assert!(resize.begin(&anchor, ResizeEdge::Left, 100.0, Some(CELL), 0.0, &assignments));
    resize.update(180.0);

    let ResizeOutcome::Delete(doomed) = resize.end(180.0, 1.0) else {
        panic!("expected a partial delete");
    };
    assert_eq!(
        doomed.iter().map(|a| a.date).collect::<Vec<_>>(),
        vec![dates::day(0), dates::day(1)]
    );

    GridInteractionResult {
        bulk_delete: doomed,
        ..Default::default()
    }
    .dispatch(&mut app);

    assert_eq!(
        block_dates(db, team.macon, team.gare.id.unwrap()),
        vec![dates::day(2), dates::day(3)]
    );
    assert!(!app.is_confirmation_pending());
}

#[test]
fn test_full_block_shrink_waits_for_confirmation() {
    let db = leak(memory_db());
    let team = seed_team(db);
    plan_days(db, team.macon, &team.gare, 0..=1);
    plan_days(db, team.macon, &team.ecole, [3]);
    let mut app = PlanningApp::with_database(db, dates::monday());
    let assignments = Arc::clone(app.assignments());
    let anchor = assignments
        .iter()
        .find(|a| a.date == dates::day(1) && a.chantier_id == team.gare.id.unwrap())
        .cloned()
        .unwrap();

    let mut resize = ResizeController::default();
    assert!(resize.begin(&anchor, ResizeEdge::Right, 200.0, Some(CELL), 0.0, &assignments));
    let ResizeOutcome::ConfirmDelete(confirm) = resize.end(200.0 - 2.0 * CELL, 1.0) else {
        panic!("expected a confirmation request");
    };
    assert_eq!(confirm.chantier_name, "Gare Nord");
    assert_eq!(confirm.assignments.len(), 2);

    let result = GridInteractionResult {
        confirm_block_delete: Some(confirm),
        ..Default::default()
    };
    result.clone().dispatch(&mut app);
    assert!(app.is_confirmation_pending());

    // Declining changes nothing
    app.resolve_confirmation(false);
    assert!(!app.is_confirmation_pending());
    assert_eq!(block_dates(db, team.macon, team.gare.id.unwrap()).len(), 2);

    result.dispatch(&mut app);
    app.resolve_confirmation(true);
    assert!(block_dates(db, team.macon, team.gare.id.unwrap()).is_empty());
    // Other chantier of the same worker untouched
    assert_eq!(
        block_dates(db, team.macon, team.ecole.id.unwrap()),
        vec![dates::day(3)]
    );
}

#[test]
fn test_resize_click_changes_nothing() {
    let db = leak(memory_db());
    let team = seed_team(db);
    let planned = plan_days(db, team.macon, &team.gare, [1]);

    let mut resize = ResizeController::default();
    assert!(resize.begin(&planned[0], ResizeEdge::Right, 50.0, Some(CELL), 2.0, &planned));
    resize.update(95.0);
    // Released after 50 ms
    assert_eq!(resize.end(95.0, 2.05), ResizeOutcome::Ignored);
    assert!(!resize.is_active());
    assert!(resize.preview().is_empty());
}

#[test]
fn test_drag_moves_assignment_to_other_worker() {
    let db = leak(memory_db());
    let team = seed_team(db);
    let planned = plan_days(db, team.macon, &team.gare, [0]);
    let mut app = PlanningApp::with_database(db, dates::monday());

    let mut drag = DragController::new();
    assert!(drag.drag_start(&planned[0]));
    drag.drag_over(CellKey::new(team.chef, dates::day(2)));
    let request = drag.drop(team.chef, dates::day(2));
    assert!(!drag.is_dragging());

    GridInteractionResult {
        moved: request,
        ..Default::default()
    }
    .dispatch(&mut app);

    let stored = AssignmentService::new(db.connection())
        .get(planned[0].id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored.worker_id, team.chef);
    assert_eq!(stored.date, dates::day(2));
}

#[test]
fn test_drop_on_same_cell_is_ignored() {
    let db = leak(memory_db());
    let team = seed_team(db);
    let planned = plan_days(db, team.apprenti, &team.ecole, [4]);

    let mut drag = DragController::new();
    drag.drag_start(&planned[0]);
    assert_eq!(drag.drop(team.apprenti, dates::day(4)), None);
}

#[test]
fn test_duplicate_copies_displayed_week() {
    let db = leak(memory_db());
    let team = seed_team(db);
    plan_days(db, team.chef, &team.gare, [0, 2]);
    plan_days(db, team.chef, &team.ecole, [4]);
    // Already planned on the target day, must not be doubled
    plan_days(db, team.chef, &team.gare, [7]);
    let mut app = PlanningApp::with_database(db, dates::day(3));

    app.on_duplicate(team.chef);

    assert_eq!(
        block_dates(db, team.chef, team.gare.id.unwrap()),
        vec![dates::day(0), dates::day(2), dates::day(7), dates::day(9)]
    );
    assert_eq!(
        block_dates(db, team.chef, team.ecole.id.unwrap()),
        vec![dates::day(4), dates::day(11)]
    );
}

#[test]
fn test_single_delete_needs_confirmation() {
    let db = leak(memory_db());
    let team = seed_team(db);
    let planned = plan_days(db, team.macon, &team.gare, [1]);
    let mut app = PlanningApp::with_database(db, dates::monday());

    app.on_affectation_delete(&planned[0]);
    assert!(app.is_confirmation_pending());
    app.resolve_confirmation(true);

    assert!(AssignmentService::new(db.connection())
        .get(planned[0].id.unwrap())
        .unwrap()
        .is_none());
}

#[test]
fn test_clicks_open_the_dialog() {
    let db = leak(memory_db());
    let team = seed_team(db);
    let planned = plan_days(db, team.macon, &team.gare, [1]);
    let mut app = PlanningApp::with_database(db, dates::monday());

    app.on_affectation_click(&planned[0]);
    assert!(app.is_dialog_open());

    let mut other = PlanningApp::with_database(db, dates::monday());
    other.on_cell_click(team.apprenti, dates::day(3));
    assert!(other.is_dialog_open());
}

#[test]
fn test_category_toggle_is_persisted() {
    let db = leak(memory_db());
    seed_team(db);
    let mut app = PlanningApp::with_database(db, dates::monday());

    // Every group starts expanded
    app.on_toggle_category(WorkerCategory::Apprentis);
    let settings = SettingsService::new(db).get().unwrap();
    assert!(!settings
        .expanded_categories
        .contains(&WorkerCategory::Apprentis));
    assert_eq!(settings.expanded_categories.len(), WorkerCategory::ALL.len() - 1);

    app.on_toggle_category(WorkerCategory::Apprentis);
    let settings = SettingsService::new(db).get().unwrap();
    assert!(settings
        .expanded_categories
        .contains(&WorkerCategory::Apprentis));
}
