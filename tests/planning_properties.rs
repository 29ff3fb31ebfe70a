// Property-based tests for the planning computations and gesture controllers
mod fixtures;

use chantier_planning::models::assignment::Assignment;
use chantier_planning::models::settings::ViewMode;
use chantier_planning::models::worker::Worker;
use chantier_planning::services::planning::{
    group_workers, is_weekend, visible_days, AssignmentIndex, CategoryPriority, CategoryRules,
};
use chantier_planning::ui_egui::drag::DragController;
use chantier_planning::ui_egui::resize::{
    compute_preview, ResizeController, ResizeEdge, ResizeOutcome,
};
use chantier_planning::utils::date::days_in_month;
use chrono::{Datelike, Duration, NaiveDate};
use fixtures::dates;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|offset| dates::leap_day_2024() - Duration::days(365) + Duration::days(offset))
}

fn any_assignments() -> impl Strategy<Value = Vec<Assignment>> {
    prop::collection::vec((1i64..6, 1i64..4, 0i64..14), 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (worker, chantier, day))| {
                fixtures::draft(worker, chantier, dates::day(day)).with_id(i as i64 + 1)
            })
            .collect()
    })
}

const ROLES: [&str; 6] = [
    "Conducteur de travaux",
    "Chef d'équipe",
    "Maçon",
    "Apprenti",
    "Coffreur",
    "Grutier",
];

fn any_workers() -> impl Strategy<Value = Vec<Worker>> {
    prop::collection::vec((0usize..ROLES.len(), prop::option::of(0usize..3)), 0..25).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (role, kind))| {
                    let mut worker =
                        Worker::new(format!("W{i}"), "Test", ROLES[role]).with_id(i as i64 + 1);
                    worker.worker_type = kind.map(|k| ["interim", "sous-traitant", "cdi"][k].to_string());
                    worker
                })
                .collect()
        },
    )
}

proptest! {
    /// The axis is ordered, duplicate-free and has the expected length
    #[test]
    fn prop_axis_shape(reference in any_date(), month in any::<bool>(), show_weekend in any::<bool>()) {
        let mode = if month { ViewMode::Month } else { ViewMode::Week };
        let days = visible_days(reference, mode, show_weekend);

        prop_assert!(days.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(days.contains(&reference) || (!show_weekend && is_weekend(reference)));
        if !show_weekend {
            prop_assert!(days.iter().all(|d| !is_weekend(*d)));
        }

        match (mode, show_weekend) {
            (ViewMode::Week, true) => prop_assert_eq!(days.len(), 7),
            (ViewMode::Week, false) => prop_assert_eq!(days.len(), 5),
            (ViewMode::Month, true) => prop_assert_eq!(
                days.len() as u32,
                days_in_month(reference.year(), reference.month())
            ),
            (ViewMode::Month, false) => prop_assert!(days.len() >= 20 && days.len() <= 23),
        }
    }

    /// Every assignment is found in exactly its own cell, in input order
    #[test]
    fn prop_index_is_complete(assignments in any_assignments()) {
        let source: Arc<[Assignment]> = Arc::from(assignments);
        let index = AssignmentIndex::build(Arc::clone(&source));

        let mut seen = 0;
        let cells: HashSet<(i64, NaiveDate)> = source.iter().map(|a| (a.worker_id, a.date)).collect();
        for (worker_id, date) in cells {
            let found = index.lookup(worker_id, date);
            let expected: Vec<&Assignment> = source
                .iter()
                .filter(|a| a.worker_id == worker_id && a.date == date)
                .collect();
            prop_assert_eq!(&found, &expected);
            seen += found.len();
        }
        prop_assert_eq!(seen, source.len());
        prop_assert!(index.lookup(99, dates::monday()).is_empty());
    }

    /// Each worker lands in exactly one non-empty group, groups in priority order
    #[test]
    fn prop_grouping_is_a_partition(workers in any_workers()) {
        let rules = CategoryRules::default();
        let priority = CategoryPriority::default();
        let groups = group_workers(&workers, &rules, &priority, &HashSet::new());

        let total: usize = groups.iter().map(|g| g.workers.len()).sum();
        prop_assert_eq!(total, workers.len());
        prop_assert!(groups.iter().all(|g| !g.workers.is_empty()));
        prop_assert!(groups.windows(2).all(|w| priority.rank(w[0].category) < priority.rank(w[1].category)));
        for group in &groups {
            prop_assert!(group.workers.iter().all(|w| rules.classify(w) == group.category));
            prop_assert!(!group.expanded);
        }
    }

    /// Dropping where the drag started never emits a move
    #[test]
    fn prop_drop_on_origin_is_noop(worker in 1i64..50, day in 0i64..30) {
        let assignment = fixtures::draft(worker, 1, dates::day(day)).with_id(7);
        let mut drag = DragController::new();
        prop_assert!(drag.drag_start(&assignment));
        prop_assert_eq!(drag.drop(worker, dates::day(day)), None);
        prop_assert!(!drag.is_dragging());
    }

    /// Releases that are too quick or too short are clicks
    #[test]
    fn prop_resize_clicks_are_ignored(
        raw_dx in -200.0f32..200.0,
        raw_elapsed in 0.0f64..1.0,
        quick in any::<bool>(),
        right in any::<bool>(),
    ) {
        // Either released too soon or moved too little
        let (dx, elapsed) = if quick {
            (raw_dx, raw_elapsed * 0.099)
        } else {
            (raw_dx / 20.5, raw_elapsed)
        };
        let anchor = fixtures::draft(3, 1, dates::day(2)).with_id(1);
        let block = vec![anchor.clone()];
        let edge = if right { ResizeEdge::Right } else { ResizeEdge::Left };

        let mut resize = ResizeController::default();
        prop_assert!(resize.begin(&anchor, edge, 500.0, Some(40.0), 10.0, &block));
        resize.update(500.0 + dx);
        prop_assert_eq!(resize.end(500.0 + dx, 10.0 + elapsed), ResizeOutcome::Ignored);
        prop_assert!(!resize.is_active());
        prop_assert!(resize.preview().is_empty());
    }

    /// Additions are always new days and removals always existing ones
    #[test]
    fn prop_preview_respects_existing_days(
        offsets in prop::collection::btree_set(0i64..20, 1..10),
        delta in -8i64..8,
        right in any::<bool>(),
    ) {
        let existing: BTreeSet<NaiveDate> = offsets.iter().map(|o| dates::day(*o)).collect();
        let edge_date = if right {
            *existing.iter().next_back().unwrap()
        } else {
            *existing.iter().next().unwrap()
        };
        let edge = if right { ResizeEdge::Right } else { ResizeEdge::Left };

        let preview = compute_preview(edge, edge_date, delta, &existing);
        prop_assert!(preview.additions.iter().all(|d| !existing.contains(d)));
        prop_assert!(preview.removals.iter().all(|d| existing.contains(d)));
        prop_assert!(preview.additions.is_empty() || preview.removals.is_empty());
        prop_assert!(preview.additions.len() as i64 <= delta.abs());
    }
}
