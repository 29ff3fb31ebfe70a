//! Worker row groups and their display order.

use std::collections::HashSet;

use crate::models::worker::{Worker, WorkerCategory};

/// One classification rule; rules are tried in order and the first match wins.
#[derive(Clone, Copy)]
pub struct CategoryRule {
    pub category: WorkerCategory,
    pub matches: fn(&Worker) -> bool,
}

impl std::fmt::Debug for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryRule")
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
    fallback: WorkerCategory,
}

fn type_is(worker: &Worker, accepted: &[&str]) -> bool {
    worker
        .worker_type
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .is_some_and(|t| accepted.contains(&t.as_str()))
}

fn role_contains(worker: &Worker, needle: &str) -> bool {
    worker.role.to_lowercase().contains(needle)
}

impl Default for CategoryRules {
    /// Contract type wins over job title; anyone unmatched is an `Ouvrier`.
    fn default() -> Self {
        Self::new(
            vec![
                CategoryRule {
                    category: WorkerCategory::Interimaires,
                    matches: |w| type_is(w, &["interim", "intérim", "interimaire"]),
                },
                CategoryRule {
                    category: WorkerCategory::SousTraitants,
                    matches: |w| type_is(w, &["sous-traitant", "sous_traitant", "soustraitant"]),
                },
                CategoryRule {
                    category: WorkerCategory::Conducteurs,
                    matches: |w| role_contains(w, "conducteur"),
                },
                CategoryRule {
                    category: WorkerCategory::ChefsEquipe,
                    matches: |w| role_contains(w, "chef"),
                },
                CategoryRule {
                    category: WorkerCategory::Apprentis,
                    matches: |w| role_contains(w, "apprenti"),
                },
            ],
            WorkerCategory::Ouvriers,
        )
    }
}

impl CategoryRules {
    pub fn new(rules: Vec<CategoryRule>, fallback: WorkerCategory) -> Self {
        Self { rules, fallback }
    }

    pub fn classify(&self, worker: &Worker) -> WorkerCategory {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(worker))
            .map(|rule| rule.category)
            .unwrap_or(self.fallback)
    }
}

/// Display order of the groups. Categories missing from the table go last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPriority(Vec<WorkerCategory>);

impl Default for CategoryPriority {
    fn default() -> Self {
        Self(WorkerCategory::ALL.to_vec())
    }
}

impl CategoryPriority {
    pub fn new(order: Vec<WorkerCategory>) -> Self {
        Self(order)
    }

    pub fn rank(&self, category: WorkerCategory) -> usize {
        self.0
            .iter()
            .position(|c| *c == category)
            .unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkerGroup<'a> {
    pub category: WorkerCategory,
    pub workers: Vec<&'a Worker>,
    pub expanded: bool,
}

/// Buckets workers by category, drops empty buckets and sorts by priority.
///
/// Workers keep their input order inside a group; `expanded` mirrors the
/// caller-owned set.
pub fn group_workers<'a>(
    workers: &'a [Worker],
    rules: &CategoryRules,
    priority: &CategoryPriority,
    expanded: &HashSet<WorkerCategory>,
) -> Vec<WorkerGroup<'a>> {
    let mut groups: Vec<WorkerGroup<'a>> = Vec::new();

    for worker in workers {
        let category = rules.classify(worker);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.workers.push(worker),
            None => groups.push(WorkerGroup {
                category,
                workers: vec![worker],
                expanded: expanded.contains(&category),
            }),
        }
    }

    // Stable sort keeps first-seen order among unlisted categories
    groups.sort_by_key(|g| priority.rank(g.category));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn worker(id: i64, role: &str, worker_type: Option<&str>) -> Worker {
        let mut w = Worker::new(format!("W{id}"), "Test", role).with_id(id);
        w.worker_type = worker_type.map(str::to_string);
        w
    }

    #[test_case("Conducteur de travaux", None, WorkerCategory::Conducteurs ; "conducteur")]
    #[test_case("Chef d'équipe", None, WorkerCategory::ChefsEquipe ; "chef")]
    #[test_case("Apprenti maçon", None, WorkerCategory::Apprentis ; "apprenti")]
    #[test_case("Maçon", None, WorkerCategory::Ouvriers ; "fallback")]
    #[test_case("Chef d'équipe", Some("Interim"), WorkerCategory::Interimaires ; "type before role")]
    #[test_case("Électricien", Some("sous-traitant"), WorkerCategory::SousTraitants ; "sous traitant")]
    fn test_default_rules(role: &str, worker_type: Option<&str>, expected: WorkerCategory) {
        let rules = CategoryRules::default();
        assert_eq!(rules.classify(&worker(1, role, worker_type)), expected);
    }

    #[test]
    fn test_groups_drop_empty_and_follow_priority() {
        let workers = vec![
            worker(1, "Maçon", None),
            worker(2, "Chef de chantier", None),
            worker(3, "Coffreur", None),
            worker(4, "Plombier", Some("interim")),
        ];
        let expanded: HashSet<_> = [WorkerCategory::Ouvriers].into_iter().collect();
        let groups = group_workers(
            &workers,
            &CategoryRules::default(),
            &CategoryPriority::default(),
            &expanded,
        );

        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                WorkerCategory::ChefsEquipe,
                WorkerCategory::Ouvriers,
                WorkerCategory::Interimaires
            ]
        );
        let ouvriers: Vec<_> = groups[1].workers.iter().map(|w| w.id).collect();
        assert_eq!(ouvriers, vec![Some(1), Some(3)]);
        assert!(groups[1].expanded);
        assert!(!groups[0].expanded);
    }

    #[test]
    fn test_unlisted_category_sorts_last() {
        let workers = vec![worker(1, "Apprenti", None), worker(2, "Maçon", None)];
        let priority = CategoryPriority::new(vec![WorkerCategory::Ouvriers]);
        let groups = group_workers(
            &workers,
            &CategoryRules::default(),
            &priority,
            &HashSet::new(),
        );
        assert_eq!(groups[0].category, WorkerCategory::Ouvriers);
        assert_eq!(groups[1].category, WorkerCategory::Apprentis);
    }

    #[test]
    fn test_custom_rules_first_match_wins() {
        let rules = CategoryRules::new(
            vec![
                CategoryRule {
                    category: WorkerCategory::Apprentis,
                    matches: |w| w.role.is_empty(),
                },
                CategoryRule {
                    category: WorkerCategory::Conducteurs,
                    matches: |_| true,
                },
            ],
            WorkerCategory::Ouvriers,
        );
        assert_eq!(rules.classify(&worker(1, "", None)), WorkerCategory::Apprentis);
        assert_eq!(rules.classify(&worker(2, "Maçon", None)), WorkerCategory::Conducteurs);
    }
}
