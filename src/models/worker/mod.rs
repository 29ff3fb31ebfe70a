// Worker module
// People that can be planned on chantiers

use serde::{Deserialize, Serialize};

use super::error::{validate_hex_color, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub color: Option<String>,
    /// Job title, e.g. "Chef d'équipe", "Maçon", "Apprenti"
    pub role: String,
    /// Contract type, e.g. "interim" or "sous-traitant"; `None` for employees
    pub worker_type: Option<String>,
    pub phone: Option<String>,
}

impl Worker {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            color: None,
            role: role.into(),
            worker_type: None,
            phone: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_type(mut self, worker_type: impl Into<String>) -> Self {
        self.worker_type = Some(worker_type.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name().is_empty() {
            return Err(ValidationError::Empty("Worker name"));
        }
        if let Some(ref color) = self.color {
            validate_hex_color(color)?;
        }
        Ok(())
    }
}

/// Row groups of the planning board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerCategory {
    Conducteurs,
    ChefsEquipe,
    Ouvriers,
    Apprentis,
    Interimaires,
    SousTraitants,
}

impl WorkerCategory {
    pub const ALL: [WorkerCategory; 6] = [
        WorkerCategory::Conducteurs,
        WorkerCategory::ChefsEquipe,
        WorkerCategory::Ouvriers,
        WorkerCategory::Apprentis,
        WorkerCategory::Interimaires,
        WorkerCategory::SousTraitants,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkerCategory::Conducteurs => "Conducteurs de travaux",
            WorkerCategory::ChefsEquipe => "Chefs d'équipe",
            WorkerCategory::Ouvriers => "Ouvriers",
            WorkerCategory::Apprentis => "Apprentis",
            WorkerCategory::Interimaires => "Intérimaires",
            WorkerCategory::SousTraitants => "Sous-traitants",
        }
    }
}
