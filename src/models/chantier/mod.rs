// Chantier module
// Construction sites that workers are assigned to

use super::error::{validate_hex_color, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chantier {
    pub id: Option<i64>,
    pub name: String,
    pub color: Option<String>,
    pub address: Option<String>,
}

impl Chantier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
            address: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("Chantier name"));
        }
        if let Some(ref color) = self.color {
            validate_hex_color(color)?;
        }
        Ok(())
    }
}
