use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A catalog listing. `id` is assigned by the store, never by clients.
/// `promotion` keeps the source convention: empty string means "none",
/// and the field may be omitted in the seed document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
    #[serde(default)]
    pub promotion: String,
}

impl Service {
    pub fn from_draft(id: u64, draft: ServiceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            icon: draft.icon,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            promotion: draft.promotion,
        }
    }

    /// Active promotion text, mapping the empty-string sentinel to `None`.
    pub fn promotion(&self) -> Option<&str> {
        let p = self.promotion.trim();
        if p.is_empty() {
            None
        } else {
            Some(p)
        }
    }
}

/// Input model for create/update: every `Service` field except the id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub price: u64,
    pub stock: u64,
    #[serde(default)]
    pub promotion: String,
}

impl ServiceDraft {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name required".into()));
        }
        if self.icon.trim().is_empty() {
            return Err(ModelError::Validation("icon required".into()));
        }
        Ok(())
    }
}
