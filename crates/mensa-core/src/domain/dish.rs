//! Dish Entity
//!
//! A cafeteria menu item. Field names on the wire match the records already
//! sitting in device stores (`task` for the label, `art` for the category).

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::record_id::RecordId;

/// A menu item managed by administrators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique identifier
    pub id: RecordId,
    /// Display name
    #[serde(rename = "task")]
    pub label: String,
    /// Price as entered, not parsed
    pub price: String,
    /// Category, e.g. "Hauptgericht"
    #[serde(rename = "art", default)]
    pub category: String,
    /// Unused by the screens, kept for stored data
    #[serde(default)]
    pub completed: bool,
}

impl Entity for Dish {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Dish {
    /// Build a dish from an already validated draft
    pub fn new(id: RecordId, draft: DishDraft) -> Self {
        Self {
            id,
            label: draft.label,
            price: draft.price,
            category: draft.category,
            completed: false,
        }
    }
}

/// Form input for a new dish
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    pub label: String,
    pub price: String,
    pub category: String,
}

impl DishDraft {
    pub fn new(label: impl Into<String>, price: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    /// Trim all fields and reject a missing label or price.
    pub fn validate(self) -> DomainResult<Self> {
        let draft = Self {
            label: self.label.trim().to_string(),
            price: self.price.trim().to_string(),
            category: self.category.trim().to_string(),
        };

        if draft.label.is_empty() {
            return Err(DomainError::InvalidInput("Please enter a name for the dish".into()));
        }
        if draft.price.is_empty() {
            return Err(DomainError::InvalidInput("Please enter a price for the dish".into()));
        }
        Ok(draft)
    }
}
