//! Alternative entity - a candidate choice, rendered as a column.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, ValidationError, Weight};

/// A candidate choice under evaluation.
///
/// The id is stable for the lifetime of the entity; label and weight are
/// freely editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    id: AlternativeId,
    label: String,
    weight: Weight,
}

impl Alternative {
    /// Creates a new Alternative with a freshly minted id.
    pub fn new(label: impl Into<String>, weight: Weight) -> Result<Self, ValidationError> {
        Self::with_id(AlternativeId::generate(), label, weight)
    }

    /// Creates an Alternative with a host-supplied id.
    pub fn with_id(
        id: AlternativeId,
        label: impl Into<String>,
        weight: Weight,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self { id, label, weight })
    }

    /// Returns the stable id.
    pub fn id(&self) -> &AlternativeId {
        &self.id
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the current weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Changes the display label, rejecting empty input.
    pub fn rename(&mut self, label: impl Into<String>) -> Result<(), ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        self.label = label;
        Ok(())
    }

    /// Replaces the weight.
    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mints_unique_ids() {
        let a = Alternative::new("Apartment A", Weight::ONE).unwrap();
        let b = Alternative::new("Apartment B", Weight::ONE).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_id_keeps_supplied_id() {
        let id = AlternativeId::new("alt-7").unwrap();
        let alt = Alternative::with_id(id.clone(), "Apartment", Weight::ONE).unwrap();
        assert_eq!(alt.id(), &id);
    }

    #[test]
    fn new_rejects_blank_label() {
        assert!(Alternative::new("", Weight::ONE).is_err());
        assert!(Alternative::new("   ", Weight::ONE).is_err());
    }

    #[test]
    fn rename_updates_label() {
        let mut alt = Alternative::new("Old name", Weight::ONE).unwrap();
        alt.rename("New name").unwrap();
        assert_eq!(alt.label(), "New name");
    }

    #[test]
    fn rename_rejects_blank_label() {
        let mut alt = Alternative::new("Keep me", Weight::ONE).unwrap();
        assert!(alt.rename("").is_err());
        assert_eq!(alt.label(), "Keep me");
    }

    #[test]
    fn set_weight_replaces_weight() {
        let mut alt = Alternative::new("Apartment", Weight::ONE).unwrap();
        alt.set_weight(Weight::new(1.75));
        assert_eq!(alt.weight().value(), 1.75);
    }
}
