//! Factor entity - an evaluation criterion, rendered as a row.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FactorId, ValidationError, Weight};

/// An evaluation criterion that alternatives are scored against.
///
/// The id is stable for the lifetime of the entity; label and weight are
/// freely editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    id: FactorId,
    label: String,
    weight: Weight,
}

impl Factor {
    /// Creates a new Factor with a freshly minted id.
    pub fn new(label: impl Into<String>, weight: Weight) -> Result<Self, ValidationError> {
        Self::with_id(FactorId::generate(), label, weight)
    }

    /// Creates a Factor with a host-supplied id.
    pub fn with_id(
        id: FactorId,
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
    pub fn id(&self) -> &FactorId {
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
        let a = Factor::new("Cost", Weight::ONE).unwrap();
        let b = Factor::new("Commute", Weight::ONE).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn with_id_keeps_supplied_id() {
        let id = FactorId::new("cost").unwrap();
        let factor = Factor::with_id(id.clone(), "Cost", Weight::ONE).unwrap();
        assert_eq!(factor.id(), &id);
    }

    #[test]
    fn new_rejects_blank_label() {
        assert!(Factor::new("", Weight::ONE).is_err());
    }

    #[test]
    fn rename_and_set_weight_update_entity() {
        let mut factor = Factor::new("Cost", Weight::ONE).unwrap();
        factor.rename("Monthly cost").unwrap();
        factor.set_weight(Weight::from_importance(5));
        assert_eq!(factor.label(), "Monthly cost");
        assert_eq!(factor.weight().value(), 2.0);
    }
}
