//! Error types for the wizard and category parsing.

use thiserror::Error;

use crate::wizard::{WizardAction, WizardStep};

/// A category name that matches none of the allowed values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

/// Raw text that cannot become a value for a form field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Choice(#[from] ParseChoiceError),

    #[error("field '{field}' expects a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("cannot {action} from {from}")]
    InvalidTransition {
        from: WizardStep,
        action: WizardAction,
    },

    #[error("field '{field}' is edited on the {expected} step, not on {current}")]
    FieldNotOnStep {
        field: &'static str,
        expected: WizardStep,
        current: WizardStep,
    },

    #[error("field '{field}' must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}
