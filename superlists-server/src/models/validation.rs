//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing, empty or only whitespace
    Empty { field: &'static str },
}

impl ValidationError {
    /// Message shown to the visitor next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Empty { field: "item text" } => "You can't have an empty list item",
            Self::Empty { .. } => "This field is required",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}
