//! To-do item text and records

use sqlx::FromRow;

use super::{ListId, ValidationError};

/// Validated item text
///
/// The text is stored verbatim: no trimming, no truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText(String);

impl ItemText {
    /// Create item text.
    ///
    /// # Rules
    /// - Must contain at least one non-whitespace character
    /// - No maximum length
    ///
    /// # Example
    /// ```
    /// use superlists_server::models::ItemText;
    ///
    /// assert!(ItemText::new("Buy peacock feathers").is_ok());
    /// assert!(ItemText::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field: "item text" });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ItemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub text: String,
    pub list_id: ListId,
}
