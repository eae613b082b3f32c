//! To-do list identity

use std::fmt;
use std::str::FromStr;

use sqlx::FromRow;

/// Server-generated list identifier.
///
/// Backed by the database's auto-increment key, so identifiers are
/// unique and never handed out twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, sqlx::Type)]
#[sqlx(transparent)]
pub struct ListId(i64);

impl ListId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Canonical URL of the list page, e.g. `/lists/1/`.
    pub fn url(self) -> String {
        format!("/lists/{}/", self.0)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// List record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TodoList {
    pub id: ListId,
}

impl TodoList {
    pub fn url(&self) -> String {
        self.id.url()
    }
}
