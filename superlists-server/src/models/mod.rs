//! Domain models with validation at construction
//!
//! User input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod item;
pub mod list;
pub mod validation;

pub use item::{Item, ItemText};
pub use list::{ListId, TodoList};
pub use validation::ValidationError;
