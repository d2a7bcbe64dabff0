//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// Text given to a freshly added todo
pub const DEFAULT_TODO_TEXT: &str = "New todo";

/// Todo data structure (matches the persisted JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Creation timestamp in milliseconds, unique within the list
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            text: DEFAULT_TODO_TEXT.to_string(),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new(42);
        assert_eq!(item.id, 42);
        assert_eq!(item.text, "New todo");
        assert!(!item.done);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_string(&TodoItem::new(7)).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"New todo","done":false}"#);
    }
}
