//! Local Storage Persistence
//!
//! The whole todo list is stored as one JSON array under [`STORAGE_KEY`].

use std::collections::HashSet;

use thiserror::Error;

use crate::models::TodoItem;

/// Key of the todo list in `window.localStorage`
pub const STORAGE_KEY: &str = "todos";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key {0:?}")]
    Read(&'static str),
    #[error("failed to write key {0:?}")]
    Write(&'static str),
    #[error("failed to encode todos: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode todos: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize the list to its stored JSON form
pub fn encode(todos: &[TodoItem]) -> Result<String, StorageError> {
    serde_json::to_string(todos).map_err(StorageError::Encode)
}

/// Parse a stored JSON array.
///
/// Later entries reusing an id already seen are dropped.
pub fn decode(raw: &str) -> Result<Vec<TodoItem>, StorageError> {
    let todos: Vec<TodoItem> = serde_json::from_str(raw).map_err(StorageError::Decode)?;
    let mut seen = HashSet::new();
    Ok(todos.into_iter().filter(|todo| seen.insert(todo.id)).collect())
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Read the stored list; `Ok(None)` when nothing has been stored yet
pub fn read() -> Result<Option<Vec<TodoItem>>, StorageError> {
    let raw = local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|_| StorageError::Read(STORAGE_KEY))?;
    raw.as_deref().map(decode).transpose()
}

/// Overwrite the stored list
pub fn write(todos: &[TodoItem]) -> Result<(), StorageError> {
    let json = encode(todos)?;
    local_storage()?
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| StorageError::Write(STORAGE_KEY))
}

/// Startup load. Any failure falls back to an empty list.
pub fn load() -> Vec<TodoItem> {
    match read() {
        Ok(Some(todos)) => {
            web_sys::console::log_1(&format!("[STORAGE] Loaded {} todos", todos.len()).into());
            todos
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            web_sys::console::warn_1(&format!("[STORAGE] {}, starting with an empty list", e).into());
            Vec::new()
        }
    }
}

/// Write-through after a mutation. Failures are logged only.
pub fn save(todos: &[TodoItem]) {
    if let Err(e) = write(todos) {
        web_sys::console::error_1(&format!("[STORAGE] {}", e).into());
    }
}
