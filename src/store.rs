//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every helper
//! swaps in a replacement list and writes it through to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::TodoItem;
use crate::storage;
use crate::todo_list;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All todos, in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoState {
    /// Rehydrate from local storage
    pub fn load() -> Self {
        Self { todos: storage::load() }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tracked snapshot of the list, for views
pub fn store_todos(store: &TodoStore) -> Vec<TodoItem> {
    store.todos().get()
}

/// Tracked view of one todo by ID; `None` once it has been removed
pub fn store_todo_signal(store: TodoStore, id: u64) -> Signal<Option<TodoItem>> {
    Signal::derive(move || todo_list::find(&store.todos().read(), id).cloned())
}

fn commit(store: &TodoStore, next: Vec<TodoItem>) {
    storage::save(&next);
    *store.todos().write() = next;
}

/// Append a new default todo
pub fn store_add_todo(store: &TodoStore) {
    let now = js_sys::Date::now() as u64;
    let next = todo_list::add(&store.todos().get_untracked(), now);
    web_sys::console::log_1(&format!("[STORE] Added todo, {} total", next.len()).into());
    commit(store, next);
}

/// Remove a todo by ID
pub fn store_remove_todo(store: &TodoStore, id: u64) {
    let next = todo_list::remove(&store.todos().get_untracked(), id);
    commit(store, next);
}

/// Flip a todo's done flag by ID
pub fn store_toggle_todo(store: &TodoStore, id: u64) {
    let next = todo_list::toggle_done(&store.todos().get_untracked(), id);
    commit(store, next);
}

/// Replace a todo's text by ID; blank text is ignored
pub fn store_set_todo_text(store: &TodoStore, id: u64, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let next = todo_list::set_text(&store.todos().get_untracked(), id, text);
    commit(store, next);
}
