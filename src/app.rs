//! Todo App
//!
//! Top-level component owning the todo store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoListView;
use crate::store::{store_add_todo, store_todos, TodoState, TodoStore};

#[component]
pub fn App() -> impl IntoView {
    // Rehydrate once on startup, then provide to all children
    let store: TodoStore = Store::new(TodoState::load());
    provide_context(store);

    let summary = move || {
        let todos = store_todos(&store);
        let done = todos.iter().filter(|todo| todo.done).count();
        format!("{} items, {} done", todos.len(), done)
    };

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <button class="add-btn" on:click=move |_| store_add_todo(&store)>"Add Todo"</button>

            <TodoListView />

            <p class="item-count">{summary}</p>
        </main>
    }
}
