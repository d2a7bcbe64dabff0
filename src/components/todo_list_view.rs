//! Todo List View Component
//!
//! Renders every todo as a row wired to the store helpers.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{
    store_remove_todo, store_set_todo_text, store_todo_signal, store_todos, store_toggle_todo,
    use_todo_store,
};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_todo_store();

    let on_toggle = Callback::new(move |id: u64| store_toggle_todo(&store, id));
    let on_save = Callback::new(move |(id, text): (u64, String)| store_set_todo_text(&store, id, &text));
    let on_remove = Callback::new(move |id: u64| store_remove_todo(&store, id));

    view! {
        <div class="todo-list">
            <For
                each=move || store_todos(&store)
                // Keyed by id only, so a row keeps its view state across edits and toggles
                key=|todo| todo.id
                children=move |todo| {
                    view! {
                        <TodoRow
                            id=todo.id
                            todo=store_todo_signal(store, todo.id)
                            on_toggle=on_toggle
                            on_save=on_save
                            on_remove=on_remove
                        />
                    }
                }
            />
            <Show when=move || store_todos(&store).is_empty()>
                <p class="empty-hint">"Nothing to do. Add a todo to get started."</p>
            </Show>
        </div>
    }
}
