//! Todo Row Component
//!
//! A single todo with its own edit and delete-confirm modes.

use leptos::html;
use leptos::prelude::*;

use crate::components::OkCancelButtons;
use crate::models::TodoItem;
use crate::row_state::{RowAction, RowEvent, RowState};

/// A single todo row
///
/// Mutations go through the callbacks; the row itself only owns view state.
/// `todo` follows the store, so the row is never rebuilt for a change.
#[component]
pub fn TodoRow(
    id: u64,
    #[prop(into)] todo: Signal<Option<TodoItem>>,
    #[prop(into)] on_toggle: Callback<u64>,
    #[prop(into)] on_save: Callback<(u64, String)>,
    #[prop(into)] on_remove: Callback<u64>,
) -> impl IntoView {
    let done = move || todo.with(|todo| todo.as_ref().is_some_and(|todo| todo.done));
    let text = move || todo.with(|todo| todo.as_ref().map(|todo| todo.text.clone()).unwrap_or_default());

    let (row_state, set_row_state) = signal(RowState::default());
    let (edit_text, set_edit_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let dispatch = move |event: RowEvent| {
        let mut action = None;
        set_row_state.update(|state| action = state.apply(event));
        match action {
            Some(RowAction::SetText(new_text)) => on_save.run((id, new_text)),
            Some(RowAction::Remove) => on_remove.run(id),
            None => {}
        }
    };

    let start_edit = move || {
        set_edit_text.set(todo.with_untracked(|todo| {
            todo.as_ref().map(|todo| todo.text.clone()).unwrap_or_default()
        }));
        dispatch(RowEvent::StartEdit);
    };
    let submit_edit = move || dispatch(RowEvent::SubmitEdit(edit_text.get_untracked()));
    let confirm_edit = move || dispatch(RowEvent::ConfirmEdit(edit_text.get_untracked()));

    // Focus the edit field once it is mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let is_editing = move || row_state.get().is_editing();
    let is_confirming = move || row_state.get().is_confirming_delete();

    view! {
        <div class=move || if done() { "todo-row done" } else { "todo-row" }>
            // Done checkbox
            <input
                type="checkbox"
                class="todo-done"
                prop:checked=done
                on:change=move |_| on_toggle.run(id)
            />

            // Text / edit field
            <div class="todo-text-col">
                <Show
                    when=move || !is_editing()
                    fallback=move || view! {
                        <input
                            type="text"
                            class="todo-edit-input"
                            node_ref=input_ref
                            prop:value=move || edit_text.get()
                            on:input=move |ev| set_edit_text.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                match ev.key().as_str() {
                                    "Enter" => {
                                        ev.prevent_default();
                                        submit_edit();
                                    }
                                    "Escape" => dispatch(RowEvent::CancelEdit),
                                    _ => {}
                                }
                            }
                        />
                    }
                >
                    <span class="todo-text" on:dblclick=move |_| start_edit()>
                        {text}
                    </span>
                </Show>
            </div>

            // Edit button
            <div class="todo-edit-col">
                <Show
                    when=move || !is_editing()
                    fallback=move || view! {
                        <OkCancelButtons
                            on_ok=move |()| confirm_edit()
                            on_cancel=move |()| dispatch(RowEvent::CancelEdit)
                        />
                    }
                >
                    <button class="edit-btn" on:click=move |_| start_edit()>"✎"</button>
                </Show>
            </div>

            // Delete button
            <div class="todo-delete-col">
                <Show
                    when=move || !is_confirming()
                    fallback=move || view! {
                        <span class="delete-confirm">
                            <span class="delete-confirm-text">"Delete?"</span>
                            <OkCancelButtons
                                on_ok=move |()| dispatch(RowEvent::ConfirmDelete)
                                on_cancel=move |()| dispatch(RowEvent::CancelDelete)
                            />
                        </span>
                    }
                >
                    <button class="delete-btn" on:click=move |_| dispatch(RowEvent::StartDelete)>
                        "×"
                    </button>
                </Show>
            </div>
        </div>
    }
}
