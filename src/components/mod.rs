//! UI Components
//!
//! Reusable Leptos components.

mod ok_cancel_buttons;
mod todo_row;
mod todo_list_view;

pub use ok_cancel_buttons::OkCancelButtons;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
