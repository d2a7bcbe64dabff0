//! Ok/Cancel Buttons Component
//!
//! Inline ✓/✗ pair shared by edit and delete confirmation.

use leptos::prelude::*;

/// Inline confirm/cancel buttons
///
/// # Arguments
/// * `on_ok` - Callback to execute when the user confirms
/// * `on_cancel` - Callback to execute when the user backs out
#[component]
pub fn OkCancelButtons(
    #[prop(into)] on_ok: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="ok-cancel">
            <button
                class="confirm-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_ok.run(());
                }
            >
                "✓"
            </button>
            <button
                class="cancel-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_cancel.run(());
                }
            >
                "✗"
            </button>
        </span>
    }
}
