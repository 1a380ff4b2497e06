//! Delete Confirm Button Component
//!
//! Trash button that asks "„name“ löschen?" before running `on_confirm`.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// Shown in the confirmation prompt
    #[prop(into)] name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = format!("„{}“ löschen?", name);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }>"✓"</button>
                    <button class="cancel-btn" on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class="delete-btn" title="Löschen" on:click=move |ev| {
                    ev.stop_propagation();
                    set_asking.set(true);
                }>"🗑"</button>
            }
            .into_any()
        }
    }
}
