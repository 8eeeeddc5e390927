//! Modal Component
//!
//! Centered dialog over a dimmed overlay. Content is unmounted while closed,
//! so forms inside start fresh each time the modal opens.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] opened: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || opened.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="modal-header">
                        <h2 class="modal-title">{move || title.get()}</h2>
                        <button
                            class="modal-close"
                            aria-label="Close modal"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
