//! Form Field Component
//!
//! Labelled text input with an inline error line.

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="form-field" class:has-error=move || error.get().is_some()>
            <span class="form-label">
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </span>
            <input
                type=input_type
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
        </label>
    }
}
