//! RSVP Components
//!
//! RSVP button on the home page and the modal form it opens.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FormField, Modal, SubmitMessageBox};
use crate::commands::{self, RsvpArgs, SubmitMessage, RSVP_ERROR_FALLBACK, RSVP_SUCCESS_FALLBACK};
use crate::validation::{Field, FormErrors, RsvpForm};

#[component]
pub fn RsvpBox() -> impl IntoView {
    let (opened, set_opened) = signal(false);
    let close = Callback::new(move |_| set_opened.set(false));

    view! {
        <div class="rsvp-box">
            <button class="rsvp-button" on:click=move |_| set_opened.set(true)>"RSVP"</button>
            <Modal opened=opened title="RSVP" on_close=close>
                <RsvpFormView on_close=close />
            </Modal>
        </div>
    }
}

#[component]
fn RsvpFormView(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let attending = RwSignal::new(None::<bool>);
    let errors = RwSignal::new(FormErrors::new());
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(None::<SubmitMessage>);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(&field).cloned());

    let reset = move || {
        first_name.set(String::new());
        last_name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        attending.set(None);
        errors.set(FormErrors::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = RsvpForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            attending: attending.get_untracked(),
        };
        let found = form.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let Some(args) = RsvpArgs::from_form(&form) else {
                set_loading.set(false);
                return;
            };
            let result = commands::submit_rsvp(&args).await;
            let outcome = SubmitMessage::from_result(result, RSVP_SUCCESS_FALLBACK, RSVP_ERROR_FALLBACK);
            if outcome.is_success() {
                reset();
            }
            set_message.set(Some(outcome));
            set_loading.set(false);
        });
    };

    view! {
        {move || match message.get() {
            Some(msg) => view! { <SubmitMessageBox message=msg on_close=on_close /> }.into_any(),
            None => view! {
                <form class="rsvp-form" on:submit=on_submit novalidate=true>
                    <FormField label="First Name" value=first_name error=error_for(Field::FirstName) required=true autocomplete="given-name" />
                    <FormField label="Last Name" value=last_name error=error_for(Field::LastName) required=true autocomplete="family-name" />
                    <FormField label="Email" value=email error=error_for(Field::Email) autocomplete="email" input_type="email" />
                    <FormField label="Phone Number" value=phone error=error_for(Field::Phone) autocomplete="tel" input_type="tel" />

                    <fieldset class="attending-group" class:has-error=move || errors.get().contains_key(&Field::Attending)>
                        <label class="radio">
                            <input
                                type="radio"
                                name="attending"
                                prop:checked=move || attending.get() == Some(true)
                                on:change=move |_| attending.set(Some(true))
                            />
                            "I will be attending"
                        </label>
                        <label class="radio">
                            <input
                                type="radio"
                                name="attending"
                                prop:checked=move || attending.get() == Some(false)
                                on:change=move |_| attending.set(Some(false))
                            />
                            "I won't be attending"
                        </label>
                        {move || errors.get().get(&Field::Attending).cloned().map(|msg| view! {
                            <span class="form-error">{msg}</span>
                        })}
                    </fieldset>

                    <div class="form-actions">
                        <button type="submit" class="submit-btn" disabled=move || loading.get()>
                            {move || if loading.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </form>
            }.into_any(),
        }}
    }
}
