//! Gift Form Component
//!
//! Modal form a guest fills in after buying (or contributing to) a registry item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{FormField, SubmitMessageBox};
use crate::commands::{self, GiftArgs, SubmitMessage, GIFT_ERROR_FALLBACK, GIFT_SUCCESS_FALLBACK};
use crate::models::RegistryItem;
use crate::registry::indefinite_article;
use crate::validation::{Field, FormErrors, GiftForm};

#[component]
pub fn GiftFormView(
    item: RegistryItem,
    /// Units still needed, None for unlimited items
    #[prop(into)]
    remaining: Signal<Option<u32>>,
    /// Called with the quantity once the server accepted the gift
    #[prop(into)]
    on_gift: Callback<u32>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let quantity = RwSignal::new(1u32);
    let errors = RwSignal::new(FormErrors::new());
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(None::<SubmitMessage>);

    let is_special_fund = item.is_special_fund;
    let label = StoredValue::new(item.label.clone());
    let item = StoredValue::new(item);

    let error_for = move |field: Field| Signal::derive(move || errors.get().get(&field).cloned());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = GiftForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            quantity: quantity.get_untracked(),
        };
        let found = form.validate(remaining.get_untracked(), is_special_fund);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let item = item.get_value();
            let args = GiftArgs::new(&form, &item);
            let result = commands::record_gift(&args).await;
            let outcome = SubmitMessage::from_result(result, GIFT_SUCCESS_FALLBACK, GIFT_ERROR_FALLBACK);
            if outcome.is_success() {
                on_gift.run(args.quantity);
            }
            set_message.set(Some(outcome));
            set_loading.set(false);
        });
    };

    let intro = move || {
        let label = label.get_value();
        if is_special_fund {
            view! {
                <p class="gift-intro">
                    "Thank you for contributing to our " <strong>{label}</strong>
                    "! Please let us know who to thank!"
                </p>
            }
            .into_any()
        } else {
            view! {
                <p class="gift-intro">
                    {format!("Thank you for gifting us {} ", indefinite_article(&label))}
                    <strong>{label.clone()}</strong>
                    "! Please let us know who to thank!"
                </p>
            }
            .into_any()
        }
    };

    view! {
        {move || match message.get() {
            Some(msg) => view! { <SubmitMessageBox message=msg on_close=on_close /> }.into_any(),
            None => view! {
                <form class="gift-form" on:submit=on_submit novalidate=true>
                    {intro()}
                    <div class="form-row">
                        <FormField label="First Name" value=first_name error=error_for(Field::FirstName) required=true autocomplete="given-name" />
                        <FormField label="Last Name" value=last_name error=error_for(Field::LastName) required=true autocomplete="family-name" />
                    </div>
                    <FormField label="Email (optional)" value=email error=error_for(Field::Email) autocomplete="email" input_type="email" />

                    {(!is_special_fund).then(|| view! {
                        <label class="form-field" class:has-error=move || errors.get().contains_key(&Field::Quantity)>
                            <span class="form-label">"Quantity purchased"</span>
                            <input
                                type="number"
                                min="1"
                                step="1"
                                max=move || remaining.get().map(|r| r.to_string())
                                prop:value=move || quantity.get().to_string()
                                on:input=move |ev| {
                                    quantity.set(event_target_value(&ev).trim().parse().unwrap_or(0));
                                }
                            />
                            {move || errors.get().get(&Field::Quantity).cloned().map(|msg| view! {
                                <span class="form-error">{msg}</span>
                            })}
                        </label>
                    })}

                    <button type="submit" class="submit-btn" disabled=move || loading.get()>
                        {move || if loading.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </form>
            }.into_any(),
        }}
    }
}
