//! Submit Message Component
//!
//! Success / error box shown in place of a form after submission.

use leptos::prelude::*;

use crate::commands::SubmitMessage;

#[component]
pub fn SubmitMessageBox(message: SubmitMessage, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let success = message.is_success();
    let (icon, heading) = if success { ("✓", "You're All Set!") } else { ("✗", "Oops!") };

    view! {
        <div class="submit-message" class:success=success class:error=!success>
            <div class="submit-message-icon">{icon}</div>
            <p class="submit-message-title">{heading}</p>
            <p class="submit-message-text">{message.text().to_string()}</p>
            <button class="outline-btn" on:click=move |_| on_close.run(())>"Close"</button>
        </div>
    }
}
