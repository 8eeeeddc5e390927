//! FAQ Accordion Component
//!
//! Category tabs over a single-open accordion. Answers are inline Markdown;
//! clicks on site links inside an answer are routed in-app.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::content::faq_entries;
use crate::context::{use_app_context, Page};
use crate::markdown::parse_markdown_inline;
use crate::models::FaqCategory;

#[component]
pub fn FaqAccordion() -> impl IntoView {
    let ctx = use_app_context();
    let (active_category, set_active_category) = signal(FaqCategory::General);
    let (open_question, set_open_question) = signal(None::<&'static str>);

    let entries = Memo::new(move |_| faq_entries(active_category.get()));

    let select_category = move |category: FaqCategory| {
        set_active_category.set(category);
        set_open_question.set(None);
    };

    let on_answer_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if let Ok(Some(link)) = target.closest("a[data-internal]") {
            if let Some(href) = link.get_attribute("href") {
                ev.prevent_default();
                ctx.navigate(Page::from_path(&href));
            }
        }
    };

    view! {
        <div class="faq-container">
            <div class="faq-category-tabs" role="tablist">
                {FaqCategory::ORDER.into_iter().map(|category| view! {
                    <button
                        class="faq-category-tab"
                        role="tab"
                        class:active=move || active_category.get() == category
                        on:click=move |_| select_category(category)
                    >
                        {category.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="faq-accordion" on:click=on_answer_click>
                <For
                    each=move || entries.get()
                    key=|entry| entry.question
                    children=move |entry| {
                        let question = entry.question;
                        let is_open = move || open_question.get() == Some(question);
                        let answer_html = parse_markdown_inline(entry.answer);
                        view! {
                            <div class="faq-item" class:open=is_open>
                                <button
                                    class="faq-question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| {
                                        set_open_question.update(|open| {
                                            *open = if *open == Some(question) { None } else { Some(question) };
                                        })
                                    }
                                >
                                    <span>{question}</span>
                                    <span class="faq-chevron">"▾"</span>
                                </button>
                                <Show when=is_open>
                                    <div class="faq-answer" inner_html=answer_html.clone()></div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
