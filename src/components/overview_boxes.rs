//! Overview Detail Boxes Component
//!
//! When / Where / Attire summary on the home page.

use leptos::prelude::*;

use crate::models::OverviewDetail;

#[component]
pub fn OverviewBoxes(details: Vec<OverviewDetail>) -> impl IntoView {
    view! {
        <div class="overview-boxes">
            {details.into_iter().map(|detail| view! {
                <div class="overview-box" data-kind=detail.label.to_lowercase()>
                    <p class="overview-label">{detail.label.to_uppercase()}</p>
                    <p class="overview-details">{detail.details}</p>
                    {detail.sub_details.map(|sub| view! { <p class="overview-sub-details">{sub}</p> })}
                </div>
            }).collect_view()}
        </div>
    }
}
