use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Menu, OverviewBoxes, PageCards, RsvpBox};
use crate::content::{countdown_label, days_until, overview_details, page_cards, today, COUPLE};
use crate::context::Page;

/// Countdown refresh period; the label only changes at midnight
const COUNTDOWN_REFRESH_MS: u32 = 60 * 60 * 1000;

#[component]
pub fn HomePage() -> impl IntoView {
    let (days, set_days) = signal(days_until(today()));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(COUNTDOWN_REFRESH_MS).await;
            // Page unmounted
            if set_days.try_set(days_until(today())).is_some() {
                break;
            }
        }
    });

    view! {
        <div class="page home-page">
            <div class="hero">
                <div class="hero-photo"></div>
                <div class="countdown">{move || countdown_label(days.get())}</div>
                <h1 class="hero-title">{format!("Celebrate the wedding of {}!", COUPLE)}</h1>
            </div>

            <section class="overview-details">
                <OverviewBoxes details=overview_details() />
            </section>

            <section class="rsvp">
                <RsvpBox />
            </section>

            <section class="other-pages">
                <h2>"Want to know more? Click one of the sections below!"</h2>
                <PageCards cards=page_cards() />
            </section>

            <section class="our-story">
                <img class="our-story-horizontal" src="/images/our_story_horizontal.webp" alt="Timeline of our relationship - desktop view" />
                <img class="our-story-vertical" src="/images/our_story_vertical.webp" alt="Timeline of our relationship - mobile view" />
            </section>

            <Menu current=Page::Home />
        </div>
    }
}
