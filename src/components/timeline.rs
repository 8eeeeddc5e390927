//! Timeline Component
//!
//! Wedding-day schedule. One event is expanded at a time and the
//! previous / next buttons step through the list.

use leptos::prelude::*;

use crate::models::TimelineEvent;

fn step_prev(index: usize) -> usize {
    index.saturating_sub(1)
}

fn step_next(index: usize, len: usize) -> usize {
    if index + 1 < len { index + 1 } else { index }
}

#[component]
pub fn Timeline(events: Vec<TimelineEvent>) -> impl IntoView {
    let len = events.len();
    let (active, set_active) = signal(0usize);

    view! {
        <div class="timeline">
            <ol class="timeline-list">
                {events.into_iter().enumerate().map(|(index, event)| view! {
                    <li
                        class="timeline-item"
                        class:active=move || active.get() == index
                        class:past=move || index < active.get()
                    >
                        <span class="timeline-bullet">{event.time}</span>
                        <button class="timeline-title" on:click=move |_| set_active.set(index)>
                            {event.title}
                        </button>
                        <Show when=move || active.get() == index>
                            <p class="timeline-description">{event.description}</p>
                        </Show>
                    </li>
                }).collect_view()}
            </ol>
            <div class="timeline-controls">
                <button
                    class="timeline-prev"
                    disabled=move || active.get() == 0
                    on:click=move |_| set_active.update(|i| *i = step_prev(*i))
                >
                    "Previous"
                </button>
                <span class="timeline-position">{move || format!("{} / {}", active.get() + 1, len)}</span>
                <button
                    class="timeline-next"
                    disabled=move || active.get() + 1 >= len
                    on:click=move |_| set_active.update(|i| *i = step_next(*i, len))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_stays_in_bounds() {
        assert_eq!(step_prev(0), 0);
        assert_eq!(step_prev(2), 1);
        assert_eq!(step_next(0, 4), 1);
        assert_eq!(step_next(3, 4), 3);
        assert_eq!(step_next(0, 0), 0);
    }
}
