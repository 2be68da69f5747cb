//! Star rating display and picker.

use leptos::prelude::*;

use crate::util::format::{MAX_STARS, rate_label, score_fraction, star_string};

/// Read-only row of five stars with `filled` of them solid.
#[component]
pub fn Stars(filled: u8) -> impl IntoView {
    view! {
        <span class="stars" title=score_fraction(filled)>
            {star_string(filled)}
        </span>
    }
}

/// One button per rating value. The caller's own rating is highlighted and
/// every button is disabled while `disabled` is true.
#[component]
pub fn RatingPicker(
    store_id: i64,
    current: Option<u8>,
    #[prop(into)] disabled: Signal<bool>,
    on_rate: Callback<(i64, u8)>,
) -> impl IntoView {
    let buttons = (1..=MAX_STARS)
        .map(|value| {
            let label = rate_label(value);
            view! {
                <button
                    type="button"
                    class="rating-picker__button"
                    class:rating-picker__button--active={current == Some(value)}
                    title=label.clone()
                    aria-label=label
                    disabled=move || disabled.get()
                    on:click=move |_| on_rate.run((store_id, value))
                >
                    {value}
                </button>
            }
        })
        .collect_view();

    view! { <div class="rating-picker">{buttons}</div> }
}
