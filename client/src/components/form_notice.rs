//! Inline form messages.

use leptos::prelude::*;

use crate::state::form::{FormState, Notice};

/// Success or error line rendered under a form.
#[component]
pub fn NoticeLine(notice: Notice) -> impl IntoView {
    let class = notice.css_class();
    view! { <p class=class role="status">{notice.text}</p> }
}

/// The form's current notice, if any.
#[component]
pub fn FormNotice(form: RwSignal<FormState>) -> impl IntoView {
    move || form.get().notice.map(|notice| view! { <NoticeLine notice=notice/> })
}

/// First validation message for `field`, shown next to its input.
#[component]
pub fn FieldError(form: RwSignal<FormState>, field: &'static str) -> impl IntoView {
    move || {
        form.get()
            .field_error(field)
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}
