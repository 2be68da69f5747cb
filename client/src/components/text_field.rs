//! Labelled input bound to a string signal, with its validation message.

use leptos::prelude::*;

use super::form_notice::FieldError;
use crate::state::form::FormState;

#[component]
pub fn TextField(
    label: &'static str,
    /// Validation field name the error line is looked up by.
    field: &'static str,
    value: RwSignal<String>,
    form: RwSignal<FormState>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type=kind
                name=field
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
        <FieldError form=form field=field/>
    }
}
