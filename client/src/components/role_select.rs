//! Role dropdown used by signup and the admin forms.

use leptos::prelude::*;

use crate::state::session::Role;

/// Select bound to `role`. With `any_label`, an extra first option maps to
/// `None` (no filter).
#[component]
pub fn RoleSelect(
    role: RwSignal<Option<Role>>,
    #[prop(optional)] any_label: Option<&'static str>,
) -> impl IntoView {
    let options = Role::ALL
        .into_iter()
        .map(|option| {
            view! {
                <option value=option.as_str() selected=move || role.get() == Some(option)>
                    {option.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <select
            class="form__input"
            on:change=move |ev| role.set(Role::parse(&event_target_value(&ev)))
        >
            {any_label.map(|label| view! { <option value="" selected=move || role.get().is_none()>{label}</option> })}
            {options}
        </select>
    }
}
