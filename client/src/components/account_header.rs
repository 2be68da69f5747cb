//! Header for the owner and user dashboards.

use leptos::prelude::*;

use super::form_notice::NoticeLine;
use super::logout_button::LogoutButton;
use super::password_dialog::PasswordDialog;
use crate::state::auth::AuthState;
use crate::state::form::Notice;

/// Title bar with the change-password and logout actions.
#[component]
pub fn AccountHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let show_password = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let role_label = move || auth.get().role().map(|role| role.label()).unwrap_or_default();

    let on_change_password = move |_| {
        notice.set(None);
        show_password.set(true);
    };

    view! {
        <header class="account-header">
            <div class="account-header__title">
                <h1>{title}</h1>
                <p class="account-header__subtitle">{subtitle}</p>
            </div>
            <div class="account-header__actions">
                <span class="account-header__role">{role_label}</span>
                <button class="btn" type="button" on:click=on_change_password>
                    "Change Password"
                </button>
                <LogoutButton/>
            </div>
        </header>
        {move || notice.get().map(|notice| view! { <NoticeLine notice=notice/> })}
        <Show when=move || show_password.get()>
            <PasswordDialog open=show_password notice=notice/>
        </Show>
    }
}
