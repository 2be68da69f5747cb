//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login writes the token and role to the session store and
//! navigates to `/`; the root route then forwards to the role's dashboard.
//! Signup reuses `apply_login` for its follow-up login.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_notice::{FieldError, FormNotice};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{LoginRequest, LoginResponse};
use crate::routing::AppRoute;
use crate::state::form::FormState;
use crate::state::session::Role;
use crate::util::session_store::SessionStore;
use crate::util::validation::check;

/// Shown when a rejected login carries no server message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Request built from the raw form inputs. Email whitespace is not significant.
fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.trim().to_owned(), password: password.to_owned() }
}

/// Persist the session from a login response. Returns the role when the
/// server sent one the client understands.
pub(crate) fn apply_login(store: &SessionStore, response: &LoginResponse) -> Option<Role> {
    store.set(&response.token, &response.user.role);
    let role = store.get().role();
    if role.is_none() {
        log::warn!("login returned unusable role {:?}", response.user.role);
    }
    role
}

fn login_error_message(err: &ApiError) -> String {
    err.user_message(LOGIN_FAILED)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        let request = match check(login_request(&email.get_untracked(), &password.get_untracked())) {
            Ok(request) => request,
            Err(errors) => {
                form.update(|f| f.reject_fields(errors));
                return;
            }
        };
        form.update(|f| {
            f.begin();
        });

        let api = api.clone();
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&request).await {
                Ok(response) => {
                    apply_login(&store, &response);
                    form.try_update(|f| f.busy = false);
                    navigate(AppRoute::Root.path(), NavigateOptions::default());
                }
                Err(err) => {
                    form.try_update(|f| f.fail(login_error_message(&err)));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to rate and manage stores"</p>
                <form class="form" on:submit=on_submit novalidate>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError form=form field="email"/>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError form=form field="password"/>
                    <FormNotice form=form/>
                    <button class="btn btn--primary" type="submit" disabled=move || form.get().busy>
                        {move || if form.get().busy { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
