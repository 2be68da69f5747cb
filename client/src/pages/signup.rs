//! Signup page.
//!
//! Signup is followed by a login with the same credentials so the new
//! account lands on its dashboard without retyping anything.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::login::apply_login;
use crate::components::form_notice::FormNotice;
use crate::components::role_select::RoleSelect;
use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::SignupRequest;
use crate::routing::AppRoute;
use crate::state::form::FormState;
use crate::state::session::Role;
use crate::util::session_store::SessionStore;
use crate::util::validation::check;

pub const SIGNUP_FAILED: &str = "Signup failed";
/// The account exists but the automatic login did not go through.
pub const SIGNUP_LOGIN_FAILED: &str = "Account created. Please log in with your new credentials.";

/// Raw signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupDraft {
    name: String,
    email: String,
    password: String,
    address: String,
    role: Option<Role>,
}

impl SignupDraft {
    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            address: self.address.trim().to_owned(),
            role: self.role.unwrap_or(Role::User),
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let form = RwSignal::new(FormState::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let role = RwSignal::new(Some(Role::User));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        let draft = SignupDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            address: address.get_untracked(),
            role: role.get_untracked(),
        };
        let request = match check(draft.to_request()) {
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
            if let Err(err) = api.signup(&request).await {
                form.try_update(|f| f.fail(err.user_message(SIGNUP_FAILED)));
                return;
            }
            match api.login(&request.credentials()).await {
                Ok(response) => {
                    apply_login(&store, &response);
                    form.try_update(|f| f.busy = false);
                    navigate(AppRoute::Root.path(), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("login after signup failed: {err}");
                    form.try_update(|f| f.succeed(SIGNUP_LOGIN_FAILED));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join to rate your favourite stores"</p>
                <form class="form" on:submit=on_submit novalidate>
                    <TextField label="Full Name" field="name" value=name form=form/>
                    <TextField label="Email" field="email" value=email form=form kind="email"/>
                    <TextField label="Password" field="password" value=password form=form kind="password"/>
                    <TextField label="Address" field="address" value=address form=form/>
                    <label class="form__label">
                        "Role"
                        <RoleSelect role=role/>
                    </label>
                    <FormNotice form=form/>
                    <button class="btn btn--primary" type="submit" disabled=move || form.get().busy>
                        {move || if form.get().busy { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=AppRoute::Login.path()>"Login"</a>
                </p>
            </div>
        </div>
    }
}
