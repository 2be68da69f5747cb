//! Logout control shared by every dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::AppRoute;
use crate::util::session_store::SessionStore;

/// Clears the stored session and replaces the current entry with `/login`.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let on_click = move |_| {
        store.clear();
        navigate(AppRoute::Login.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <button class="btn btn--logout" type="button" on:click=on_click>
            "Logout"
        </button>
    }
}
