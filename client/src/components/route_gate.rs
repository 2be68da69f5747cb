//! Route guard wrapping every routed view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate evaluates `routing::resolve` against the reactive `AuthState`.
//! It re-runs whenever the session changes, including changes made in other
//! tabs, so an open dashboard falls back to the login redirect on logout.
//! Nothing is decided while the auth state is still loading.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routing::{AppRoute, RouteDecision, resolve};
use crate::state::auth::AuthState;

/// Renders `children` only when `route` resolves to `Render` for the current
/// session; otherwise replaces the history entry with the redirect target.
#[component]
pub fn RouteGate(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let state = auth.get();
        (!state.loading).then(|| resolve(route, &state.session))
    });

    Effect::new(move || {
        if let Some(RouteDecision::Redirect(target)) = decision.get() {
            log::debug!("redirect {} -> {}", route.path(), target.path());
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || matches!(decision.get(), Some(RouteDecision::Render(_)))
            fallback=move || {
                view! { <p class="route-gate">{move || gate_status(decision.get())}</p> }
            }
        >
            {children()}
        </Show>
    }
}

fn gate_status(decision: Option<RouteDecision>) -> &'static str {
    match decision {
        None => "Loading...",
        Some(_) => "Redirecting...",
    }
}
