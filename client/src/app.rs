//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session store, the API client and the reactive `AuthState`
//! and provides all three as context. Every route is wrapped in `RouteGate`,
//! which turns the current session into a render or a redirect.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::net::api::{ApiClient, api_base_url};
use crate::pages::{
    admin_dashboard::AdminDashboardPage, login::LoginPage, not_found::NotFoundPage,
    owner_dashboard::OwnerDashboardPage, signup::SignupPage, user_dashboard::UserDashboardPage,
};
use crate::routing::AppRoute;
use crate::state::auth::AuthState;
use crate::util::session_store::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::browser();
    let api = ApiClient::new(api_base_url(), store.clone());
    let auth = RwSignal::new(AuthState::default());

    // Effects only run in the browser, where the stored session is readable.
    let initial = store.clone();
    Effect::new(move || {
        auth.set(AuthState::loaded(initial.get()));
    });

    // Session changes from this tab and from other tabs.
    let subscription = store.subscribe(move |next| {
        auth.try_set(AuthState::loaded(next.clone()));
    });
    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(subscription);
    });

    provide_context(store);
    provide_context(api);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/storerate.css"/>
        <Title text="Store Ratings"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! {
                            <RouteGate route=AppRoute::Root>
                                <p class="route-gate">"Redirecting..."</p>
                            </RouteGate>
                        }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RouteGate route=AppRoute::Login><LoginPage/></RouteGate> }
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| view! { <RouteGate route=AppRoute::Signup><SignupPage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! {
                            <RouteGate route=AppRoute::AdminDashboard><AdminDashboardPage/></RouteGate>
                        }
                    />
                    <Route
                        path=(StaticSegment("owner"), StaticSegment("dashboard"))
                        view=|| view! {
                            <RouteGate route=AppRoute::OwnerDashboard><OwnerDashboardPage/></RouteGate>
                        }
                    />
                    <Route
                        path=(StaticSegment("user"), StaticSegment("dashboard"))
                        view=|| view! {
                            <RouteGate route=AppRoute::UserDashboard><UserDashboardPage/></RouteGate>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
