//! Static view for unmatched paths.

use leptos::prelude::*;

use crate::routing::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href=AppRoute::Root.path()>"Go home"</a>
        </div>
    }
}
