//! Fetch glue between `ApiClient` futures and `Loadable` signals.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::loadable::Loadable;

/// Run `request` and store its outcome in `target`, with `fallback` as the
/// error text when the server gives none. Superseded or disposed targets
/// ignore the result.
pub(crate) fn load_into<T, F>(target: RwSignal<Loadable<T>>, fallback: &'static str, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let Some(ticket) = target.try_update(Loadable::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = request.await.map_err(|err| err.user_message(fallback));
        target.try_update(|state| state.finish(ticket, result));
    });
}

/// Loading / error / empty line shown in place of a list.
pub(crate) fn list_status<T>(state: &Loadable<Vec<T>>, empty: &'static str) -> Option<String> {
    if let Some(error) = &state.error {
        return Some(error.clone());
    }
    if state.loading && state.data.is_none() {
        return Some("Loading...".to_owned());
    }
    state.is_empty().then(|| empty.to_owned())
}
