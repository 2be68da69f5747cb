//! Normal user dashboard: store search and per-store rating.
//!
//! Each store's rating buttons are disabled while that store's submission is
//! in flight. A successful rating re-fetches the list with the last submitted
//! search so the caller's rating shows the server's view.

use leptos::prelude::*;

use super::load::{list_status, load_into};
use crate::components::account_header::AccountHeader;
use crate::components::form_notice::FormNotice;
use crate::components::stars::{RatingPicker, Stars};
use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::{RateRequest, StoreFilters, UserStore};
use crate::state::form::FormState;
use crate::state::loadable::Loadable;
use crate::state::ratings::RatingSubmission;
use crate::state::search::AppliedFilters;
use crate::util::validation::check;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let stores = RwSignal::new(Loadable::<Vec<UserStore>>::default());
    let submissions = RwSignal::new(RatingSubmission::default());
    let form = RwSignal::new(FormState::default());
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let applied = RwSignal::new(AppliedFilters::<StoreFilters>::default());

    let fetch_api = api.clone();
    let fetch = move || {
        let filters = applied.with_untracked(AppliedFilters::current);
        let api = fetch_api.clone();
        load_into(stores, "Failed to fetch stores", async move {
            api.stores(&filters).await.map(|resp| resp.stores)
        });
    };

    Effect::new(fetch.clone());

    let fetch_on_search = fetch.clone();
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        applied.update(|a| {
            a.submit(StoreFilters { name: name.get_untracked(), address: address.get_untracked() });
        });
        fetch_on_search();
    };

    let on_rate = Callback::new(move |(store_id, rating): (i64, u8)| {
        let Ok(request) = check(RateRequest { rating }) else {
            return;
        };
        if !submissions.try_update(|s| s.begin(store_id)).unwrap_or(false) {
            return;
        }
        form.update(|f| f.notice = None);
        let api = api.clone();
        let fetch = fetch.clone();
        leptos::task::spawn_local(async move {
            match api.rate_store(store_id, request).await {
                Ok(()) => fetch(),
                Err(err) => {
                    form.try_update(|f| f.fail(err.user_message("Failed to submit rating")));
                }
            }
            submissions.try_update(|s| s.finish(store_id));
        });
    });

    let rows = move || {
        stores.with(|state| {
            state
                .items()
                .iter()
                .map(|store| {
                    let store_id = store.id;
                    view! {
                        <tr>
                            <td>{store.name.clone()}</td>
                            <td>{store.address.clone()}</td>
                            <td>
                                {match store.user_rating {
                                    Some(value) => view! { <Stars filled=value/> }.into_any(),
                                    None => view! { <span class="muted">"Not rated"</span> }.into_any(),
                                }}
                            </td>
                            <td>
                                <RatingPicker
                                    store_id=store_id
                                    current=store.user_rating
                                    disabled=Signal::derive(move || submissions.with(|s| s.is_pending(store_id)))
                                    on_rate=on_rate
                                />
                            </td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="dashboard dashboard--user">
            <AccountHeader title="Browse Stores" subtitle="Find stores and share your rating"/>
            <form class="filters" on:submit=on_search>
                <TextField label="Store Name" field="name" value=name form=form placeholder="Search by Name"/>
                <TextField label="Address" field="address" value=address form=form placeholder="Search by Address"/>
                <button class="btn" type="submit" disabled=move || stores.with(|s| s.loading)>
                    "Search"
                </button>
            </form>
            <FormNotice form=form/>
            {move || stores.with(|state| list_status(state, "No stores found.")).map(|text| view! { <p class="panel__status">{text}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Store Name"</th>
                        <th>"Address"</th>
                        <th>"Your Rating"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
