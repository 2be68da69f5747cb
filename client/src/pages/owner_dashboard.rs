//! Store owner dashboard: the owner's stores, their averages, and who rated
//! them.

use leptos::prelude::*;

use super::load::{list_status, load_into};
use crate::components::account_header::AccountHeader;
use crate::components::stars::Stars;
use crate::net::api::ApiClient;
use crate::net::types::{OwnerStore, StoreRater};
use crate::state::loadable::Loadable;
use crate::util::format::{format_average, initial, score_fraction, star_count};

#[component]
pub fn OwnerDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let stores = RwSignal::new(Loadable::<Vec<OwnerStore>>::default());

    Effect::new(move || {
        let api = api.clone();
        load_into(stores, "Failed to load dashboard", async move {
            api.owner_dashboard().await.map(|resp| resp.stores)
        });
    });

    let cards = move || {
        stores.with(|state| {
            state
                .items()
                .iter()
                .cloned()
                .map(|store| view! { <OwnerStoreCard store=store/> })
                .collect_view()
        })
    };

    view! {
        <div class="dashboard dashboard--owner">
            <AccountHeader title="Store Owner Dashboard" subtitle="See how customers rate your stores"/>
            {move || stores.with(|state| list_status(state, "No Stores Found")).map(|text| view! { <p class="panel__status">{text}</p> })}
            <div class="store-cards">{cards}</div>
        </div>
    }
}

#[component]
fn OwnerStoreCard(store: OwnerStore) -> impl IntoView {
    let raters = if store.ratings.is_empty() {
        view! { <p class="store-card__empty">"No ratings submitted yet."</p> }.into_any()
    } else {
        let rows = store.ratings.into_iter().map(|rater| view! { <RaterRow rater=rater/> }).collect_view();
        view! { <ul class="rater-list">{rows}</ul> }.into_any()
    };

    view! {
        <article class="store-card">
            <header class="store-card__header">
                <h2>{store.name}</h2>
                <p class="store-card__address">{store.address}</p>
            </header>
            <div class="store-card__average">
                <Stars filled=star_count(store.avg_rating)/>
                <span>{format_average(store.avg_rating)}</span>
            </div>
            <h3>"Customer Ratings"</h3>
            {raters}
        </article>
    }
}

#[component]
fn RaterRow(rater: StoreRater) -> impl IntoView {
    view! {
        <li class="rater-list__row">
            <span class="rater-list__avatar">{initial(&rater.user_name)}</span>
            <span class="rater-list__name">{rater.user_name}</span>
            <span class="rater-list__email">{rater.user_email}</span>
            <Stars filled=rater.rating_value/>
            <span class="rater-list__score">{score_fraction(rater.rating_value)}</span>
        </li>
    }
}
