//! Admin dashboard: platform totals, user and store listings, and the
//! add-user form, each on its own tab.

use leptos::prelude::*;

use super::load::{list_status, load_into};
use crate::components::form_notice::FormNotice;
use crate::components::logout_button::LogoutButton;
use crate::components::role_select::RoleSelect;
use crate::components::text_field::TextField;
use crate::net::api::ApiClient;
use crate::net::types::{AdminStats, AdminStore, AdminUser, NewUserRequest, UserFilters};
use crate::state::admin::AdminTab;
use crate::state::form::FormState;
use crate::state::loadable::Loadable;
use crate::state::session::Role;
use crate::util::format::{format_average, owner_rating_cell, role_label};
use crate::util::validation::check;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|item| {
            view! {
                <button
                    type="button"
                    class="tabs__tab"
                    class:tabs__tab--active=move || tab.get() == item
                    on:click=move |_| tab.set(item)
                >
                    {item.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard dashboard--admin">
            <header class="dashboard__header">
                <h1>"Admin Dashboard"</h1>
                <LogoutButton/>
            </header>
            <nav class="tabs">{tabs}</nav>
            <section class="dashboard__panel">
                {move || match tab.get() {
                    AdminTab::Stats => view! { <StatsPanel/> }.into_any(),
                    AdminTab::Users => view! { <UsersPanel/> }.into_any(),
                    AdminTab::Stores => view! { <StoresPanel/> }.into_any(),
                    AdminTab::AddUser => view! { <AddUserPanel/> }.into_any(),
                }}
            </section>
        </div>
    }
}

// =============================================================================
// STATS
// =============================================================================

#[component]
fn StatsPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let stats = RwSignal::new(Loadable::<AdminStats>::default());

    Effect::new(move || {
        let api = api.clone();
        load_into(stats, "Failed to load stats", async move { api.admin_stats().await });
    });

    move || {
        let state = stats.get();
        if let Some(error) = state.error {
            return view! { <p class="panel__error">{error}</p> }.into_any();
        }
        match state.data {
            Some(data) => view! {
                <div class="stat-grid">
                    <StatCard label="Total Users" value=data.total_users/>
                    <StatCard label="Total Stores" value=data.total_stores/>
                    <StatCard label="Total Ratings" value=data.total_ratings/>
                </div>
            }
            .into_any(),
            None => view! { <p class="panel__status">"Loading..."</p> }.into_any(),
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}

// =============================================================================
// USERS
// =============================================================================

#[component]
fn UsersPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let users = RwSignal::new(Loadable::<Vec<AdminUser>>::default());
    let form = RwSignal::new(FormState::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let role = RwSignal::new(None::<Role>);

    let fetch = move || {
        let filters = UserFilters {
            name: name.get_untracked(),
            email: email.get_untracked(),
            address: address.get_untracked(),
            role: role.get_untracked(),
        };
        let api = api.clone();
        load_into(users, "Failed to load users", async move {
            api.admin_users(&filters).await.map(|resp| resp.users)
        });
    };

    Effect::new(fetch.clone());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        fetch();
    };

    let rows = move || {
        users.with(|state| {
            state
                .items()
                .iter()
                .map(|user| {
                    view! {
                        <tr>
                            <td>{user.name.clone()}</td>
                            <td>{user.email.clone()}</td>
                            <td>{user.address.clone()}</td>
                            <td>{role_label(&user.role)}</td>
                            <td>{owner_rating_cell(&user.role, user.average_rating)}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <form class="filters" on:submit=on_search>
            <TextField label="Name" field="name" value=name form=form/>
            <TextField label="Email" field="email" value=email form=form/>
            <TextField label="Address" field="address" value=address form=form/>
            <label class="form__label">
                "Role"
                <RoleSelect role=role any_label="All roles"/>
            </label>
            <button class="btn" type="submit" disabled=move || users.with(|u| u.loading)>
                "Search"
            </button>
        </form>
        {move || users.with(|state| list_status(state, "No users found.")).map(|text| view! { <p class="panel__status">{text}</p> })}
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Address"</th>
                    <th>"Role"</th>
                    <th>"Rating"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

// =============================================================================
// STORES
// =============================================================================

#[component]
fn StoresPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let stores = RwSignal::new(Loadable::<Vec<AdminStore>>::default());

    Effect::new(move || {
        let api = api.clone();
        load_into(stores, "Failed to load stores", async move {
            api.admin_stores().await.map(|resp| resp.stores)
        });
    });

    let rows = move || {
        stores.with(|state| {
            state
                .items()
                .iter()
                .map(|store| {
                    view! {
                        <tr>
                            <td>{store.name.clone()}</td>
                            <td>{store.email.clone()}</td>
                            <td>{store.address.clone()}</td>
                            <td>{format_average(store.avg_rating)}</td>
                        </tr>
                    }
                })
                .collect_view()
        })
    };

    view! {
        {move || stores.with(|state| list_status(state, "No stores found.")).map(|text| view! { <p class="panel__status">{text}</p> })}
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Address"</th>
                    <th>"Rating"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

// =============================================================================
// ADD USER
// =============================================================================

#[component]
fn AddUserPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
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
        let request = NewUserRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            address: address.get_untracked().trim().to_owned(),
            role: role.get_untracked().unwrap_or(Role::User),
        };
        let request = match check(request) {
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
        leptos::task::spawn_local(async move {
            match api.create_user(&request).await {
                Ok(()) => {
                    form.try_update(|f| f.succeed("User added successfully"));
                    for field in [name, email, password, address] {
                        field.try_set(String::new());
                    }
                    role.try_set(Some(Role::User));
                }
                Err(err) => {
                    form.try_update(|f| f.fail(err.user_message("Failed to add user")));
                }
            }
        });
    };

    view! {
        <form class="form" on:submit=on_submit novalidate>
            <TextField label="Name" field="name" value=name form=form/>
            <TextField label="Email" field="email" value=email form=form kind="email"/>
            <TextField label="Password" field="password" value=password form=form kind="password"/>
            <TextField label="Address" field="address" value=address form=form/>
            <label class="form__label">
                "Role"
                <RoleSelect role=role/>
            </label>
            <FormNotice form=form/>
            <button class="btn btn--primary" type="submit" disabled=move || form.get().busy>
                {move || if form.get().busy { "Adding..." } else { "Add User" }}
            </button>
        </form>
    }
}
