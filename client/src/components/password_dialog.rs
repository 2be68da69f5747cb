//! Change-password modal opened from the account header.

use leptos::prelude::*;

use super::form_notice::{FieldError, FormNotice};
use crate::net::api::ApiClient;
use crate::net::types::UpdatePasswordRequest;
use crate::state::form::{FormState, Notice, NoticeKind};
use crate::util::validation::check;

/// Password change form. On success the dialog closes itself and posts the
/// confirmation to `notice`, which the header keeps showing.
#[component]
pub fn PasswordDialog(open: RwSignal<bool>, notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let form = RwSignal::new(FormState::default());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.busy) {
            return;
        }
        let request = UpdatePasswordRequest {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
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
            match api.update_password(&request).await {
                Ok(()) => {
                    form.try_update(|f| f.succeed("Password updated successfully"));
                    notice.try_set(Some(Notice {
                        kind: NoticeKind::Success,
                        text: "Password updated successfully".to_owned(),
                    }));
                    open.try_set(false);
                }
                Err(err) => {
                    form.try_update(|f| f.fail(err.user_message("Failed to update password")));
                }
            }
        });
    };

    let on_close = move |_| open.set(false);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Change Password"</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Current Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError form=form field="current_password"/>
                    <label class="form__label">
                        "New Password"
                        <input
                            class="form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <FieldError form=form field="new_password"/>
                    <FormNotice form=form/>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_close>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.get().busy>
                            {move || if form.get().busy { "Updating..." } else { "Update Password" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
