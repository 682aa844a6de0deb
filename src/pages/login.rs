//! Login page with the credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::routes::{self, RouteName};
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;

/// Login page — submits the credentials and, on success, continues to the
/// path the guard stashed in the `redirect` query parameter.
#[component]
pub fn LoginPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Login));

    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);

        let user = username.get();
        let pass = password.get();
        // Continue to the intended page after login; anything that is not an
        // absolute in-app path falls back to home.
        let target = query
            .get()
            .get("redirect")
            .filter(|redirect| redirect.starts_with('/'))
            .unwrap_or_else(|| routes::HOME_PATH.to_owned());
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let ok = session::login(session, toasts, &user, &pass).await;
            pending.set(false);
            if ok {
                navigate(&target, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Plantlog"</h1>
            <p>"Track your plants, one photo at a time"</p>
            <form class="login-form" on:submit=on_submit>
                <label class="login-form__label">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
