//! Top navigation header with the logout action.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};

/// Navigation bar. Hidden until a login succeeds; the admin link only shows
/// for administrative sessions.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || session.get().is_authenticated>
            <header class="header">
                <nav class="header__nav">
                    <A href="/">"Home"</A>
                    <A href="/history">"History"</A>
                    <A href="/upload">"Upload"</A>
                    <A href="/search">"Search"</A>
                    <Show when=move || session.get().is_admin>
                        <A href="/admin">"Admin"</A>
                    </Show>
                </nav>
                <LogoutButton/>
            </header>
        </Show>
    }
}

/// Logout button — clears the session and returns to the login page.
#[component]
fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    view! {
        <button class="header__logout" on:click=move |_| session::logout(session, &navigate)>
            "Log out"
        </button>
    }
}
