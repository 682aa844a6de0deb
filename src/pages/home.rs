//! Home page, the landing view after login.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{self, RouteName};

/// Landing page once signed in — entry points into the main flows.
#[component]
pub fn HomePage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Home));

    view! {
        <div class="home-page">
            <h1>"My plants"</h1>
            <p>"Pick up where you left off."</p>
            <div class="home-page__actions">
                <A href="/upload">"Upload a photo"</A>
                <A href="/history">"Browse history"</A>
                <A href="/search">"Search plants"</A>
            </div>
        </div>
    }
}
