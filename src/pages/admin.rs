//! Admin page, reachable only by administrative sessions.

use leptos::prelude::*;

use crate::routes::{self, RouteName};

/// Administration view. The guard redirects every non-admin session to the
/// login page before this renders anything useful.
#[component]
pub fn AdminPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Admin));

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <p>"Account and upload moderation."</p>
        </div>
    }
}
