//! Catch-all page for unmatched paths.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{self, RouteName};

/// Fallback view for any path outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::NotFound));

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <A href="/">"Back to home"</A>
        </div>
    }
}
