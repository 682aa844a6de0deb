//! History page listing past photo uploads.

use leptos::prelude::*;

use crate::routes::{self, RouteName};

/// Upload history view.
#[component]
pub fn HistoryPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::History));

    view! {
        <div class="history-page">
            <h1>"History"</h1>
            <p>"Your past uploads, newest first."</p>
        </div>
    }
}
