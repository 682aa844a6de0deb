//! Search page for tracked plants.

use leptos::prelude::*;

use crate::routes::{self, RouteName};

/// Plant search view.
#[component]
pub fn SearchPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Search));

    let query = RwSignal::new(String::new());

    view! {
        <div class="search-page">
            <h1>"Search plants"</h1>
            <input
                class="search-page__input"
                type="search"
                placeholder="Name or species"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
