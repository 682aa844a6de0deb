//! Detail page for a single plant, addressed by its numeric id.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::routes::{self, RouteName};

/// Plant detail view for `/last/:id`.
#[component]
pub fn PlantPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Plant));

    let params = use_params_map();
    let id = move || params.get().get("id").unwrap_or_default();

    view! {
        <div class="plant-page">
            <h1>{move || format!("Plant #{}", id())}</h1>
            <p>"Latest photo and identification details."</p>
        </div>
    }
}
