//! Upload page for new plant photos.

use leptos::prelude::*;

use crate::routes::{self, RouteName};

/// Photo upload view.
#[component]
pub fn UploadPage() -> impl IntoView {
    routes::use_guard(routes::meta(RouteName::Upload));

    view! {
        <div class="upload-page">
            <h1>"Upload a photo"</h1>
            <label class="upload-page__picker">
                "Choose an image"
                <input type="file" accept="image/*"/>
            </label>
        </div>
    }
}
