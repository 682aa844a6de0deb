//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::Header, toast_host::ToastHost};
use crate::pages::{
    admin::AdminPage, history::HistoryPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, plant::PlantPage, search::SearchPage, upload::UploadPage,
};
use crate::state::{session, toast::ToastState};

/// Root application component.
///
/// Rehydrates the session from localStorage, provides the shared state
/// contexts, and sets up client-side routing. The route paths mirror the
/// static table in [`crate::routes`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(session::load());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Title text="Plantlog"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("history") view=HistoryPage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=(StaticSegment("last"), ParamSegment("id")) view=PlantPage/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
