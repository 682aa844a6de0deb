//! Route table and navigation guard.
//!
//! Every navigable path is described by a static [`RouteDef`] whose
//! [`RouteMeta`] flags declare its access requirements. The guard itself is
//! a pure function from (meta, session, intended path) to a
//! [`GuardDecision`]; pages wire it to the router through [`use_guard`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::state::session::SessionState;

/// Path of the login route, the redirect target for rejected navigations.
pub const LOGIN_PATH: &str = "/login";

/// Path of the home route, the redirect target for `requires_unauth` routes.
pub const HOME_PATH: &str = "/";

/// Access requirements declared on a route. Every flag defaults to false,
/// i.e. unrestricted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
    pub requires_unauth: bool,
}

impl RouteMeta {
    /// Route reachable by any authenticated session.
    pub const fn auth() -> Self {
        Self {
            requires_auth: true,
            requires_admin: false,
            requires_unauth: false,
        }
    }

    /// Route reachable only by administrative sessions.
    pub const fn admin() -> Self {
        Self {
            requires_auth: false,
            requires_admin: true,
            requires_unauth: false,
        }
    }

    /// Unrestricted route.
    pub const fn none() -> Self {
        Self {
            requires_auth: false,
            requires_admin: false,
            requires_unauth: false,
        }
    }
}

/// Symbolic route identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    Admin,
    History,
    Upload,
    Plant,
    Search,
    NotFound,
}

/// One navigable URL pattern and its access requirements.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub name: RouteName,
    pub path: &'static str,
    pub meta: RouteMeta,
}

/// The route table. Defined once at startup, immutable thereafter.
pub static ROUTES: [RouteDef; 8] = [
    RouteDef { name: RouteName::Home, path: "/", meta: RouteMeta::auth() },
    RouteDef { name: RouteName::Login, path: "/login", meta: RouteMeta::none() },
    RouteDef { name: RouteName::Admin, path: "/admin", meta: RouteMeta::admin() },
    RouteDef { name: RouteName::History, path: "/history", meta: RouteMeta::auth() },
    RouteDef { name: RouteName::Upload, path: "/upload", meta: RouteMeta::auth() },
    RouteDef { name: RouteName::Plant, path: "/last/:id", meta: RouteMeta::auth() },
    RouteDef { name: RouteName::Search, path: "/search", meta: RouteMeta::auth() },
    RouteDef { name: RouteName::NotFound, path: "/*any", meta: RouteMeta::none() },
];

/// Look up the meta flags for a named route.
pub fn meta(name: RouteName) -> RouteMeta {
    ROUTES
        .iter()
        .find(|route| route.name == name)
        .map(|route| route.meta)
        .unwrap_or_default()
}

/// Outcome of evaluating the guard for one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the target route.
    Allow,
    /// Redirect to the login route, carrying the intended path.
    RedirectToLogin { redirect: String },
    /// Redirect to the home route.
    RedirectToHome,
}

/// Decide what a navigation to a route with `meta` should do under the
/// current session.
///
/// The admin requirement is checked first and independently of the auth
/// requirement: a route that requires admin but not auth still redirects to
/// login for a non-admin session. The unauth requirement is only consulted
/// when neither restriction rejected the navigation.
pub fn decide(meta: RouteMeta, session: &SessionState, full_path: &str) -> GuardDecision {
    if meta.requires_admin && !session.is_admin {
        return GuardDecision::RedirectToLogin { redirect: intended_path(full_path) };
    }
    if meta.requires_auth && !session.is_authenticated {
        return GuardDecision::RedirectToLogin { redirect: intended_path(full_path) };
    }
    if meta.requires_unauth && session.is_authenticated {
        return GuardDecision::RedirectToHome;
    }
    GuardDecision::Allow
}

/// The intended path is carried through to the login query only when it is
/// an absolute in-app path; anything else collapses to the root.
fn intended_path(full_path: &str) -> String {
    if full_path.starts_with('/') {
        full_path.to_owned()
    } else {
        HOME_PATH.to_owned()
    }
}

/// Encoding set for the `redirect` query value: everything but the
/// unreserved characters, with `/` left readable the way history-API routers
/// emit nested redirect paths.
const REDIRECT_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Build the login URL for a rejected navigation, with the intended path in
/// the `redirect` query parameter.
pub fn login_redirect_url(redirect: &str) -> String {
    format!(
        "{LOGIN_PATH}?redirect={}",
        utf8_percent_encode(redirect, REDIRECT_VALUE)
    )
}

/// Evaluate the guard against the current location whenever the session or
/// the location changes, navigating away when the decision is a redirect.
///
/// Pages call this on mount with their route's meta flags.
pub fn use_guard(meta: RouteMeta) {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let location = use_location();

    Effect::new(move || {
        let pathname = location.pathname.get();
        let search = location.search.get();
        let full_path = if search.is_empty() {
            pathname
        } else {
            format!("{pathname}?{search}")
        };

        match decide(meta, &session.get(), &full_path) {
            GuardDecision::Allow => {}
            GuardDecision::RedirectToLogin { redirect } => {
                navigate(&login_redirect_url(&redirect), NavigateOptions::default());
            }
            GuardDecision::RedirectToHome => {
                navigate(HOME_PATH, NavigateOptions::default());
            }
        }
    });
}
