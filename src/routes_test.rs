use super::*;
use crate::net::types::LoginResponse;

fn unauthenticated() -> SessionState {
    SessionState::default()
}

fn authenticated() -> SessionState {
    let mut session = SessionState::default();
    session.apply_login(&LoginResponse { token: "abc".to_owned(), admin: false });
    session
}

fn admin_session() -> SessionState {
    let mut session = SessionState::default();
    session.apply_login(&LoginResponse { token: "abc".to_owned(), admin: true });
    session
}

// =============================================================
// Guard: admin requirement
// =============================================================

#[test]
fn admin_route_rejects_non_admin_even_when_authenticated() {
    let decision = decide(meta(RouteName::Admin), &authenticated(), "/admin");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/admin".to_owned() }
    );
}

#[test]
fn admin_route_rejects_unauthenticated_session() {
    let decision = decide(meta(RouteName::Admin), &unauthenticated(), "/admin");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/admin".to_owned() }
    );
}

#[test]
fn admin_route_allows_admin_session() {
    let decision = decide(meta(RouteName::Admin), &admin_session(), "/admin");
    assert_eq!(decision, GuardDecision::Allow);
}

#[test]
fn admin_check_runs_regardless_of_auth_flag() {
    // A hypothetical route requiring both flags still rejects a non-admin
    // session that is otherwise authenticated.
    let both = RouteMeta {
        requires_auth: true,
        requires_admin: true,
        requires_unauth: false,
    };
    let decision = decide(both, &authenticated(), "/admin");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/admin".to_owned() }
    );
}

// =============================================================
// Guard: auth requirement
// =============================================================

#[test]
fn auth_route_redirects_unauthenticated_with_path_preserved() {
    let decision = decide(meta(RouteName::History), &unauthenticated(), "/history?page=2");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/history?page=2".to_owned() }
    );
}

#[test]
fn auth_route_allows_authenticated_session() {
    let decision = decide(meta(RouteName::Home), &authenticated(), "/");
    assert_eq!(decision, GuardDecision::Allow);
}

#[test]
fn malformed_intended_path_falls_back_to_root() {
    let decision = decide(meta(RouteName::Home), &unauthenticated(), "example.com/evil");
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/".to_owned() }
    );
}

// =============================================================
// Guard: unauth requirement
// =============================================================

#[test]
fn unauth_route_sends_authenticated_session_home() {
    let meta = RouteMeta { requires_unauth: true, ..RouteMeta::default() };
    assert_eq!(decide(meta, &authenticated(), "/login"), GuardDecision::RedirectToHome);
}

#[test]
fn unauth_route_allows_unauthenticated_session() {
    let meta = RouteMeta { requires_unauth: true, ..RouteMeta::default() };
    assert_eq!(decide(meta, &unauthenticated(), "/login"), GuardDecision::Allow);
}

// =============================================================
// Guard: unrestricted routes
// =============================================================

#[test]
fn no_flags_always_allow() {
    for session in [unauthenticated(), authenticated(), admin_session()] {
        assert_eq!(decide(RouteMeta::default(), &session, "/login"), GuardDecision::Allow);
    }
}

// =============================================================
// Route table
// =============================================================

#[test]
fn route_table_has_expected_paths() {
    let expected = [
        (RouteName::Home, "/"),
        (RouteName::Login, "/login"),
        (RouteName::Admin, "/admin"),
        (RouteName::History, "/history"),
        (RouteName::Upload, "/upload"),
        (RouteName::Plant, "/last/:id"),
        (RouteName::Search, "/search"),
    ];
    for (name, path) in expected {
        let route = ROUTES.iter().find(|r| r.name == name).expect("route in table");
        assert_eq!(route.path, path);
    }
}

#[test]
fn login_route_is_unrestricted() {
    assert_eq!(meta(RouteName::Login), RouteMeta::none());
}

#[test]
fn admin_route_requires_admin_but_not_auth() {
    let meta = meta(RouteName::Admin);
    assert!(meta.requires_admin);
    assert!(!meta.requires_auth);
}

#[test]
fn protected_routes_require_auth() {
    for name in [RouteName::Home, RouteName::History, RouteName::Upload, RouteName::Plant, RouteName::Search] {
        assert!(meta(name).requires_auth, "{name:?} should require auth");
    }
}

#[test]
fn catch_all_route_is_unrestricted() {
    assert_eq!(meta(RouteName::NotFound), RouteMeta::none());
}

// =============================================================
// Redirect URL construction
// =============================================================

#[test]
fn login_redirect_url_keeps_slashes_readable() {
    assert_eq!(login_redirect_url("/last/42"), "/login?redirect=/last/42");
}

#[test]
fn login_redirect_url_encodes_query_metacharacters() {
    assert_eq!(
        login_redirect_url("/search?q=aloe vera&page=1"),
        "/login?redirect=/search%3Fq%3Daloe%20vera%26page%3D1"
    );
}

#[test]
fn login_redirect_url_encodes_non_ascii_paths() {
    assert_eq!(
        login_redirect_url("/search?q=pothos café"),
        "/login?redirect=/search%3Fq%3Dpothos%20caf%C3%A9"
    );
}
