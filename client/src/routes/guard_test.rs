use super::*;
use crate::routes::ROUTES;

const TO_HOME: GuardDecision = GuardDecision::Redirect { to: HOME_PATH, replace: true };
const TO_LOGIN: GuardDecision = GuardDecision::Redirect { to: LOGIN_PATH, replace: true };

// =============================================================
// decide
// =============================================================

#[test]
fn requires_no_session_redirects_home_when_present() {
    assert_eq!(decide(AccessPolicy::RequiresNoSession, true), TO_HOME);
}

#[test]
fn requires_no_session_renders_when_absent() {
    assert_eq!(decide(AccessPolicy::RequiresNoSession, false), GuardDecision::Render);
}

#[test]
fn requires_session_redirects_to_login_when_absent() {
    assert_eq!(decide(AccessPolicy::RequiresSession, false), TO_LOGIN);
}

#[test]
fn requires_session_renders_when_present() {
    assert_eq!(decide(AccessPolicy::RequiresSession, true), GuardDecision::Render);
}

#[test]
fn public_always_renders() {
    assert_eq!(decide(AccessPolicy::Public, true), GuardDecision::Render);
    assert_eq!(decide(AccessPolicy::Public, false), GuardDecision::Render);
}

#[test]
fn default_policy_fails_closed() {
    assert_eq!(AccessPolicy::default(), AccessPolicy::RequiresSession);
}

// =============================================================
// guard (path-based)
// =============================================================

#[test]
fn every_session_route_bounces_to_login_without_session() {
    for route in ROUTES.iter().filter(|r| r.policy == AccessPolicy::RequiresSession) {
        let concrete = route.path.replace(":id", "1");
        assert_eq!(guard(&concrete, false), TO_LOGIN, "path {concrete}");
        assert_eq!(guard(&concrete, true), GuardDecision::Render, "path {concrete}");
    }
}

#[test]
fn login_route_depends_only_on_presence() {
    assert_eq!(guard("/login", true), TO_HOME);
    assert_eq!(guard("/login", false), GuardDecision::Render);
}

#[test]
fn unknown_route_bounces_to_login_without_session() {
    assert_eq!(guard("/not-a-page", false), TO_LOGIN);
    assert_eq!(guard("/not-a-page", true), GuardDecision::Render);
}

#[test]
fn redirects_always_replace_history() {
    for decision in [decide(AccessPolicy::RequiresSession, false), decide(AccessPolicy::RequiresNoSession, true)] {
        assert!(matches!(decision, GuardDecision::Redirect { replace: true, .. }));
    }
}
