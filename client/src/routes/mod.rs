//! Route table, access guard, and navigation history.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ROUTES`] declares every path the console serves together with its
//! [`AccessPolicy`] and header title. The router in `app` mounts views for the
//! same paths; the guard consults this table, never the router, so unknown
//! paths fall through to the fail-closed default.


pub mod guard;
pub mod history;

pub use guard::AccessPolicy;

use crate::state::identity::{Identity, Permission};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Title shown for paths outside the table.
pub const FALLBACK_TITLE: &str = "Admin";

/// One declared route. `:name` segments match any single segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub policy: AccessPolicy,
    pub title: &'static str,
}

const fn route(path: &'static str, policy: AccessPolicy, title: &'static str) -> RouteDef {
    RouteDef { path, policy, title }
}

/// Every route, in match order.
pub const ROUTES: &[RouteDef] = &[
    route("/", AccessPolicy::RequiresSession, "Dashboard"),
    route("/riders", AccessPolicy::RequiresSession, "Riders"),
    route("/riders/:id", AccessPolicy::RequiresSession, "Rider Details"),
    route("/customers", AccessPolicy::RequiresSession, "Customers"),
    route("/customers/:id", AccessPolicy::RequiresSession, "Customer Details"),
    route("/vehicle-type-rates", AccessPolicy::RequiresSession, "Vehicle Type Rates"),
    route("/vehicle-type-rates/add", AccessPolicy::RequiresSession, "Add Vehicle Type Rate"),
    route("/settings", AccessPolicy::RequiresSession, "Settings"),
    route(LOGIN_PATH, AccessPolicy::RequiresNoSession, "Sign In"),
];

/// Find the first declared route matching `path`.
///
/// Query strings, fragments, and trailing slashes are ignored.
pub fn match_route(path: &str) -> Option<&'static RouteDef> {
    let path = strip_suffixes(path);
    ROUTES.iter().find(|route| pattern_matches(route.path, path))
}

/// Policy for `path`; unknown paths require a session.
pub fn policy_for(path: &str) -> AccessPolicy {
    match_route(path).map_or_else(AccessPolicy::default, |route| route.policy)
}

pub fn title_for(path: &str) -> &'static str {
    match_route(path).map_or(FALLBACK_TITLE, |route| route.title)
}

/// List routes whose records open at `{section}/:id`.
pub const DETAIL_SECTIONS: &[&str] = &["/riders", "/customers"];

/// Detail path for record `id` under `section`, if that section has one.
pub fn detail_link(section: &str, id: &str) -> Option<String> {
    let section = strip_suffixes(section).trim_end_matches('/');
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '?', '#']) || !DETAIL_SECTIONS.contains(&section) {
        return None;
    }
    Some(format!("{section}/{id}"))
}

/// Grant a non-admin needs to open records under `section`: `view_<last segment>`.
pub fn detail_permission(section: &str) -> Permission {
    let name = segments(strip_suffixes(section)).last().unwrap_or_default();
    Permission::new(format!("view_{name}"))
}

/// Whether `identity` may open a record detail.
///
/// Admins always may. Users need `permission`, so without one only admins
/// get through. Nobody signed in never does.
pub fn can_open_detail(identity: Option<&Identity>, permission: Option<&Permission>) -> bool {
    match identity {
        Some(identity) if identity.is_admin() => true,
        Some(identity) => permission.is_some_and(|p| identity.can(p)),
        None => false,
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut expected = segments(pattern);
    let mut actual = segments(path);
    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return true,
            (Some(p), Some(a)) if p.starts_with(':') || p == a => {}
            _ => return false,
        }
    }
}
