//! Route guard: render or redirect, as a pure function.
//!
//! The guard never touches the router or storage. It maps an access policy
//! and "is a session present" to a [`GuardDecision`]; the `Guarded` component
//! carries the decision out once the session store has been restored.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::{HOME_PATH, LOGIN_PATH, policy_for};

/// Who may see a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Only with a session. The default for every route.
    #[default]
    RequiresSession,
    /// Only without a session (the sign-in view).
    RequiresNoSession,
    /// Always.
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Navigate to `to`; `replace` keeps the guarded entry out of history.
    Redirect { to: &'static str, replace: bool },
}

pub fn decide(policy: AccessPolicy, session_present: bool) -> GuardDecision {
    match (policy, session_present) {
        (AccessPolicy::RequiresNoSession, true) => GuardDecision::Redirect { to: HOME_PATH, replace: true },
        (AccessPolicy::RequiresSession, false) => GuardDecision::Redirect { to: LOGIN_PATH, replace: true },
        (AccessPolicy::RequiresNoSession, false) | (AccessPolicy::RequiresSession, true) | (AccessPolicy::Public, _) => {
            GuardDecision::Render
        }
    }
}

/// Decide for a concrete path using the route table.
pub fn guard(path: &str, session_present: bool) -> GuardDecision {
    decide(policy_for(path), session_present)
}
