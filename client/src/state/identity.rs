//! Typed identity of a signed-in staff member.
//!
//! DESIGN
//! ======
//! Roles are a closed enum, parsed once when a session record enters the
//! session store. Permission names are the backend's vocabulary and pass
//! through unchanged; only blank names are rejected.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Staff role. Admins hold every permission implicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(other.to_owned()),
        }
    }
}

/// A permission name granted by the backend.
///
/// Names are opaque to the console: whatever the backend grants is kept
/// verbatim and only compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Permission(String);

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Permission {
    type Err = String;

    /// Trims surrounding whitespace; a blank name is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(s.to_owned());
        }
        Ok(Self(name.to_owned()))
    }
}

/// Who is signed in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
    pub permissions: BTreeSet<Permission>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this identity may perform `permission`.
    pub fn can(&self, permission: &Permission) -> bool {
        self.is_admin() || self.permissions.contains(permission)
    }

    /// Name to show in the header, falling back to the email, then the id.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        self.email.clone().unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
