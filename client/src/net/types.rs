//! Wire DTOs for the admin auth endpoints.
//!
//! DESIGN
//! ======
//! [`SessionRecord`] is both the sign-in response body and the persisted
//! session record, so what the backend returns is exactly what a reload
//! restores. Roles and permissions stay as raw strings here; the session store
//! validates them into closed enums at its boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by `POST admin/signin` and persisted under the session key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Opaque bearer token.
    pub token: String,
    /// The signed-in staff member.
    #[serde(rename = "userInfo")]
    pub user_info: UserInfo,
    /// Permission names granted to non-admin users.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Staff member profile embedded in a [`SessionRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `"admin"` or `"user"`.
    pub role: String,
}

/// Body of `POST admin/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body the backend sends with non-success responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The first non-blank message the backend supplied.
    pub fn into_message(self) -> Option<String> {
        self.error
            .into_iter()
            .chain(self.message)
            .map(|m| m.trim().to_owned())
            .find(|m| !m.is_empty())
    }
}
