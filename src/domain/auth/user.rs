// SPDX-License-Identifier: MPL-2.0
use serde::{Deserialize, Serialize};

/// The signed-in account, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Label used in the navbar: the email when known, the id otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or(&self.id)
    }
}
