//! User profile attached via `set_user`.

use serde::{Deserialize, Serialize};

use crate::types::Properties;

/// Identified user profile.
///
/// Only [`User::id`] is required; the dispatcher refuses to fan out a profile
/// without one. Unknown fields are preserved in [`User::extra`] so adapters
/// can forward application-specific attributes untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier. Required.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Additional application-specific attributes.
    #[serde(flatten)]
    pub extra: Properties,
}

impl User {
    /// Creates a profile with the given id and nothing else.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Attaches an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attaches a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
