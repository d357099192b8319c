//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// `id` is `None` until a repository assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[schema(example = "johndoe@example.com")]
    pub email: String,
}

impl User {
    /// Create a transient (not yet persisted) user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Same user carrying the given identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Check if a repository has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Inbound create/replace body.
///
/// Missing or `null` fields deserialize to `None` and are validated as blank.
/// Any `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserPayload {
    /// Display name
    #[serde(default)]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// Email address
    #[serde(default)]
    #[schema(example = "johndoe@example.com")]
    pub email: Option<String>,
}

impl UserPayload {
    /// Build the transient entity this payload describes
    pub fn to_user(&self) -> User {
        User::new(
            self.name.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
        )
    }
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User::new(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
        )
    }
}
