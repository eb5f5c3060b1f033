//! Users and roles.

use serde::{Deserialize, Serialize};

/// Access role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// May compose and manage templates
    Admin,
    /// May fill and submit templates
    User,
}

/// A signed-in (or signable-in) user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identity
    pub id: String,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
    /// Access role
    pub role: UserRole,
}

impl User {
    /// Whether the user holds the given role.
    #[inline]
    #[must_use]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// Whether the user is an admin.
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_strings_are_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let parsed: UserRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, UserRole::User);
    }
}
