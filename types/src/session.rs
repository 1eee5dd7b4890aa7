use serde::{Deserialize, Serialize};

use crate::Role;

/// The authenticated identity reported by `GET /api/auth/me`.
///
/// Derived from a fresh network call on each protected-route mount, never
/// persisted locally. A response without an `_id` fails deserialization,
/// which the session client treats as unauthenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Avatar fallback when no profile picture is set.
    pub fn initial(&self) -> char {
        self.username
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_without_id_is_rejected() {
        let json = r#"{"username": "jsmith", "email": "j@example.com", "role": "admin"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn admin_is_the_privileged_role() {
        let json = r#"{"_id": "abc", "username": "jsmith", "email": "j@example.com", "role": "staff"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(!session.is_admin());
        assert_eq!(session.initial(), 'J');
    }
}
