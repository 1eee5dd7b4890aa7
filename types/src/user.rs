use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Shown for directory rows when a user has not set a profile picture.
pub const PLACEHOLDER_AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/149/149071.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Student,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Student, Role::Staff];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
            Role::Staff => "staff",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Staff => "Staff",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub mobile_no: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    pub updated_at: Timestamp,
    #[serde(rename = "savedCourses", default)]
    pub saved_courses: Vec<String>,
    #[serde(rename = "savedPosts", default)]
    pub saved_posts: Vec<String>,
}

impl UserRecord {
    pub fn avatar_url(&self) -> &str {
        self.profile_picture.as_deref().unwrap_or(PLACEHOLDER_AVATAR)
    }
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub mobile_no: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub password: String,
}

/// Body for `PUT /api/user/update/{id}`.
///
/// `password` must be absent, not null, when the user left it blank, so the
/// backend never mistakes an untouched form for a password reset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub mobile_no: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_wire_values() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn unknown_role_is_rejected_at_the_boundary() {
        let json = r#"{
            "_id": "abc123",
            "username": "jsmith",
            "email": "j@example.com",
            "role": "superuser",
            "mobile_no": "0123456789",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let json = r#"{
            "_id": "abc123",
            "username": "jsmith",
            "email": "j@example.com",
            "role": "student",
            "mobile_no": "0123456789",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T12:30:00Z"
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert!(user.saved_courses.is_empty());
        assert!(user.saved_posts.is_empty());
        assert_eq!(user.avatar_url(), PLACEHOLDER_AVATAR);
    }
}
