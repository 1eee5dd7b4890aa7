use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::{NewUser, Role, UserRecord, UserUpdate};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Create requires a password; Edit treats it as an opt-in change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Field-level validation errors, keyed by draft field name.
///
/// A non-empty set blocks submission; nothing here ever reaches the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Transient form state for the Create and Edit views.
///
/// Mirrors the editable subset of [`UserRecord`] plus the credential pair.
/// Discarded on navigation or successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    pub mobile_no: String,
    pub role: Role,
    pub desc: String,
    pub password: String,
    pub confirm_password: String,
}

impl UserDraft {
    /// Pre-populate from a fetched record. Password fields start empty
    /// regardless of input; the backend never returns credentials.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            mobile_no: record.mobile_no.clone(),
            role: record.role,
            desc: record.desc.clone().unwrap_or_default(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    pub fn validate(&self, mode: FormMode) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.username.trim().chars().count() < 2 {
            errors.insert("username", "Username must be at least 2 characters.");
        }
        if !is_valid_email(&self.email) {
            errors.insert("email", "Please enter a valid email.");
        }
        if self.mobile_no.chars().count() < 10 {
            errors.insert("mobile_no", "Phone number must be at least 10 digits.");
        }

        let password_given = !self.password.is_empty();
        match mode {
            FormMode::Create => {
                if self.password.chars().count() < 6 {
                    errors.insert("password", "Password must be at least 6 characters.");
                }
            }
            FormMode::Edit => {
                if password_given && self.password.chars().count() < 6 {
                    errors.insert("password", "Password must be at least 6 characters.");
                }
            }
        }
        if (password_given || mode == FormMode::Create)
            && self.password != self.confirm_password
        {
            errors.insert("confirm_password", "Passwords don't match");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn create_payload(&self) -> NewUser {
        NewUser {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile_no: self.mobile_no.trim().to_string(),
            role: self.role,
            desc: self.desc_field(),
            password: self.password.clone(),
        }
    }

    /// Strips the confirmation field and omits the password entirely when it
    /// was left blank, so an untouched Edit form never resets credentials.
    pub fn update_payload(&self) -> UserUpdate {
        UserUpdate {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile_no: self.mobile_no.trim().to_string(),
            role: self.role,
            desc: self.desc_field(),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        }
    }

    fn desc_field(&self) -> Option<String> {
        let desc = self.desc.trim();
        if desc.is_empty() {
            None
        } else {
            Some(desc.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn valid_draft() -> UserDraft {
        UserDraft {
            username: "jsmith".into(),
            email: "jsmith@example.com".into(),
            mobile_no: "0123456789".into(),
            role: Role::Student,
            desc: String::new(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    fn record() -> UserRecord {
        UserRecord {
            id: "abc123".into(),
            username: "jsmith".into(),
            email: "jsmith@example.com".into(),
            role: Role::Staff,
            mobile_no: "0123456789".into(),
            desc: Some("notes".into()),
            profile_picture: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            saved_courses: vec![],
            saved_posts: vec![],
        }
    }

    #[test]
    fn valid_create_draft_passes() {
        assert!(valid_draft().validate(FormMode::Create).is_ok());
    }

    #[test]
    fn schema_limits_are_enforced() {
        let mut draft = valid_draft();
        draft.username = "j".into();
        draft.email = "not an email".into();
        draft.mobile_no = "123".into();
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert!(errors.get("username").is_some());
        assert!(errors.get("email").is_some());
        assert!(errors.get("mobile_no").is_some());
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn email_pattern_rejects_missing_domain_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("@c.co"));
    }

    #[test]
    fn create_requires_a_password() {
        let mut draft = valid_draft();
        draft.password = String::new();
        draft.confirm_password = String::new();
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn one_character_mismatch_attaches_to_confirmation_field() {
        let mut draft = valid_draft();
        draft.confirm_password = "hunter23".into();
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert!(errors.get("confirm_password").is_some());
        assert!(errors.get("password").is_none());
    }

    #[test]
    fn edit_with_blank_password_has_no_password_errors() {
        let mut draft = valid_draft();
        draft.password = String::new();
        draft.confirm_password = String::new();
        assert!(draft.validate(FormMode::Edit).is_ok());
    }

    #[test]
    fn edit_validates_password_only_when_changed() {
        let mut draft = valid_draft();
        draft.password = "abc".into();
        draft.confirm_password = "abc".into();
        let errors = draft.validate(FormMode::Edit).unwrap_err();
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn blank_password_is_omitted_from_update_payload() {
        let mut draft = valid_draft();
        draft.password = String::new();
        draft.confirm_password = String::new();
        let json = serde_json::to_value(draft.update_payload()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn changed_password_is_carried_in_update_payload() {
        let json = serde_json::to_value(valid_draft().update_payload()).unwrap();
        assert_eq!(json["password"], "hunter22");
    }

    #[test]
    fn from_record_empties_credential_fields() {
        let draft = UserDraft::from_record(&record());
        assert_eq!(draft.username, "jsmith");
        assert_eq!(draft.role, Role::Staff);
        assert_eq!(draft.desc, "notes");
        assert!(draft.password.is_empty());
        assert!(draft.confirm_password.is_empty());
    }
}
