//! REST client for the admin backend.
//!
//! One [`Backend`] handle covers the whole surface: the session check, the
//! auth endpoints, and the user collection. Authentication rides on the
//! httpOnly session cookie; the client never reads or stores a token.

use serde::{Deserialize, Serialize};
use types::{ApiError, NewUser, Result, Session, UserRecord, UserUpdate};

#[derive(Debug, Clone)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct Registration<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// The single-record endpoint has returned both a bare object and a
/// one-element array across backend versions; accept either.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(UserRecord),
    Many(Vec<UserRecord>),
}

impl OneOrMany {
    fn into_record(self) -> Result<UserRecord> {
        match self {
            OneOrMany::One(record) => Ok(record),
            OneOrMany::Many(records) => {
                records.into_iter().next().ok_or(ApiError::NotFound)
            }
        }
    }
}

impl Backend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Single-shot session check. Any non-success response, and any body
    /// without a resolvable identity, reads as [`ApiError::Unauthenticated`].
    /// No retries, no side effects.
    pub async fn session(&self) -> Result<Session> {
        let response = self
            .send(self.client.get(self.url("/api/auth/me")))
            .await
            .map_err(|_| ApiError::Unauthenticated)?;
        if !response.status().is_success() {
            return Err(ApiError::Unauthenticated);
        }
        response
            .json::<Session>()
            .await
            .map_err(|_| ApiError::Unauthenticated)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let response = self
            .send(
                self.client
                    .post(self.url("/api/auth/login"))
                    .json(&Credentials { email, password }),
            )
            .await?;
        Self::check(response).await.map(|_| ())
    }

    /// Account creation from the admin console. Success is the explicit
    /// 201 Created status; any other outcome, including a bare 200, is a
    /// failure.
    pub async fn register(&self, new_user: &NewUser) -> Result<()> {
        let response = self
            .send(
                self.client
                    .post(self.url("/api/auth/register"))
                    .json(new_user),
            )
            .await?;
        Self::expect_created(response).await
    }

    /// Self-service sign-up from the register page; same created contract.
    pub async fn register_account(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<()> {
        let response = self
            .send(self.client.post(self.url("/api/auth/register")).json(
                &Registration {
                    username,
                    email,
                    password,
                },
            ))
            .await?;
        Self::expect_created(response).await
    }

    async fn expect_created(response: reqwest::Response) -> Result<()> {
        let status = response.status().as_u16();
        if status == 201 {
            return Ok(());
        }
        let message = Self::error_message(response).await;
        if status == 200 {
            tracing::warn!("register returned 200 without a created confirmation");
            return Err(ApiError::RequestFailed {
                status,
                message: "expected a created confirmation".into(),
            });
        }
        Err(ApiError::from_status(status, message))
    }

    /// The full collection in one call; paging, sorting, and filtering are
    /// all client-side.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let response = self
            .send(self.client.get(self.url("/api/user/users")))
            .await?;
        let response = Self::check(response).await?;
        response
            .json::<Vec<UserRecord>>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    pub async fn get_user(&self, id: &str) -> Result<UserRecord> {
        let response = self
            .send(self.client.get(self.url(&format!("/api/user/users/{id}"))))
            .await?;
        let response = Self::check(response).await?;
        response
            .json::<OneOrMany>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?
            .into_record()
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<()> {
        let response = self
            .send(
                self.client
                    .put(self.url(&format!("/api/user/update/{id}")))
                    .json(update),
            )
            .await?;
        Self::check(response).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        // Browser fetch only attaches the session cookie cross-origin when
        // credentials are opted into; native builds have no cookie jar and
        // exist for tests only.
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();

        builder.send().await.map_err(|e| {
            tracing::error!("request failed to send: {e}");
            ApiError::Network(e.to_string())
        })
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        tracing::warn!(status = status.as_u16(), "backend reported failure");
        let message = Self::error_message(response).await;
        Err(ApiError::from_status(status.as_u16(), message))
    }

    /// The backend reports failures as `{"message": "..."}`; fall back to
    /// the raw body when it does not.
    async fn error_message(response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();
        extract_message(&body)
    }
}

fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Role;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let backend = Backend::new("http://localhost:5000/");
        assert_eq!(backend.url("/api/auth/me"), "http://localhost:5000/api/auth/me");
    }

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(extract_message(r#"{"message": "bad credentials"}"#), "bad credentials");
        assert_eq!(extract_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn single_record_accepts_object_or_array() {
        let object = r#"{
            "_id": "abc123",
            "username": "jsmith",
            "email": "j@example.com",
            "role": "student",
            "mobile_no": "0123456789",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let as_object: OneOrMany = serde_json::from_str(object).unwrap();
        assert_eq!(as_object.into_record().unwrap().role, Role::Student);

        let as_array: OneOrMany = serde_json::from_str(&format!("[{object}]")).unwrap();
        assert_eq!(as_array.into_record().unwrap().id, "abc123");
    }

    #[test]
    fn empty_array_reads_as_not_found() {
        let empty: OneOrMany = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.into_record().unwrap_err(), ApiError::NotFound);
    }
}
