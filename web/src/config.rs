//! Build-time configuration.
//!
//! The web bundle has no runtime environment to read, so both endpoints are
//! baked in at compile time, with localhost defaults for development.

/// Base URL of the REST backend.
pub fn backend_url() -> &'static str {
    option_env!("AMEN_BACKEND_URL").unwrap_or("http://localhost:5000")
}

/// Where authenticated non-admin visitors are sent: a full navigation out
/// of the admin application, not an in-app redirect.
pub fn member_site_url() -> &'static str {
    option_env!("AMEN_MEMBER_SITE_URL").unwrap_or("http://localhost:3000")
}
