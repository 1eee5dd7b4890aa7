mod draft;
mod error;
mod session;
mod user;

pub use draft::{FormMode, UserDraft, ValidationErrors, is_valid_email};
pub use error::ApiError;
pub use session::Session;
pub use user::{NewUser, PLACEHOLDER_AVATAR, Role, UserRecord, UserUpdate};

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
