mod home;
pub use home::{Analytics, Dashboard, Reports};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod users;
pub use users::Users;

mod user_form;
pub use user_form::{CreateUser, EditUser};
