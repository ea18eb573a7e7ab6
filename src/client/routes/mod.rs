pub mod auth;
pub mod login;
pub mod not_found;
pub mod signup;

pub use login::Login;
pub use not_found::NotFound;
pub use signup::Signup;
