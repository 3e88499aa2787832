pub mod login;

pub use login::{rejection_detail, LoginRequest, LoginResponse};
