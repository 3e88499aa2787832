mod effects;
mod login;

pub use effects::run_login_effects;
pub use login::Login;
