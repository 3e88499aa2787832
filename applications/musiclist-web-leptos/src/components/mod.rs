pub mod login;
pub mod main_view;

pub use login::Login;
pub use main_view::MainView;
