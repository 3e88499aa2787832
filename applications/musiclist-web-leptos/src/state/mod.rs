pub mod session;

pub use session::{provide_session_context, use_session, SessionContext};
