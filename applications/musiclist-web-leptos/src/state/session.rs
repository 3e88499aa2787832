use leptos::*;

/// Signed-in user, kept in memory for the lifetime of the page
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub username: ReadSignal<Option<String>>,
    pub set_username: WriteSignal<Option<String>>,
}

impl SessionContext {
    pub fn sign_in(&self, username: String) {
        self.set_username.set(Some(username));
    }

    pub fn is_signed_in(&self) -> bool {
        self.username.with(Option::is_some)
    }
}

/// Provide session context to the application
/// Call this at the root of the app, above the router
pub fn provide_session_context() {
    let (username, set_username) = create_signal(None);
    provide_context(SessionContext {
        username,
        set_username,
    });
}

/// Hook to access session context
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
