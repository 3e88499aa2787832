use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Credentials posted to the authentication endpoint
#[derive(Clone, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }
}

impl Serialize for LoginRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("LoginRequest", 2)?;
        s.serialize_field("email", &self.email)?;
        s.serialize_field("password", self.password.expose_secret())?;
        s.end()
    }
}

/// Successful login reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Pull a human readable `detail` out of a rejection body.
///
/// FastAPI style errors carry either a string (`{"detail": "Invalid email or password"}`)
/// or a list of validation problems; anything that is not a string is rendered as JSON.
pub fn rejection_detail(body: &serde_json::Value) -> Option<String> {
    match body.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
