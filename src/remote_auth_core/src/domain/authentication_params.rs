use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

/// Credentials submitted to a remote authentication endpoint.
///
/// The password stays wrapped in a [`Secret`] so it never shows up in `Debug`
/// output or tracing spans. It is only exposed when the params are serialized
/// as a request body.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationParams {
    pub email: String,
    #[serde(serialize_with = "serialize_secret")]
    pub password: Secret<String>,
}

impl AuthenticationParams {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }
}

impl PartialEq for AuthenticationParams {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
            && self.password.expose_secret() == other.password.expose_secret()
    }
}

impl Eq for AuthenticationParams {}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose_secret())
}
