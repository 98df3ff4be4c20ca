//! Signup credentials and their wire form.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Username and password captured by the form.
///
/// `Debug` never prints the password. Serialization writes it in the clear,
/// which only happens when building the signup request body.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// JSON request body `{"username": ..., "password": ...}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for Credentials {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Credentials", 2)?;
        s.serialize_field("username", &self.username)?;
        s.serialize_field("password", self.password.expose_secret())?;
        s.end()
    }
}
