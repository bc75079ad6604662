use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Email/password pair. Doubles as the signup fields and as the
/// re-authentication proof for update, delete and news requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingAuthCredentials);
        }
        Ok(())
    }
}
