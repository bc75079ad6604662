use serde::Serialize;
use tracing::debug;

use crate::error::FormError;
use crate::models::auth::Credentials;
use crate::models::profile::ProfileDraft;

/// Body of `PUT /users`.
///
/// `email`/`password` are the current credentials used to re-authenticate;
/// `user` carries the new values. Only [`UpdateRequestBuilder::build`]
/// creates one, so `user.email` is never blank:
///
/// ```compile_fail
/// use news_bff::models::{ProfileDraft, UpdateRequest};
///
/// let request = UpdateRequest {
///     user: ProfileDraft::new(),
///     email: "a@x.com".to_string(),
///     password: "secret".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    user: ProfileDraft,
    email: String,
    password: String,
}

impl UpdateRequest {
    pub fn user(&self) -> &ProfileDraft {
        &self.user
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateRequestBuilder;

impl UpdateRequestBuilder {
    /// Combines the draft with the current credentials.
    ///
    /// A blank `draft.email` falls back to the current email so an update
    /// never submits an empty address. Every other field is passed through
    /// unchanged, empty strings included.
    pub fn build(draft: ProfileDraft, current: &Credentials) -> Result<UpdateRequest, FormError> {
        current.validate()?;

        let mut user = draft;
        if user.email.is_empty() {
            debug!("New email left blank, keeping current email");
            user.email = current.email.clone();
        }

        Ok(UpdateRequest {
            user,
            email: current.email.clone(),
            password: current.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::NotificationChannel;
    use serde_json::json;

    fn current() -> Credentials {
        Credentials::new("a@x.com", "old-secret")
    }

    #[test]
    fn blank_email_falls_back_to_current() {
        let request = UpdateRequestBuilder::build(ProfileDraft::new(), &current()).unwrap();
        assert_eq!(request.user().email, "a@x.com");
    }

    #[test]
    fn new_email_overrides_but_reauth_uses_current() {
        let mut draft = ProfileDraft::new();
        draft.set_field("email", "b@y.com").unwrap();
        draft.set_field("password", "new-secret").unwrap();

        let request = UpdateRequestBuilder::build(draft, &current()).unwrap();
        assert_eq!(request.user().email, "b@y.com");
        assert_eq!(request.user().password, "new-secret");
        assert_eq!(request.credentials(), current());
    }

    #[test]
    fn built_request_never_carries_blank_email() {
        let mut draft = ProfileDraft::new();
        draft.set_field("email", "b@y.com").unwrap();
        draft.set_field("email", "").unwrap();

        let request = UpdateRequestBuilder::build(draft, &current()).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["user"]["email"], "a@x.com");
        assert_eq!(body["email"], "a@x.com");
    }

    #[test]
    fn missing_current_password_is_rejected() {
        let mut draft = ProfileDraft::new();
        draft.set_field("email", "b@y.com").unwrap();
        draft.set_field("username", "dana").unwrap();
        draft.toggle_category("science").unwrap();

        assert_eq!(
            UpdateRequestBuilder::build(draft, &Credentials::new("a@x.com", "")),
            Err(FormError::MissingAuthCredentials)
        );
    }

    #[test]
    fn empty_optional_fields_pass_through() {
        let mut draft = ProfileDraft::new();
        draft.set_field("notification_channel", "telegram").unwrap();
        draft.toggle_category("business").unwrap();

        let request = UpdateRequestBuilder::build(draft, &current()).unwrap();
        assert_eq!(request.user().notification_channel, NotificationChannel::Telegram);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "user": {
                    "email": "a@x.com",
                    "username": "",
                    "password": "",
                    "country": "Israel",
                    "language": "English",
                    "categories": ["business"],
                    "notification_channel": "telegram",
                    "telegram_user_id": ""
                },
                "email": "a@x.com",
                "password": "old-secret"
            })
        );
    }
}
