use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

use crate::error::FormError;
use crate::models::category::{Category, CategorySet};
use crate::models::preferences::{Country, Language, NotificationChannel};

/// Scalar fields of a [`ProfileDraft`], named as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Email,
    Username,
    Password,
    Country,
    Language,
    NotificationChannel,
    TelegramUserId,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Email => "email",
            DraftField::Username => "username",
            DraftField::Password => "password",
            DraftField::Country => "country",
            DraftField::Language => "language",
            DraftField::NotificationChannel => "notification_channel",
            DraftField::TelegramUserId => "telegram_user_id",
        }
    }
}

impl FromStr for DraftField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "email" => Ok(DraftField::Email),
            "username" => Ok(DraftField::Username),
            "password" => Ok(DraftField::Password),
            "country" => Ok(DraftField::Country),
            "language" => Ok(DraftField::Language),
            "notification_channel" => Ok(DraftField::NotificationChannel),
            "telegram_user_id" => Ok(DraftField::TelegramUserId),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// In-progress user profile form state.
///
/// Serializes to the user body shared by `POST /users` and the `user` part
/// of `PUT /users`. Empty strings mean "not filled in" and are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub email: String,
    pub username: String,
    pub password: String,
    pub country: Country,
    pub language: Language,
    pub categories: CategorySet,
    pub notification_channel: NotificationChannel,
    pub telegram_user_id: String,
}

impl ProfileDraft {
    /// Draft seeded with the form defaults (Israel, English, email).
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a draft from preferences the server already holds, so an
    /// update form starts with the current selections checked.
    /// The password is never returned by the server and stays empty.
    pub fn from_preferences(preferences: &UserPreferences) -> Self {
        let country = preferences.country.parse().unwrap_or_else(|_| {
            warn!(value = %preferences.country, "Unknown stored country, using default");
            Country::default()
        });
        let language = preferences.language.parse().unwrap_or_else(|_| {
            warn!(value = %preferences.language, "Unknown stored language, using default");
            Language::default()
        });
        let notification_channel = preferences
            .notification_channel
            .parse()
            .unwrap_or_else(|_| {
                warn!(
                    value = %preferences.notification_channel,
                    "Unknown stored notification channel, using default"
                );
                NotificationChannel::default()
            });

        let categories = preferences
            .categories
            .iter()
            .filter_map(|tag| match tag.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    warn!(tag = %tag, "Dropping unknown stored category");
                    None
                }
            })
            .collect();

        Self {
            email: preferences.email.clone(),
            username: preferences.username.clone(),
            password: String::new(),
            country,
            language,
            categories,
            notification_channel,
            telegram_user_id: preferences.telegram_user_id.clone(),
        }
    }

    /// Assigns a scalar field by its wire name.
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field = name.parse::<DraftField>()?;
        self.set(field, value)
    }

    /// Assigns a scalar field. Closed-option fields must parse into their
    /// enum; on error the draft is left untouched.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), FormError> {
        match field {
            DraftField::Email => self.email = value.to_string(),
            DraftField::Username => self.username = value.to_string(),
            DraftField::Password => self.password = value.to_string(),
            DraftField::Country => self.country = value.parse()?,
            DraftField::Language => self.language = value.parse()?,
            DraftField::NotificationChannel => self.notification_channel = value.parse()?,
            DraftField::TelegramUserId => self.telegram_user_id = value.to_string(),
        }
        Ok(())
    }

    /// Flips membership of `tag` in the category subscriptions.
    /// Returns whether the tag is selected afterwards.
    pub fn toggle_category(&mut self, tag: &str) -> Result<bool, FormError> {
        let category = tag.parse::<Category>()?;
        Ok(self.categories.toggle(category))
    }

    pub fn to_registration_payload(&self) -> Result<RegistrationPayload, FormError> {
        let required = [
            (DraftField::Email, &self.email),
            (DraftField::Username, &self.username),
            (DraftField::Password, &self.password),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
            return Err(FormError::IncompleteProfile(field.as_str()));
        }

        if self.notification_channel.requires_telegram_id() && self.telegram_user_id.is_empty() {
            return Err(FormError::IncompleteProfile(DraftField::TelegramUserId.as_str()));
        }

        Ok(RegistrationPayload(self.clone()))
    }
}

/// Snapshot of a complete draft, ready for `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegistrationPayload(ProfileDraft);

impl RegistrationPayload {
    pub fn profile(&self) -> &ProfileDraft {
        &self.0
    }

    pub fn categories(&self) -> &CategorySet {
        &self.0.categories
    }
}

/// Preferences as returned by `GET /users`. Values are kept as plain strings
/// because stored data may predate the closed vocabularies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    pub email: String,
    pub username: String,
    pub country: String,
    pub language: String,
    pub categories: Vec<String>,
    pub notification_channel: String,
    pub telegram_user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new();
        draft.set_field("email", "dana@example.com").unwrap();
        draft.set_field("username", "dana").unwrap();
        draft.set_field("password", "hunter2").unwrap();
        draft
    }

    #[test]
    fn new_draft_has_form_defaults() {
        let draft = ProfileDraft::new();
        assert_eq!(draft.country, Country::Israel);
        assert_eq!(draft.language, Language::English);
        assert_eq!(draft.notification_channel, NotificationChannel::Email);
        assert!(draft.categories.is_empty());
        assert!(draft.email.is_empty());
    }

    #[test]
    fn set_field_parses_closed_options() {
        let mut draft = ProfileDraft::new();
        draft.set_field("country", "France").unwrap();
        draft.set_field("language", "Hebrew").unwrap();
        draft.set_field("notification_channel", "telegram").unwrap();
        draft.set_field("telegram_user_id", "123456").unwrap();

        assert_eq!(draft.country, Country::France);
        assert_eq!(draft.language, Language::Hebrew);
        assert_eq!(draft.notification_channel, NotificationChannel::Telegram);
        assert_eq!(draft.telegram_user_id, "123456");
    }

    #[test]
    fn invalid_values_leave_draft_unchanged() {
        let mut draft = complete_draft();
        let before = draft.clone();

        assert!(matches!(
            draft.set_field("country", "Narnia"),
            Err(FormError::InvalidOption { field: "country", .. })
        ));
        assert_eq!(
            draft.set_field("nickname", "x"),
            Err(FormError::UnknownField("nickname".to_string()))
        );
        assert_eq!(
            draft.toggle_category("weather"),
            Err(FormError::InvalidCategory("weather".to_string()))
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn category_presence_follows_toggle_parity() {
        let mut draft = ProfileDraft::new();
        for toggles in 1..=6 {
            let selected = draft.toggle_category("technology").unwrap();
            assert_eq!(selected, toggles % 2 == 1);
            assert_eq!(draft.categories.contains(Category::Technology), toggles % 2 == 1);
        }
    }

    #[test]
    fn registration_requires_identity_fields() {
        let mut draft = ProfileDraft::new();
        draft.set_field("email", "dana@example.com").unwrap();
        draft.set_field("password", "hunter2").unwrap();

        assert_eq!(
            draft.to_registration_payload(),
            Err(FormError::IncompleteProfile("username"))
        );
    }

    #[test]
    fn telegram_channel_requires_user_id() {
        let mut draft = complete_draft();
        draft.set_field("notification_channel", "telegram").unwrap();
        assert_eq!(
            draft.to_registration_payload(),
            Err(FormError::IncompleteProfile("telegram_user_id"))
        );

        draft.set_field("telegram_user_id", "42").unwrap();
        assert!(draft.to_registration_payload().is_ok());
    }

    #[test]
    fn registration_payload_reflects_toggle_history() {
        let mut draft = complete_draft();
        draft.toggle_category("politics").unwrap();
        draft.toggle_category("health").unwrap();
        draft.toggle_category("politics").unwrap();
        draft.toggle_category("arts_and_entertainment").unwrap();

        let payload = draft.to_registration_payload().unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "email": "dana@example.com",
                "username": "dana",
                "password": "hunter2",
                "country": "Israel",
                "language": "English",
                "categories": ["health", "arts_and_entertainment"],
                "notification_channel": "email",
                "telegram_user_id": ""
            })
        );
        assert!(!payload.categories().contains(Category::Politics));
    }

    #[test]
    fn from_preferences_restores_known_selections() {
        let preferences: UserPreferences = serde_json::from_value(json!({
            "email": "dana@example.com",
            "username": "dana",
            "country": "UK",
            "language": "Martian",
            "categories": ["science", "Politics", "sports"],
            "notification_channel": "telegram",
            "telegram_user_id": "42"
        }))
        .unwrap();

        let draft = ProfileDraft::from_preferences(&preferences);
        assert_eq!(draft.country, Country::Uk);
        assert_eq!(draft.language, Language::English);
        assert_eq!(draft.notification_channel, NotificationChannel::Telegram);
        assert_eq!(
            draft.categories.iter().copied().collect::<Vec<_>>(),
            vec![Category::Science, Category::Sports]
        );
        assert!(draft.password.is_empty());
        assert_eq!(draft.telegram_user_id, "42");
    }
}
