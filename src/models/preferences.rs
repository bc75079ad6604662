use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Israel,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    France,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Israel, Country::Us, Country::Uk, Country::France];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Israel => "Israel",
            Country::Us => "US",
            Country::Uk => "UK",
            Country::France => "France",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hebrew,
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hebrew, Language::French];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hebrew => "Hebrew",
            Language::French => "French",
        }
    }
}

/// Where news digests are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Email,
    /// Needs a `telegram_user_id` on the profile.
    Telegram,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 2] =
        [NotificationChannel::Email, NotificationChannel::Telegram];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Telegram => "telegram",
        }
    }

    pub fn requires_telegram_id(&self) -> bool {
        matches!(self, NotificationChannel::Telegram)
    }
}

macro_rules! closed_option {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FormError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|option| option.as_str() == value)
                    .ok_or_else(|| FormError::InvalidOption {
                        field: $field,
                        value: value.to_string(),
                    })
            }
        }
    };
}

closed_option!(Country, "country");
closed_option!(Language, "language");
closed_option!(NotificationChannel, "notification_channel");
