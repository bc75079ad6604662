pub mod auth;
pub mod category;
pub mod preferences;
pub mod profile;
pub mod update;

pub use auth::Credentials;
pub use category::{Category, CategorySet};
pub use preferences::{Country, Language, NotificationChannel};
pub use profile::{DraftField, ProfileDraft, RegistrationPayload, UserPreferences};
pub use update::{UpdateRequest, UpdateRequestBuilder};
