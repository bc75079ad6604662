use tracing::{debug, info};

use crate::error::FormError;
use crate::models::{Credentials, ProfileDraft, RegistrationPayload, UpdateRequest, UpdateRequestBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Editing,
    /// Terminal. A new session is needed for another submit.
    Built,
}

/// One form session: owns its draft and refuses edits once a request has
/// been built from it.
#[derive(Debug, Clone)]
pub struct FormSession {
    draft: ProfileDraft,
    state: SessionState,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::from_draft(ProfileDraft::new())
    }

    /// Starts from an existing draft, e.g. one rebuilt from stored preferences.
    /// Anything other than the form defaults counts as already being edited.
    pub fn from_draft(draft: ProfileDraft) -> Self {
        let state = if draft == ProfileDraft::default() {
            SessionState::Empty
        } else {
            SessionState::Editing
        };
        Self { draft, state }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        self.ensure_open()?;
        self.draft.set_field(name, value)?;
        self.state = SessionState::Editing;
        Ok(())
    }

    pub fn toggle_category(&mut self, tag: &str) -> Result<bool, FormError> {
        self.ensure_open()?;
        let selected = self.draft.toggle_category(tag)?;
        debug!(tag, selected, "Toggled category");
        self.state = SessionState::Editing;
        Ok(selected)
    }

    pub fn submit_registration(&mut self) -> Result<RegistrationPayload, FormError> {
        self.ensure_open()?;
        let payload = self.draft.to_registration_payload()?;
        self.state = SessionState::Built;
        info!("Registration payload built");
        Ok(payload)
    }

    pub fn submit_update(&mut self, current: &Credentials) -> Result<UpdateRequest, FormError> {
        self.ensure_open()?;
        let request = UpdateRequestBuilder::build(self.draft.clone(), current)?;
        self.state = SessionState::Built;
        info!("Update request built");
        Ok(request)
    }

    fn ensure_open(&self) -> Result<(), FormError> {
        if self.state == SessionState::Built {
            return Err(FormError::SessionFinished);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_moves_from_empty_to_built() {
        let mut session = FormSession::new();
        assert_eq!(session.state(), SessionState::Empty);

        session.set_field("email", "dana@example.com").unwrap();
        session.set_field("username", "dana").unwrap();
        session.set_field("password", "hunter2").unwrap();
        assert_eq!(session.state(), SessionState::Editing);

        session.submit_registration().unwrap();
        assert_eq!(session.state(), SessionState::Built);
    }

    #[test]
    fn prefilled_draft_starts_in_editing() {
        assert_eq!(
            FormSession::from_draft(ProfileDraft::new()).state(),
            SessionState::Empty
        );

        let mut draft = ProfileDraft::new();
        draft.set_field("username", "dana").unwrap();
        draft.toggle_category("science").unwrap();
        assert_eq!(FormSession::from_draft(draft).state(), SessionState::Editing);
    }

    #[test]
    fn built_session_rejects_mutation() {
        let mut session = FormSession::new();
        session.toggle_category("health").unwrap();
        session
            .submit_update(&Credentials::new("a@x.com", "secret"))
            .unwrap();

        assert_eq!(session.toggle_category("health"), Err(FormError::SessionFinished));
        assert_eq!(session.set_field("username", "x"), Err(FormError::SessionFinished));
        assert_eq!(
            session.submit_update(&Credentials::new("a@x.com", "secret")),
            Err(FormError::SessionFinished)
        );
        assert!(session.draft().username.is_empty());
    }

    #[test]
    fn failed_submit_keeps_session_editable() {
        let mut session = FormSession::new();
        session.set_field("email", "dana@example.com").unwrap();

        assert_eq!(
            session.submit_registration(),
            Err(FormError::IncompleteProfile("username"))
        );
        assert_eq!(
            session.submit_update(&Credentials::default()),
            Err(FormError::MissingAuthCredentials)
        );
        assert_eq!(session.state(), SessionState::Editing);
        assert!(session.set_field("username", "dana").is_ok());
    }
}
