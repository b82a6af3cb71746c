//! Login form controller. On success the session is written, read straight
//! back, and checked for completeness before anyone is allowed to navigate.

use crate::api::types::ApiEnvelope;
use crate::api::AuthClient;
use crate::errors::FlowError;
use crate::flow::{require_email, require_password, SubmitState};
use crate::session::{Session, SessionStore};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct LoginFlow {
    email: String,
    password: SecretString,
    state: SubmitState,
}

impl LoginFlow {
    #[must_use]
    pub fn new(email: String, password: SecretString) -> Self {
        Self {
            email,
            password,
            state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Submit the form. Exactly one request is in flight at a time; a second
    /// submit while `Submitting` is rejected.
    #[instrument(skip(self, client, store))]
    pub async fn submit(
        &mut self,
        client: &AuthClient,
        store: &SessionStore,
    ) -> Result<Session, FlowError> {
        if self.state.is_submitting() {
            return Err(FlowError::Validation("Already signing in.".to_string()));
        }

        let email = self.email.trim().to_string();
        if let Err(err) = require_email(&email).and_then(|()| {
            require_password(self.password.expose_secret())
        }) {
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }

        self.state = SubmitState::Submitting;

        let result = client.login(&email, &self.password).await;
        match result.and_then(|envelope| establish_session(envelope, store)) {
            Ok(session) => {
                self.state = SubmitState::Success;
                Ok(session)
            }
            Err(err) => {
                self.state = SubmitState::Failure(err.to_string());
                Err(err)
            }
        }
    }
}

/// Shared success path for login and signup: persist the session from the
/// response, then trust only what the store reads back. The store write is
/// atomic, so the read-back happens immediately with no settle delay.
pub(crate) fn establish_session(
    envelope: ApiEnvelope,
    store: &SessionStore,
) -> Result<Session, FlowError> {
    let token = envelope
        .token
        .filter(|token| !token.is_empty())
        .ok_or(FlowError::IncompleteSession)?;
    let user = envelope.user.ok_or(FlowError::IncompleteSession)?;

    store.write(&Session::new(token, user))?;

    let session = store.read().ok_or(FlowError::IncompleteSession)?;
    if !session.is_complete() {
        return Err(FlowError::IncompleteSession);
    }

    debug!("session established");
    Ok(session)
}
