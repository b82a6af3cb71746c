//! Signup form controller. Same success path as login, plus the one-shot
//! hint that tells the verification page which address to prefill.

use crate::api::AuthClient;
use crate::errors::FlowError;
use crate::flow::login::establish_session;
use crate::flow::{require_email, require_password, SubmitState};
use crate::session::{Session, SessionStore};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

#[derive(Debug)]
pub struct SignupFlow {
    name: String,
    email: String,
    password: SecretString,
    state: SubmitState,
}

impl SignupFlow {
    #[must_use]
    pub fn new(name: String, email: String, password: SecretString) -> Self {
        Self {
            name,
            email,
            password,
            state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    #[instrument(skip(self, client, store))]
    pub async fn submit(
        &mut self,
        client: &AuthClient,
        store: &SessionStore,
    ) -> Result<Session, FlowError> {
        if self.state.is_submitting() {
            return Err(FlowError::Validation("Already signing up.".to_string()));
        }

        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        let validation = if name.is_empty() {
            Err(FlowError::Validation("Please enter your name.".to_string()))
        } else {
            require_email(&email).and_then(|()| require_password(self.password.expose_secret()))
        };
        if let Err(err) = validation {
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }

        self.state = SubmitState::Submitting;

        let result = client.register(&name, &email, &self.password).await;
        match result.and_then(|envelope| establish_session(envelope, store)) {
            Ok(session) => {
                // Best effort: a lost hint only costs the prefill.
                let _ = store.write_verification_hint(&email);
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
