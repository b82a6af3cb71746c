//! Email verification controller: send a code (cooldown-guarded), collect
//! six digits, confirm with the backend. A rejected code wipes the cells so
//! the user restarts from the first one.

use crate::api::AuthClient;
use crate::errors::FlowError;
use crate::flow::{require_email, CodeInput, ResendCooldown, SubmitState};
use std::time::Instant;
use tracing::instrument;

#[derive(Debug)]
pub struct VerifyFlow {
    email: String,
    pub code: CodeInput,
    cooldown: Option<ResendCooldown>,
    state: SubmitState,
}

impl VerifyFlow {
    #[must_use]
    pub fn new(email: String) -> Self {
        Self {
            email,
            code: CodeInput::new(),
            cooldown: None,
            state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Seconds before "resend code" re-enables; 0 when ready.
    #[must_use]
    pub fn resend_remaining_secs(&self, now: Instant) -> u64 {
        self.cooldown
            .map_or(0, |cooldown| cooldown.remaining_secs(now))
    }

    /// Request a verification code. Refused while the 60-second cooldown is
    /// running; a successful send restarts it.
    #[instrument(skip(self, client))]
    pub async fn send_code(
        &mut self,
        client: &AuthClient,
        now: Instant,
    ) -> Result<Option<String>, FlowError> {
        if let Some(cooldown) = self.cooldown {
            if !cooldown.is_ready(now) {
                return Err(FlowError::Validation(format!(
                    "Please wait {}s before requesting another code.",
                    cooldown.remaining_secs(now)
                )));
            }
        }

        let email = self.email.trim().to_string();
        require_email(&email)?;

        let envelope = client.send_verification_code(&email).await?;
        self.cooldown = Some(ResendCooldown::start(now));
        Ok(envelope.message)
    }

    /// Confirm the typed code. Blocked until all six cells are filled; a
    /// server rejection clears them.
    #[instrument(skip(self, client))]
    pub async fn submit(&mut self, client: &AuthClient) -> Result<(), FlowError> {
        if self.state.is_submitting() {
            return Err(FlowError::Validation("Already verifying.".to_string()));
        }

        let Some(code) = self.code.value() else {
            let err = FlowError::Validation("Please enter the 6-digit code.".to_string());
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        };

        let email = self.email.trim().to_string();
        if let Err(err) = require_email(&email) {
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }

        self.state = SubmitState::Submitting;

        match client.verify_email(&email, &code).await {
            Ok(_) => {
                self.state = SubmitState::Success;
                Ok(())
            }
            Err(err) => {
                self.code.clear();
                self.state = SubmitState::Failure(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn submit_blocked_until_code_complete() {
        let client = AuthClient::new("http://127.0.0.1:1").unwrap();
        let mut flow = VerifyFlow::new("a@example.com".to_string());
        flow.code.set(0, '1');

        let err = flow.submit(&client).await.unwrap_err();
        assert!(matches!(err, FlowError::Validation(_)));
        assert!(matches!(flow.state(), SubmitState::Failure(_)));
    }

    #[tokio::test]
    async fn resend_refused_inside_cooldown() {
        let client = AuthClient::new("http://127.0.0.1:1").unwrap();
        let mut flow = VerifyFlow::new("a@example.com".to_string());
        let t0 = Instant::now();
        flow.cooldown = Some(ResendCooldown::start(t0));

        let err = flow
            .send_code(&client, t0 + Duration::from_secs(30))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("wait"));
        assert_eq!(flow.resend_remaining_secs(t0 + Duration::from_secs(30)), 30);
    }

    #[test]
    fn no_cooldown_means_ready() {
        let flow = VerifyFlow::new("a@example.com".to_string());
        assert_eq!(flow.resend_remaining_secs(Instant::now()), 0);
    }
}
