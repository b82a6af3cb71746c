//! Password reset wizard: Email → Code → Password → Done, forward only.
//! The only way back is leaving the page; the wizard itself never rewinds.

use crate::api::AuthClient;
use crate::errors::FlowError;
use crate::flow::{require_email, require_password, CodeInput, ResendCooldown, SubmitState};
use secrecy::{ExposeSecret, SecretString};
use std::time::Instant;
use tracing::instrument;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetStep {
    Email,
    Code,
    Password,
    Done,
}

#[derive(Debug)]
pub struct ResetFlow {
    step: ResetStep,
    email: String,
    pub code: CodeInput,
    cooldown: Option<ResendCooldown>,
    state: SubmitState,
}

impl ResetFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: ResetStep::Email,
            email: String::new(),
            code: CodeInput::new(),
            cooldown: None,
            state: SubmitState::Idle,
        }
    }

    /// Re-enter the wizard at the password step with a code already in hand
    /// (e.g. a fresh process after the code arrived out of band). The code
    /// is still checked server-side when the password is submitted.
    #[must_use]
    pub fn resume(email: String, code: CodeInput) -> Self {
        Self {
            step: ResetStep::Password,
            email,
            code,
            cooldown: None,
            state: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn step(&self) -> ResetStep {
        self.step
    }

    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    #[must_use]
    pub fn resend_remaining_secs(&self, now: Instant) -> u64 {
        self.cooldown
            .map_or(0, |cooldown| cooldown.remaining_secs(now))
    }

    /// Step 1: send the reset code and advance to code entry.
    #[instrument(skip(self, client))]
    pub async fn submit_email(
        &mut self,
        client: &AuthClient,
        email: String,
        now: Instant,
    ) -> Result<(), FlowError> {
        if self.step != ResetStep::Email {
            return Err(FlowError::Validation("Code already sent.".to_string()));
        }

        let email = email.trim().to_string();
        if let Err(err) = require_email(&email) {
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }

        self.state = SubmitState::Submitting;

        match client.send_password_reset_code(&email).await {
            Ok(_) => {
                self.email = email;
                self.cooldown = Some(ResendCooldown::start(now));
                self.step = ResetStep::Code;
                self.state = SubmitState::Success;
                Ok(())
            }
            Err(err) => {
                self.state = SubmitState::Failure(err.to_string());
                Err(err)
            }
        }
    }

    /// Resend the code while on the code step, subject to the cooldown.
    #[instrument(skip(self, client))]
    pub async fn resend_code(&mut self, client: &AuthClient, now: Instant) -> Result<(), FlowError> {
        if self.step != ResetStep::Code {
            return Err(FlowError::Validation(
                "No code to resend at this step.".to_string(),
            ));
        }
        if let Some(cooldown) = self.cooldown {
            if !cooldown.is_ready(now) {
                return Err(FlowError::Validation(format!(
                    "Please wait {}s before requesting another code.",
                    cooldown.remaining_secs(now)
                )));
            }
        }

        client.send_password_reset_code(&self.email).await?;
        self.cooldown = Some(ResendCooldown::start(now));
        Ok(())
    }

    /// Step 2: the code is checked server-side only at the final step, so
    /// advancing just requires all six digits.
    pub fn submit_code(&mut self) -> Result<(), FlowError> {
        if self.step != ResetStep::Code {
            return Err(FlowError::Validation("Not at the code step.".to_string()));
        }
        if !self.code.is_complete() {
            let err = FlowError::Validation("Please enter the 6-digit code.".to_string());
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }
        self.step = ResetStep::Password;
        self.state = SubmitState::Success;
        Ok(())
    }

    /// Step 3: submit the new password together with the collected code.
    /// A server rejection (e.g. wrong code) clears the code cells but stays
    /// on this step; the wizard never moves backwards.
    #[instrument(skip(self, client, new_password))]
    pub async fn submit_password(
        &mut self,
        client: &AuthClient,
        new_password: &SecretString,
    ) -> Result<(), FlowError> {
        if self.step != ResetStep::Password {
            return Err(FlowError::Validation(
                "Not at the password step.".to_string(),
            ));
        }

        if let Err(err) = require_password(new_password.expose_secret()) {
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        }

        let Some(code) = self.code.value() else {
            let err = FlowError::Validation("Please enter the 6-digit code.".to_string());
            self.state = SubmitState::Failure(err.to_string());
            return Err(err);
        };

        self.state = SubmitState::Submitting;

        match client
            .reset_password(&self.email, &code, new_password)
            .await
        {
            Ok(_) => {
                self.step = ResetStep::Done;
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

impl Default for ResetFlow {
    fn default() -> Self {
        Self::new()
    }
}
