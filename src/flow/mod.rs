//! Per-page auth flow controllers. Each flow is a small state machine:
//! `Idle → Submitting → {Success, Failure}` around one in-flight request,
//! mirrored by the wizard cursor in [`reset`]. Shared validation lives here.

pub mod code;
pub mod cooldown;
pub mod login;
pub mod reset;
pub mod signup;
pub mod verify;

pub use self::code::CodeInput;
pub use self::cooldown::ResendCooldown;
pub use self::login::LoginFlow;
pub use self::reset::{ResetFlow, ResetStep};
pub use self::signup::SignupFlow;
pub use self::verify::VerifyFlow;

use crate::errors::FlowError;
use regex::Regex;

/// Minimum accepted password length. Client-side only; the backend enforces
/// its own policy.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Submission state of a single form.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure(String),
}

impl SubmitState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

pub(crate) fn require_email(email: &str) -> Result<(), FlowError> {
    if email.trim().is_empty() {
        return Err(FlowError::Validation(
            "Please enter your email address.".to_string(),
        ));
    }
    if !valid_email(email.trim()) {
        return Err(FlowError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn require_password(password: &str) -> Result<(), FlowError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(FlowError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    Ok(())
}
