//! CLI front end for the auth flows. Each action drives one flow controller
//! against the configured API; the dashboard handoff URL is printed rather
//! than navigated, since there is no browser here.

use crate::api::AuthClient;
use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::errors::FlowError;
use crate::flow::{CodeInput, LoginFlow, ResetFlow, SignupFlow, VerifyFlow};
use crate::handoff;
use crate::session::SessionStore;
use anyhow::{anyhow, Result};
use std::time::Instant;
use tracing::info;

/// Handle the auth actions
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    let client = AuthClient::new(&globals.api_url)?;
    let store = SessionStore::new(globals.session_file.clone());

    match action {
        Action::Login { email, password } => {
            let mut flow = LoginFlow::new(email, password);
            let session = flow.submit(&client, &store).await?;
            let url = handoff::dashboard_url(&globals.dashboard_url, &session)?;

            info!("login succeeded");
            println!("Logged in. Open your dashboard:");
            println!("{url}");
        }
        Action::Signup {
            name,
            email,
            password,
        } => {
            let mut flow = SignupFlow::new(name, email, password);
            let session = flow.submit(&client, &store).await?;
            let url = handoff::dashboard_url(&globals.dashboard_url, &session)?;

            info!("signup succeeded");
            println!("Account created. Verify your email with `stocksathi send-code`.");
            println!("Open your dashboard:");
            println!("{url}");
        }
        Action::SendCode { email } => {
            let email = resolve_email(email, &store)?;
            let mut flow = VerifyFlow::new(email.clone());

            let message = flow.send_code(&client, Instant::now()).await?;
            // The hint is one-shot; put it back for the confirm step.
            let _ = store.write_verification_hint(&email);

            println!(
                "{}",
                message.unwrap_or_else(|| format!("Verification code sent to {email}."))
            );
            println!("Resend available in 60s.");
        }
        Action::VerifyEmail { email, code } => {
            let email = resolve_email(email, &store)?;
            let mut flow = VerifyFlow::new(email.clone());
            flow.code = CodeInput::parse(&code)
                .ok_or_else(|| FlowError::Validation("Please enter the 6-digit code.".to_string()))?;

            flow.submit(&client).await?;
            println!("Email verified for {email}.");
        }
        Action::SendResetCode { email } => {
            let mut flow = ResetFlow::new();
            flow.submit_email(&client, email.clone(), Instant::now())
                .await?;

            println!("Password reset code sent to {email}.");
            println!("Resend available in 60s.");
        }
        Action::ResetPassword {
            email,
            code,
            new_password,
        } => {
            let code = CodeInput::parse(&code)
                .ok_or_else(|| FlowError::Validation("Please enter the 6-digit code.".to_string()))?;
            let mut flow = ResetFlow::resume(email, code);

            flow.submit_password(&client, &new_password).await?;
            println!("Password updated. Sign in with `stocksathi login`.");
        }
        other => return Err(anyhow!("not an auth action: {other:?}")),
    }

    Ok(())
}

/// Prefer the explicit address, falling back to the hint signup left behind.
fn resolve_email(email: Option<String>, store: &SessionStore) -> Result<String, FlowError> {
    email
        .or_else(|| store.take_verification_hint())
        .ok_or_else(|| {
            FlowError::Validation(
                "No email given and no pending signup found; pass --email.".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_email_prefers_explicit_address() {
        let store = SessionStore::new(std::env::temp_dir().join(format!(
            "stocksathi-auth-action-{}.json",
            std::process::id()
        )));
        store.write_verification_hint("hint@example.com").unwrap();

        let email = resolve_email(Some("given@example.com".to_string()), &store).unwrap();
        assert_eq!(email, "given@example.com");

        // Hint untouched by the explicit path.
        assert_eq!(
            resolve_email(None, &store).unwrap(),
            "hint@example.com".to_string()
        );

        assert!(resolve_email(None, &store).is_err());
    }
}
