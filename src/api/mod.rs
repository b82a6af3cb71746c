//! Client for the StockSathi user API. One request per call, no retries;
//! transport errors, non-2xx statuses and `success: false` bodies all come
//! back as a [`FlowError`] carrying the message the user should see.

pub mod types;

use crate::errors::FlowError;
use crate::APP_USER_AGENT;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use self::types::{
    ApiEnvelope, EmailRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
    VerifyEmailRequest,
};

/// Auth endpoints, relative to the API base URL.
const REGISTER: &str = "/api/users/register";
const LOGIN: &str = "/api/users/login";
const SEND_VERIFICATION_CODE: &str = "/api/users/send-verification-code";
const VERIFY_EMAIL: &str = "/api/users/verify-email";
const SEND_PASSWORD_RESET_CODE: &str = "/api/users/send-password-reset-code";
const RESET_PASSWORD: &str = "/api/users/reset-password";

#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Client,
    base_url: Url,
}

impl AuthClient {
    /// Build a client against the given API base URL.
    pub fn new(base_url: &str) -> Result<Self, FlowError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| FlowError::Config(format!("invalid API base URL: {err}")))?;

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(|err| FlowError::Config(format!("could not build HTTP client: {err}")))?;

        Ok(Self { client, base_url })
    }

    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<ApiEnvelope, FlowError> {
        self.post(
            REGISTER,
            &RegisterRequest {
                name,
                email,
                password: password.expose_secret(),
            },
        )
        .await
    }

    #[instrument(skip(self, password))]
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<ApiEnvelope, FlowError> {
        self.post(
            LOGIN,
            &LoginRequest {
                email,
                password: password.expose_secret(),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn send_verification_code(&self, email: &str) -> Result<ApiEnvelope, FlowError> {
        self.post(SEND_VERIFICATION_CODE, &EmailRequest { email })
            .await
    }

    #[instrument(skip(self))]
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<ApiEnvelope, FlowError> {
        self.post(VERIFY_EMAIL, &VerifyEmailRequest { email, code })
            .await
    }

    #[instrument(skip(self))]
    pub async fn send_password_reset_code(&self, email: &str) -> Result<ApiEnvelope, FlowError> {
        self.post(SEND_PASSWORD_RESET_CODE, &EmailRequest { email })
            .await
    }

    #[instrument(skip(self, new_password))]
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &SecretString,
    ) -> Result<ApiEnvelope, FlowError> {
        self.post(
            RESET_PASSWORD,
            &ResetPasswordRequest {
                email,
                code,
                new_password: new_password.expose_secret(),
            },
        )
        .await
    }

    /// POST a JSON body and fold every failure into the single message
    /// channel the flows display.
    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ApiEnvelope, FlowError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| FlowError::Config(format!("invalid endpoint {path}: {err}")))?;

        debug!("POST {url}");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| FlowError::Network(err.to_string()))?;

        let status = response.status();

        // The backend sends its message in the body even on error statuses,
        // so parse before deciding. A body that fails to parse on an error
        // status still needs to surface a usable message.
        let envelope = response.json::<ApiEnvelope>().await;

        match envelope {
            Ok(envelope) if status.is_success() && envelope.success => Ok(envelope),
            Ok(envelope) => Err(FlowError::Server(
                envelope
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| FlowError::GENERIC.to_string()),
            )),
            Err(err) => {
                if status.is_success() {
                    Err(FlowError::Network(format!("invalid response: {err}")))
                } else {
                    Err(FlowError::Server(FlowError::GENERIC.to_string()))
                }
            }
        }
    }
}
