//! Wire types for the user API. Field names follow the backend contract
//! exactly (camelCase where the backend expects it).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope every `/api/users/*` endpoint answers with. `user` and `token`
/// are only present on register/login; `message` accompanies failures and
/// some successes.
#[derive(Deserialize, Debug, Default)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Debug)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize, Debug)]
pub struct VerifyEmailRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

#[derive(Serialize, Debug)]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub code: &'a str,
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}
