//! Error type shared by the auth flows. Every failure class the flows can hit
//! (validation, transport, server-reported, storage, incomplete session) ends
//! up as one user-visible message; callers display `to_string()` and nothing
//! else, matching how the pages surface errors.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowError {
    /// Bad or missing configuration (base URL, session path).
    Config(String),
    /// Client-side validation failure before any request is sent.
    Validation(String),
    /// The request never completed.
    Network(String),
    /// The server answered with a non-2xx status or `success: false`.
    Server(String),
    /// The session store could not be read or written.
    Store(String),
    /// Post-write read-back found a partial session; handoff must not run.
    IncompleteSession,
}

impl FlowError {
    /// Fallback shown when the server reports failure without a message.
    pub const GENERIC: &'static str = "Something went wrong. Please try again.";
}

impl fmt::Display for FlowError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowError::Config(message) => write!(formatter, "Config error: {message}"),
            FlowError::Validation(message) => write!(formatter, "{message}"),
            FlowError::Network(message) => write!(formatter, "Network error: {message}"),
            FlowError::Server(message) => write!(formatter, "{message}"),
            FlowError::Store(message) => write!(formatter, "Session store error: {message}"),
            FlowError::IncompleteSession => {
                write!(formatter, "Login data could not be saved. Please try again.")
            }
        }
    }
}

impl std::error::Error for FlowError {}
