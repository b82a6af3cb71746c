pub mod api;
pub mod calc;
pub mod cli;
pub mod errors;
pub mod flow;
pub mod handoff;
pub mod session;

/// User agent sent with every outbound request.
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
