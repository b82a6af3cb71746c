//! Cross-app handoff: serialize the session into the dashboard URL. The
//! caller performs the actual navigation (the CLI just prints the URL).
//! A session missing any field never produces a URL.

use crate::errors::FlowError;
use crate::session::{Session, LOGGED_IN};
use url::Url;

/// Build the dashboard URL carrying the session as query parameters.
///
/// Precondition: [`Session::is_complete`]. Query values are percent-encoded
/// by the `url` crate, including the serialized user object.
pub fn dashboard_url(dashboard_base: &str, session: &Session) -> Result<Url, FlowError> {
    if !session.is_complete() {
        return Err(FlowError::IncompleteSession);
    }

    let mut url = Url::parse(dashboard_base)
        .map_err(|err| FlowError::Config(format!("invalid dashboard URL: {err}")))?;

    let user = serde_json::to_string(&session.user)
        .map_err(|err| FlowError::Store(err.to_string()))?;

    url.query_pairs_mut()
        .append_pair("token", &session.token)
        .append_pair("user", &user)
        .append_pair("isLoggedIn", LOGGED_IN);

    Ok(url)
}
