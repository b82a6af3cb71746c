use std::path::PathBuf;

/// Shared configuration every action receives: where the API lives, where the
/// dashboard lives, and where the session record is kept.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub dashboard_url: String,
    pub session_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, dashboard_url: String, session_file: PathBuf) -> Self {
        Self {
            api_url,
            dashboard_url,
            session_file,
        }
    }
}
