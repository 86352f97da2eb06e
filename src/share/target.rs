use std::fmt;
use std::io;

/// Errors that can occur while sharing a fortune.
#[derive(Debug)]
pub enum ShareError {
    /// No cookie is open, so there is no fortune to share.
    NothingToShare,
    /// The compose link was built but could not be opened.
    Launch { url: String, source: io::Error },
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::NothingToShare => write!(f, "no fortune to share"),
            ShareError::Launch { source, .. } => write!(f, "could not open browser: {source}"),
        }
    }
}

impl std::error::Error for ShareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShareError::Launch { source, .. } => Some(source),
            ShareError::NothingToShare => None,
        }
    }
}

/// What a successful share did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The compose page was opened in the browser.
    Opened { url: String },
    /// Browser launch is disabled; the link is handed back for display.
    LinkOnly { url: String },
}

impl ShareOutcome {
    pub fn url(&self) -> &str {
        match self {
            ShareOutcome::Opened { url } | ShareOutcome::LinkOnly { url } => url,
        }
    }
}

/// Receives a fortune and publishes it somewhere outside the app.
pub trait ShareTarget {
    /// Returns the name of the destination (for status text and logs).
    fn name(&self) -> &str;

    /// Shares `fortune` verbatim.
    fn share(&self, fortune: &str) -> Result<ShareOutcome, ShareError>;
}
