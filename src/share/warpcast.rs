//! # Warpcast Share
//!
//! Shares to Farcaster by opening the Warpcast compose page with the
//! fortune pre-filled:
//!
//! ```text
//! https://warpcast.com/~/compose?text=🥠 "<fortune>"
//!
//! ✨ Discover your cosmic destiny at Fortune Caster!
//! <app_url>
//! ```
//!
//! (shown decoded; the `text` parameter is percent-encoded)

use log::{info, warn};

use super::target::{ShareError, ShareOutcome, ShareTarget};

pub const DEFAULT_COMPOSE_URL: &str = "https://warpcast.com/~/compose";
pub const DEFAULT_APP_URL: &str = "https://fortune-caster.vercel.app";

#[derive(Debug, Clone)]
pub struct WarpcastShare {
    compose_url: String,
    app_url: String,
    open_browser: bool,
}

impl WarpcastShare {
    pub fn new(compose_url: String, app_url: String, open_browser: bool) -> Self {
        Self {
            compose_url,
            app_url: app_url.trim_end_matches('/').to_string(),
            open_browser,
        }
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    /// The cast body for a fortune.
    pub fn cast_text(&self, fortune: &str) -> String {
        format!(
            "🥠 \"{fortune}\"\n\n✨ Discover your cosmic destiny at Fortune Caster!\n{}",
            self.app_url
        )
    }

    /// The compose link that opens a draft cast.
    pub fn compose_url(&self, fortune: &str) -> String {
        format!(
            "{}?text={}",
            self.compose_url,
            urlencoding::encode(&self.cast_text(fortune))
        )
    }

    /// A link back to the app that carries the fortune.
    pub fn permalink(&self, fortune: &str) -> String {
        format!("{}?fortune={}", self.app_url, urlencoding::encode(fortune))
    }
}

impl Default for WarpcastShare {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSE_URL.to_string(), DEFAULT_APP_URL.to_string(), true)
    }
}

impl ShareTarget for WarpcastShare {
    fn name(&self) -> &str {
        "Farcaster"
    }

    fn share(&self, fortune: &str) -> Result<ShareOutcome, ShareError> {
        let url = self.compose_url(fortune);
        if !self.open_browser {
            info!("Browser launch disabled, returning compose link");
            return Ok(ShareOutcome::LinkOnly { url });
        }

        // Detached: the launcher may not exit until the browser does.
        match open::that_detached(&url) {
            Ok(()) => {
                info!("Opened Warpcast compose page");
                Ok(ShareOutcome::Opened { url })
            }
            Err(source) => {
                warn!("Failed to open compose page: {}", source);
                Err(ShareError::Launch { url, source })
            }
        }
    }
}
