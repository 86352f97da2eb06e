//! # One-Shot Draw
//!
//! `fortune-caster --once` skips the TUI: draw one fortune, print it, exit.
//! With `--json` the draw is printed as a single JSON object that carries
//! the compose link and the permalink as well.

use serde::Serialize;

use crate::core::catalog::FortuneCatalog;
use crate::core::random::RandomIndex;
use crate::share::WarpcastShare;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FortuneDraw {
    pub fortune: String,
    pub index: usize,
    pub share_url: String,
    pub permalink: String,
}

pub fn draw(
    catalog: &FortuneCatalog,
    random: &mut dyn RandomIndex,
    share: &WarpcastShare,
) -> FortuneDraw {
    let (index, fortune) = catalog.draw(random);
    FortuneDraw {
        fortune: fortune.to_string(),
        index,
        share_url: share.compose_url(fortune),
        permalink: share.permalink(fortune),
    }
}

/// Plain text is just the fortune; JSON is the whole draw.
pub fn format(draw: &FortuneDraw, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(draw)
    } else {
        Ok(format!("🥠 {}", draw.fortune))
    }
}
