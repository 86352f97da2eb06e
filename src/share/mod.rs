//! # Sharing
//!
//! The outbound side of the app: given a fortune, get it in front of a
//! social network. The controller only knows the `ShareTarget` trait;
//! URL construction and browser launch live in the implementations.

pub mod target;
pub mod warpcast;

pub use target::{ShareError, ShareOutcome, ShareTarget};
pub use warpcast::WarpcastShare;
