//! `chime-push` — one-shot notification delivery to Bark endpoints.
//!
//! A delivery is a single HTTP GET against a Bark server:
//! `{base}/{title}/{body}?group=…&level=…&sound=…`. Device keys come in
//! two shapes, a bare token for the hosted instance or a full base URL
//! for a self-hosted one; [`BarkEndpoint`] resolves the shape once per key.
//!
//! Delivery is best-effort by design: callers get a [`Result`] per
//! attempt and decide what a failure means. This crate never retries.

pub mod bark;
pub mod error;
pub mod sender;

pub use bark::{BarkEndpoint, BarkSender};
pub use error::PushError;
pub use sender::PushSender;
