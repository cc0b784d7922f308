use async_trait::async_trait;

use crate::error::PushError;

/// Common interface for push delivery backends.
///
/// Implementations must be `Send + Sync` so one sender instance can fan a
/// due reminder out to many devices concurrently.
#[async_trait]
pub trait PushSender: Send + Sync {
    /// Deliver one notification to the device identified by `key`.
    ///
    /// `critical` selects the elevated urgency level and alert sound;
    /// everything else about the binary critical/normal mapping is an
    /// implementation detail of the backend.
    ///
    /// Exactly one outbound call is made per invocation; failures are
    /// returned, never retried.
    async fn deliver(
        &self,
        key: &str,
        title: &str,
        body: &str,
        critical: bool,
    ) -> Result<(), PushError>;
}
