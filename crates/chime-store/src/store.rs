use async_trait::async_trait;

use chime_core::reminder::{Device, Reminder, Settings};

use crate::error::StoreError;

/// Data-store surface consumed by the dispatch engine.
///
/// Implementations must be `Send + Sync` so a single instance can serve
/// concurrent dispatch cycles. The three fetches are snapshot reads; the
/// update targets one row keyed by reminder id.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Fetch every stored reminder.
    async fn fetch_reminders(&self) -> Result<Vec<Reminder>, StoreError>;

    /// Fetch every registered device.
    async fn fetch_devices(&self) -> Result<Vec<Device>, StoreError>;

    /// Fetch the settings singleton. Zero rows is a valid state, not an
    /// error; callers fall back to [`Settings::default`].
    async fn fetch_settings(&self) -> Result<Option<Settings>, StoreError>;

    /// Overwrite one reminder's due timestamp. `None` clears it, which
    /// stops the reminder from ever firing again.
    async fn update_next_date(
        &self,
        id: &str,
        next_date: Option<&str>,
    ) -> Result<(), StoreError>;
}
