use serde::{Deserialize, Serialize};

/// Per-reminder outcome of a dispatch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderOutcome {
    /// Reminder id as stored.
    pub id: String,
    /// Display names of the devices a delivery was attempted to.
    pub sent_to: Vec<String>,
    /// The persisted next due timestamp. `None` means the reminder will
    /// not fire again.
    pub next_date: Option<String>,
}

/// Summary returned by one complete dispatch cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReport {
    /// Number of reminders processed (delivered and advanced).
    pub sent: usize,
    /// One entry per processed reminder, in snapshot order.
    pub details: Vec<ReminderOutcome>,
}
