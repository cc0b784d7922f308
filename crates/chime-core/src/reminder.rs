//! Store record types — shared between the store client, the dispatch
//! engine and the gateway's report serialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device selector value meaning "deliver to every known device".
pub const ALL_DEVICES: &str = "all";

/// How often a reminder reschedules itself after firing.
///
/// Stored as a lowercase string in the `reminders.cycle` column. Values the
/// store may contain but this build does not recognise collapse into
/// [`Cycle::Unknown`], which behaves like [`Cycle::Once`]: fire, then stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cycle {
    /// Fire a single time, then clear the due timestamp.
    #[default]
    Once,
    /// Advance by one calendar day after each firing.
    Daily,
    /// Advance by seven calendar days after each firing.
    Weekly,
    /// Advance by one calendar month (day-of-month clamped) after each firing.
    Monthly,
    /// Unrecognised store value; treated as non-recurring.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Cycle::Once => "once",
            Cycle::Daily => "daily",
            Cycle::Weekly => "weekly",
            Cycle::Monthly => "monthly",
            Cycle::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// A stored reminder row.
///
/// Only `next_date` is ever written back by this service; everything else is
/// created and edited elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    /// Primary key. Compared as a string everywhere.
    pub id: String,
    /// Display title, used as the notification title.
    pub name: String,
    /// Free-text body for the notification. Falls back to a stock phrase
    /// when absent.
    #[serde(default)]
    pub notes: Option<String>,
    /// Minute-precision due timestamp (`YYYY-MM-DDTHH:MM`, UTC wall clock).
    /// `None` means the reminder has no further occurrence.
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub cycle: Cycle,
    /// A device id, the sentinel `"all"`, or absent (same as `"all"`).
    #[serde(default)]
    pub target_device_id: Option<String>,
    /// Per-reminder criticality override. ORed with the global default.
    #[serde(default)]
    pub is_critical: bool,
}

impl Reminder {
    /// True when the selector targets every known device.
    pub fn targets_all_devices(&self) -> bool {
        match self.target_device_id.as_deref() {
            None => true,
            Some(sel) => sel == ALL_DEVICES,
        }
    }
}

/// A registered delivery endpoint. Read-only to this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    /// Bark device key: either a short token for the hosted service or a
    /// full `http(s)://` base URL of a self-hosted instance.
    pub bark_key: String,
}

/// Global settings singleton. The row is optional; absence means every
/// default applies (notably: non-critical delivery).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Default criticality applied when a reminder's own flag is unset.
    #[serde(default)]
    pub bark_critical: bool,
}
