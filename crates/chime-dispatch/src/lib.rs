//! `chime-dispatch` — the dispatch engine: one complete reminder cycle.
//!
//! # Overview
//!
//! A cycle pulls a snapshot (reminders, devices, settings) from the store,
//! selects the reminders whose due instant falls inside the dispatch
//! window, pushes a notification per resolved target device, advances each
//! fired reminder to its next occurrence, and returns a summary report.
//!
//! # Cycle variants
//!
//! | Cycle     | Advancement                                   |
//! |-----------|-----------------------------------------------|
//! | `once`    | Due timestamp cleared; never fires again      |
//! | `daily`   | +1 calendar day                               |
//! | `weekly`  | +7 calendar days                              |
//! | `monthly` | +1 calendar month, day-of-month clamped       |
//! | unknown   | Treated as `once`                             |

pub mod error;
pub mod orchestrator;
pub mod recurrence;
pub mod select;
pub mod types;

pub use error::DispatchError;
pub use orchestrator::Dispatcher;
pub use recurrence::next_occurrence;
pub use select::{effective_criticality, resolve_targets, select_due};
pub use types::{DispatchReport, ReminderOutcome};
