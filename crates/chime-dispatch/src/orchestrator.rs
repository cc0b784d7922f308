use chrono::{Duration, NaiveDateTime};
use futures_util::future;
use tracing::{debug, info, warn};

use chime_core::reminder::{Device, Reminder, Settings};
use chime_push::PushSender;
use chime_store::ReminderStore;

use crate::error::DispatchError;
use crate::recurrence::next_occurrence;
use crate::select::{effective_criticality, resolve_targets, select_due};
use crate::types::{DispatchReport, ReminderOutcome};

/// Notification body used when a reminder carries no notes.
const DEFAULT_BODY: &str = "⏰ Time's up — take care of it now";

/// Drives one complete dispatch cycle against a store and a push backend.
///
/// Holds no state between cycles; overlapping invocations are tolerated
/// (a reminder whose window is wide relative to the trigger cadence may
/// fire in both, since there is no claim step before delivery).
pub struct Dispatcher<S, P> {
    store: S,
    push: P,
    window: Duration,
}

impl<S: ReminderStore, P: PushSender> Dispatcher<S, P> {
    /// `window` is the symmetric dispatch tolerance around "now".
    pub fn new(store: S, push: P, window: Duration) -> Self {
        Self {
            store,
            push,
            window,
        }
    }

    /// Run one cycle at the instant `now`.
    ///
    /// The three snapshot reads run concurrently and must all succeed;
    /// partial data is never processed. Due reminders are then processed
    /// independently and concurrently; a failure inside one reminder
    /// (delivery or update) is logged and only drops that reminder from
    /// the report.
    pub async fn run_cycle(&self, now: NaiveDateTime) -> Result<DispatchReport, DispatchError> {
        let (reminders, devices, settings) = tokio::try_join!(
            self.store.fetch_reminders(),
            self.store.fetch_devices(),
            self.store.fetch_settings(),
        )?;
        let settings = settings.unwrap_or_default();

        let due = select_due(&reminders, now, self.window);
        info!(
            total = reminders.len(),
            due = due.len(),
            "dispatch cycle: snapshot loaded"
        );

        let outcomes = future::join_all(
            due.iter()
                .map(|r| self.process_reminder(r, &devices, &settings)),
        )
        .await;

        let details: Vec<ReminderOutcome> = outcomes.into_iter().flatten().collect();
        Ok(DispatchReport {
            sent: details.len(),
            details,
        })
    }

    /// Deliver one due reminder and advance its schedule.
    ///
    /// Returns `None` when the reminder resolves to zero devices (silently
    /// skipped) or when the store update fails. Deliveries within the
    /// reminder fan out concurrently; the update is sequenced after all of
    /// them have settled.
    async fn process_reminder(
        &self,
        reminder: &Reminder,
        devices: &[Device],
        settings: &Settings,
    ) -> Option<ReminderOutcome> {
        let targets = resolve_targets(reminder, devices);
        if targets.is_empty() {
            debug!(reminder_id = %reminder.id, "no matching devices; skipping");
            return None;
        }

        let critical = effective_criticality(reminder, settings);
        let body = reminder.notes.as_deref().unwrap_or(DEFAULT_BODY);

        // Best-effort fan-out: a failed delivery is logged and does not
        // block the remaining devices or the schedule advancement.
        future::join_all(targets.iter().map(|dev| async move {
            if let Err(e) = self
                .push
                .deliver(&dev.bark_key, &reminder.name, body, critical)
                .await
            {
                warn!(
                    reminder_id = %reminder.id,
                    device = %dev.name,
                    error = %e,
                    "delivery failed — cycle continues"
                );
            }
        }))
        .await;

        // Due reminders always carry a timestamp; selection guarantees it.
        let current_due = reminder.next_date.as_deref()?;
        let next = next_occurrence(current_due, reminder.cycle);

        if let Err(e) = self
            .store
            .update_next_date(&reminder.id, next.as_deref())
            .await
        {
            warn!(reminder_id = %reminder.id, error = %e, "due timestamp update failed");
            return None;
        }

        debug!(
            reminder_id = %reminder.id,
            next_date = ?next,
            devices = targets.len(),
            "reminder processed"
        );

        Some(ReminderOutcome {
            id: reminder.id.clone(),
            sent_to: targets.iter().map(|d| d.name.clone()).collect(),
            next_date: next,
        })
    }
}
