use chrono::{Duration, NaiveDateTime};

use chime_core::reminder::{Device, Reminder, Settings};

use crate::recurrence::parse_due;

/// Filter the snapshot down to the reminders due at `now`.
///
/// A reminder is due iff `|due − now| ≤ window` (closed interval on both
/// ends). Missing or unparseable due timestamps never match. Input order
/// is preserved so the cycle report is deterministic for a given snapshot.
pub fn select_due<'a>(
    reminders: &'a [Reminder],
    now: NaiveDateTime,
    window: Duration,
) -> Vec<&'a Reminder> {
    reminders.iter().filter(|r| is_due(r, now, window)).collect()
}

fn is_due(reminder: &Reminder, now: NaiveDateTime, window: Duration) -> bool {
    let Some(raw) = reminder.next_date.as_deref() else {
        return false;
    };
    let Some(due) = parse_due(raw) else {
        return false;
    };
    let delta = due - now;
    delta <= window && delta >= -window
}

/// Resolve a reminder's selector against the device snapshot.
///
/// A specific selector matches at most one device (ids compared as
/// strings); `"all"` or an absent selector matches every device. An empty
/// result means the reminder is skipped entirely.
pub fn resolve_targets<'a>(reminder: &Reminder, devices: &'a [Device]) -> Vec<&'a Device> {
    if reminder.targets_all_devices() {
        return devices.iter().collect();
    }
    let selector = reminder.target_device_id.as_deref().unwrap_or_default();
    devices.iter().filter(|d| d.id == selector).collect()
}

/// A reminder is delivered critical when its own flag is set OR the global
/// default says so.
pub fn effective_criticality(reminder: &Reminder, settings: &Settings) -> bool {
    reminder.is_critical || settings.bark_critical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(id: &str, next_date: Option<&str>) -> Reminder {
        Reminder {
            id: id.to_string(),
            name: format!("reminder {id}"),
            notes: None,
            next_date: next_date.map(String::from),
            cycle: Default::default(),
            target_device_id: None,
            is_critical: false,
        }
    }

    fn device(id: &str) -> Device {
        Device {
            id: id.to_string(),
            name: format!("device {id}"),
            bark_key: format!("key-{id}"),
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        parse_due(s).unwrap()
    }

    #[test]
    fn due_inside_window_is_selected() {
        let reminders = vec![reminder("r1", Some("2026-03-14T09:30"))];
        let due = select_due(&reminders, at("2026-03-14T09:30"), Duration::minutes(1));
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn window_boundaries_are_inclusive_both_sides() {
        let now = at("2026-03-14T09:30");
        let window = Duration::minutes(1);

        let ahead = vec![reminder("r1", Some("2026-03-14T09:31"))];
        assert_eq!(select_due(&ahead, now, window).len(), 1);

        let behind = vec![reminder("r2", Some("2026-03-14T09:29"))];
        assert_eq!(select_due(&behind, now, window).len(), 1);
    }

    #[test]
    fn outside_window_is_not_selected() {
        let now = at("2026-03-14T09:30");
        let window = Duration::minutes(1);

        let ahead = vec![reminder("r1", Some("2026-03-14T09:32"))];
        assert!(select_due(&ahead, now, window).is_empty());

        let behind = vec![reminder("r2", Some("2026-03-14T09:28"))];
        assert!(select_due(&behind, now, window).is_empty());
    }

    #[test]
    fn missing_due_timestamp_is_never_due() {
        let reminders = vec![reminder("r1", None)];
        let due = select_due(&reminders, at("2026-03-14T09:30"), Duration::minutes(60));
        assert!(due.is_empty());
    }

    #[test]
    fn unparseable_due_timestamp_is_never_due() {
        let reminders = vec![reminder("r1", Some("not-a-date"))];
        let due = select_due(&reminders, at("2026-03-14T09:30"), Duration::minutes(60));
        assert!(due.is_empty());
    }

    #[test]
    fn snapshot_order_is_preserved() {
        let reminders = vec![
            reminder("b", Some("2026-03-14T09:31")),
            reminder("a", Some("2026-03-14T09:29")),
            reminder("c", Some("2026-03-14T09:30")),
        ];
        let due = select_due(&reminders, at("2026-03-14T09:30"), Duration::minutes(1));
        let ids: Vec<&str> = due.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn all_selector_resolves_to_every_device() {
        let devices = vec![device("d1"), device("d2")];
        let mut r = reminder("r1", None);
        r.target_device_id = Some("all".to_string());
        assert_eq!(resolve_targets(&r, &devices).len(), 2);

        r.target_device_id = None;
        assert_eq!(resolve_targets(&r, &devices).len(), 2);
    }

    #[test]
    fn specific_selector_resolves_to_the_matching_device() {
        let devices = vec![device("d1"), device("d2")];
        let mut r = reminder("r1", None);
        r.target_device_id = Some("d2".to_string());
        let targets = resolve_targets(&r, &devices);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, "d2");
    }

    #[test]
    fn unmatched_selector_resolves_to_nothing() {
        let devices = vec![device("d1")];
        let mut r = reminder("r1", None);
        r.target_device_id = Some("d9".to_string());
        assert!(resolve_targets(&r, &devices).is_empty());
    }

    #[test]
    fn criticality_is_or_of_flag_and_default() {
        let mut r = reminder("r1", None);
        for (own, global, expected) in [
            (false, false, false),
            (true, false, true),
            (false, true, true),
            (true, true, true),
        ] {
            r.is_critical = own;
            let settings = Settings {
                bark_critical: global,
            };
            assert_eq!(effective_criticality(&r, &settings), expected);
        }
    }
}
