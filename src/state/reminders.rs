//! Daily reminder schedule.
//!
//! Two fixed local-time reminders per day, handed to the platform's
//! scheduling collaborator when the app is backgrounded and cancelled
//! when it returns to the foreground. Entirely independent of session
//! state; this module only describes when and what to fire.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One daily local-time trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub hour: u32,
    pub minute: u32,
    pub title: &'static str,
    pub body: &'static str,
}

impl Reminder {
    pub fn trigger_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// First firing strictly after `now`: today if the trigger time is
    /// still ahead, otherwise tomorrow.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> NaiveDateTime {
        let today = now.date().and_time(self.trigger_time());
        if today > now {
            today
        } else {
            today + Duration::days(1)
        }
    }
}

/// Morning reminder, 9:00 AM local time.
pub const MORNING_REMINDER: Reminder = Reminder {
    hour: 9,
    minute: 0,
    title: "Imposter: Morning Briefing!",
    body: "The group is gathering for a morning round. Can you spot the liar?",
};

/// Evening reminder, 6:00 PM local time.
pub const EVENING_REMINDER: Reminder = Reminder {
    hour: 18,
    minute: 0,
    title: "Imposter: Party Time!",
    body: "Evening is here! Perfect time for a round of Imposter. Who's sus?",
};

/// The full daily schedule, in firing order.
pub fn daily_reminders() -> [Reminder; 2] {
    [MORNING_REMINDER, EVENING_REMINDER]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_next_occurrence_later_today() {
        let next = MORNING_REMINDER.next_occurrence(at(7, 30));
        assert_eq!(next, at(9, 0));
    }

    #[test]
    fn test_next_occurrence_rolls_to_tomorrow() {
        let next = MORNING_REMINDER.next_occurrence(at(9, 0));
        assert_eq!(next, at(9, 0) + Duration::days(1));

        let next = EVENING_REMINDER.next_occurrence(at(23, 59));
        assert_eq!(next, at(18, 0) + Duration::days(1));
    }

    #[test]
    fn test_schedule_order() {
        let [morning, evening] = daily_reminders();
        assert!(morning.trigger_time() < evening.trigger_time());
    }
}
