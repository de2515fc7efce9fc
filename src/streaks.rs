//! Login and streak tracking
//!
//! Calendar-day logic: first-visit-of-day detection and consecutive-day
//! streaks, at day granularity (time of day does not matter).

use chrono::{Local, NaiveDate};

use crate::models::UserStats;

/// Format a date as its YYYY-MM-DD day bucket
pub fn day_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Get today's date as YYYY-MM-DD string
pub fn today_string() -> String {
    day_string(Local::now().date_naive())
}

/// Whether `last_day` is exactly one calendar day away from `today`.
///
/// An empty or unparseable prior date is never consecutive.
pub fn is_consecutive_day(last_day: &str, today: NaiveDate) -> bool {
    if last_day.is_empty() {
        return false;
    }
    let Ok(last) = NaiveDate::parse_from_str(last_day, "%Y-%m-%d") else {
        return false;
    };
    (today - last).num_days().abs() == 1
}

/// Apply the first-visit-of-day transition to the counters.
///
/// Returns true if today is a new login day (the caller re-evaluates and
/// persists), false if today was already counted.
pub fn apply_daily_login(stats: &mut UserStats, today: NaiveDate) -> bool {
    let today_str = day_string(today);
    if stats.last_login_date == today_str {
        return false;
    }

    stats.daily_logins += 1;
    if is_consecutive_day(&stats.last_login_date, today) {
        stats.consecutive_logins += 1;
    } else {
        stats.consecutive_logins = 1;
    }
    stats.last_login_date = today_str;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_string() {
        assert_eq!(day_string(date(2023, 12, 28)), "2023-12-28");
    }

    #[test]
    fn test_is_consecutive_day() {
        let today = date(2024, 6, 15);
        assert!(is_consecutive_day("2024-06-14", today));
        assert!(is_consecutive_day("2024-06-16", today)); // absolute difference
        assert!(!is_consecutive_day("2024-06-13", today));
        assert!(!is_consecutive_day("2024-06-15", today));
        assert!(!is_consecutive_day("", today));
        assert!(!is_consecutive_day("not-a-date", today));
    }

    #[test]
    fn test_first_login_ever() {
        let mut stats = UserStats::default();
        assert!(apply_daily_login(&mut stats, date(2024, 6, 15)));
        assert_eq!(stats.daily_logins, 1);
        assert_eq!(stats.consecutive_logins, 1);
        assert_eq!(stats.last_login_date, "2024-06-15");
    }

    #[test]
    fn test_same_day_is_idempotent() {
        let mut stats = UserStats::default();
        apply_daily_login(&mut stats, date(2024, 6, 15));
        assert!(!apply_daily_login(&mut stats, date(2024, 6, 15)));
        assert_eq!(stats.daily_logins, 1);
        assert_eq!(stats.consecutive_logins, 1);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let mut stats = UserStats::default();
        apply_daily_login(&mut stats, date(2024, 6, 15));
        assert!(apply_daily_login(&mut stats, date(2024, 6, 16)));
        assert_eq!(stats.daily_logins, 2);
        assert_eq!(stats.consecutive_logins, 2);
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = UserStats::default();
        apply_daily_login(&mut stats, date(2024, 6, 15));
        apply_daily_login(&mut stats, date(2024, 6, 16));
        assert!(apply_daily_login(&mut stats, date(2024, 6, 18)));
        assert_eq!(stats.daily_logins, 3);
        assert_eq!(stats.consecutive_logins, 1);
    }

    #[test]
    fn test_month_boundary() {
        let mut stats = UserStats::default();
        apply_daily_login(&mut stats, date(2024, 6, 30));
        apply_daily_login(&mut stats, date(2024, 7, 1));
        assert_eq!(stats.consecutive_logins, 2);
    }
}
