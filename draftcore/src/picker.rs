//! Date and time picker state, one spinner per field

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const FIRST_YEAR: i32 = 2023;
pub const LAST_YEAR: i32 = 2033;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    pub day: u32,
    /// 1-based
    pub month: u32,
    pub year: i32,
}

impl DatePicker {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            day: now.day(),
            month: now.month(),
            year: now.year().clamp(FIRST_YEAR, LAST_YEAR),
        }
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or(MONTHS[0])
    }

    /// `YYYY-MM-DD`. Days past the end of the month clamp to its last day.
    pub fn select(&self) -> String {
        let month = self.month.clamp(1, 12);
        let day = self.day.clamp(1, days_in_month(self.year, month));
        format!("{:04}-{:02}-{:02}", self.year, month, day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePicker {
    pub hour: u32,
    pub minute: u32,
}

impl TimePicker {
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self { hour: now.hour(), minute: now.minute() }
    }

    /// `HH:MM`
    pub fn select(&self) -> String {
        format!("{:02}:{:02}", self.hour.min(23), self.minute.min(59))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|d| d.and_hms_opt(h, mi, 0))
            .unwrap()
    }

    #[test]
    fn test_date_select_pads() {
        let picker = DatePicker { day: 1, month: 5, year: 2024 };
        assert_eq!(picker.select(), "2024-05-01");
        assert_eq!(picker.month_name(), "May");
    }

    #[test]
    fn test_date_clamps_day_to_month() {
        assert_eq!(DatePicker { day: 31, month: 2, year: 2024 }.select(), "2024-02-29");
        assert_eq!(DatePicker { day: 31, month: 2, year: 2023 }.select(), "2023-02-28");
        assert_eq!(DatePicker { day: 31, month: 4, year: 2030 }.select(), "2030-04-30");
        assert_eq!(DatePicker { day: 31, month: 12, year: 2030 }.select(), "2030-12-31");
    }

    #[test]
    fn test_starting_at_now() {
        let now = at(2026, 10, 19, 8, 4);
        assert_eq!(DatePicker::starting_at(now).select(), "2026-10-19");
        assert_eq!(TimePicker::starting_at(now).select(), "08:04");
        // year spinner only offers 2023..=2033
        assert_eq!(DatePicker::starting_at(at(2040, 1, 2, 0, 0)).year, LAST_YEAR);
    }

    #[test]
    fn test_time_select() {
        assert_eq!(TimePicker { hour: 14, minute: 30 }.select(), "14:30");
        assert_eq!(TimePicker { hour: 0, minute: 0 }.select(), "00:00");
    }
}
