use crate::types::{Recurrence, Weekday};

pub const SECONDS_PER_DAY: u64 = 86_400;
const DAYS_PER_WEEK: u64 = 7;

/// 1970-01-01 was a Thursday.
const EPOCH_WEEKDAY: u64 = 4;

/// Next UTC midnight on or after `now` that falls on `weekday`.
///
/// - `Weekly`: the nearest matching day. When `now` is exactly midnight of a
///   matching day that instant is returned; any later moment of that day
///   rolls over to the following week.
/// - `Monthly`: the first matching day on or after the same day-of-month in
///   the following month (clamped to that month's last day), so the result
///   is always four to five weeks out.
///
/// Results past the representable range saturate at `u64::MAX`.
pub fn next_occurrence(weekday: Weekday, recurrence: Recurrence, now: u64) -> u64 {
    match recurrence {
        Recurrence::Weekly => next_weekly(weekday, now),
        Recurrence::Monthly => next_monthly(weekday, now),
    }
}

fn next_weekly(weekday: Weekday, now: u64) -> u64 {
    let today = now / SECONDS_PER_DAY;
    let candidate = to_timestamp(today + days_until(weekday_of(today), weekday));
    if candidate < now {
        candidate.saturating_add(DAYS_PER_WEEK * SECONDS_PER_DAY)
    } else {
        candidate
    }
}

fn next_monthly(weekday: Weekday, now: u64) -> u64 {
    let (year, month, day) = civil_from_days(now / SECONDS_PER_DAY);
    let (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    let anchor = days_from_civil(year, month, day.min(days_in_month(year, month)));
    to_timestamp(anchor + days_until(weekday_of(anchor), weekday))
}

fn to_timestamp(days: u64) -> u64 {
    days.checked_mul(SECONDS_PER_DAY).unwrap_or(u64::MAX)
}

fn days_in_month(year: u64, month: u64) -> u64 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    days_from_civil(next_year, next_month, 1) - days_from_civil(year, month, 1)
}

fn weekday_of(days: u64) -> u64 {
    (days + EPOCH_WEEKDAY) % DAYS_PER_WEEK
}

fn days_until(from: u64, to: Weekday) -> u64 {
    (to.index() + DAYS_PER_WEEK - from) % DAYS_PER_WEEK
}

// Proleptic Gregorian conversions over eras of 400 years (146_097 days),
// with years starting in March so the leap day ends the year.

fn days_from_civil(year: u64, month: u64, day: u64) -> u64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year / 400;
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let days = days + 719_468;
    let era = days / 146_097;
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01 00:00:00 UTC, a Monday.
    const JAN_1_2024: u64 = 1_704_067_200;
    const HOUR: u64 = 3_600;

    #[test]
    fn test_civil_conversions() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(days_from_civil(2024, 1, 1), JAN_1_2024 / SECONDS_PER_DAY);
        assert_eq!(days_from_civil(2024, 3, 1) - days_from_civil(2024, 2, 1), 29);
        assert_eq!(civil_from_days(JAN_1_2024 / SECONDS_PER_DAY), (2024, 1, 1));
        assert_eq!(civil_from_days(days_from_civil(2025, 12, 31)), (2025, 12, 31));
        assert_eq!(weekday_of(JAN_1_2024 / SECONDS_PER_DAY), Weekday::Monday.index());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_weekly_same_day_at_midnight() {
        let next = next_occurrence(Weekday::Monday, Recurrence::Weekly, JAN_1_2024);
        assert_eq!(next, JAN_1_2024);
    }

    #[test]
    fn test_weekly_same_day_after_midnight_rolls_a_week() {
        let next = next_occurrence(Weekday::Monday, Recurrence::Weekly, JAN_1_2024 + 10 * HOUR);
        assert_eq!(next, JAN_1_2024 + 7 * SECONDS_PER_DAY);
    }

    #[test]
    fn test_weekly_later_in_week() {
        // Monday 10:00 -> Sunday 2024-01-07
        let next = next_occurrence(Weekday::Sunday, Recurrence::Weekly, JAN_1_2024 + 10 * HOUR);
        assert_eq!(next, JAN_1_2024 + 6 * SECONDS_PER_DAY);

        // Monday -> Tuesday is the next day
        let next = next_occurrence(Weekday::Tuesday, Recurrence::Weekly, JAN_1_2024 + HOUR);
        assert_eq!(next, JAN_1_2024 + SECONDS_PER_DAY);
    }

    #[test]
    fn test_monthly_skips_to_next_month() {
        // Monday 2024-01-01 -> on or after Thursday 2024-02-01 -> Monday 2024-02-05
        let next = next_occurrence(Weekday::Monday, Recurrence::Monthly, JAN_1_2024);
        assert_eq!(next, JAN_1_2024 + 35 * SECONDS_PER_DAY);

        // -> Friday 2024-02-02
        let next = next_occurrence(Weekday::Friday, Recurrence::Monthly, JAN_1_2024 + HOUR);
        assert_eq!(next, JAN_1_2024 + 32 * SECONDS_PER_DAY);

        // 2024-01-15 -> on or after 2024-02-15 -> Sunday 2024-02-18
        let next = next_occurrence(
            Weekday::Sunday,
            Recurrence::Monthly,
            JAN_1_2024 + 14 * SECONDS_PER_DAY,
        );
        assert_eq!(next, JAN_1_2024 + 48 * SECONDS_PER_DAY);
    }

    #[test]
    fn test_monthly_late_in_month() {
        // 2024-01-31 clamps to 2024-02-29 (Thursday) -> Monday 2024-03-04
        let jan_31 = JAN_1_2024 + 30 * SECONDS_PER_DAY;
        let next = next_occurrence(Weekday::Monday, Recurrence::Monthly, jan_31);
        assert_eq!(civil_from_days(next / SECONDS_PER_DAY), (2024, 3, 4));
        assert_eq!(next - jan_31, 33 * SECONDS_PER_DAY);

        // Weekly from the same instant is only days away
        let weekly = next_occurrence(Weekday::Monday, Recurrence::Weekly, jan_31);
        assert_eq!(weekly - jan_31, 5 * SECONDS_PER_DAY);
    }

    #[test]
    fn test_monthly_year_rollover() {
        // 2024-12-10 -> on or after 2025-01-10, itself a Friday
        let dec_10_2024 = days_from_civil(2024, 12, 10) * SECONDS_PER_DAY;
        let next = next_occurrence(Weekday::Friday, Recurrence::Monthly, dec_10_2024);
        assert_eq!(next, 1_736_467_200);
        assert_eq!(civil_from_days(next / SECONDS_PER_DAY), (2025, 1, 10));
    }

    #[test]
    fn test_saturates_near_max_timestamp() {
        let now = u64::MAX - 1_000;
        assert_eq!(next_occurrence(Weekday::Monday, Recurrence::Weekly, now), u64::MAX);
        assert_eq!(next_occurrence(Weekday::Monday, Recurrence::Monthly, now), u64::MAX);
    }

    #[test]
    fn test_deterministic() {
        let now = JAN_1_2024 + 123_456;
        for recurrence in [Recurrence::Weekly, Recurrence::Monthly] {
            let a = next_occurrence(Weekday::Wednesday, recurrence, now);
            let b = next_occurrence(Weekday::Wednesday, recurrence, now);
            assert_eq!(a, b);
            assert!(a >= now);
            assert_eq!(weekday_of(a / SECONDS_PER_DAY), Weekday::Wednesday.index());
        }

        let monthly = next_occurrence(Weekday::Wednesday, Recurrence::Monthly, now);
        assert!(monthly >= now + 28 * SECONDS_PER_DAY);
        assert!(monthly < now + 42 * SECONDS_PER_DAY);
    }
}
