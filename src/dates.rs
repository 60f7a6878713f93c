use std::mem;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::structs::WeekOfMonth;

fn days_until_weekday(from: NaiveDate, weekday: Weekday) -> i64 {
    i64::from((weekday.num_days_from_monday() + 7 - from.weekday().num_days_from_monday()) % 7)
}

/// Dates falling on `weekday`, starting from its first occurrence on or
/// after January 1 of `start_year` and stepping a week at a time.
pub fn weekly_dates(
    start_year: i32,
    end_year: i32,
    weekday: Weekday,
    count: usize,
) -> WeeklyDates {
    let jan_first = NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap();

    WeeklyDates {
        next: jan_first + Duration::days(days_until_weekday(jan_first, weekday)),
        end_year,
        remaining: count,
    }
}

pub struct WeeklyDates {
    next: NaiveDate,
    end_year: i32,
    remaining: usize,
}

impl Iterator for WeeklyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 || self.next.year() > self.end_year {
            return None;
        }

        self.remaining -= 1;
        let following = self.next + Duration::weeks(1);
        Some(mem::replace(&mut self.next, following))
    }
}

/// One date per month, selected by `week`: the nth occurrence of `weekday`
/// (clamped to the month, never skipping it) or the last occurrence.
///
/// Panics if `week` is `Nth` outside 1..=4; that can only come from a bad
/// authored schedule.
pub fn monthly_dates(
    start_year: i32,
    end_year: i32,
    weekday: Weekday,
    week: WeekOfMonth,
    count: usize,
) -> MonthlyDates {
    if let WeekOfMonth::Nth(n) = week {
        assert!((1..=4).contains(&n), "week of month out of range: {n}");
    }

    MonthlyDates {
        month_start: NaiveDate::from_ymd_opt(start_year, 1, 1).unwrap(),
        start_year,
        end_year,
        weekday,
        week,
        remaining: count,
    }
}

pub struct MonthlyDates {
    month_start: NaiveDate,
    start_year: i32,
    end_year: i32,
    weekday: Weekday,
    week: WeekOfMonth,
    remaining: usize,
}

impl Iterator for MonthlyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while self.remaining > 0 && self.month_start.year() <= self.end_year {
            let date = occurrence_in_month(self.month_start, self.weekday, self.week);
            self.month_start = self.month_start + Months::new(1);

            if date.year() >= self.start_year && date.year() <= self.end_year {
                self.remaining -= 1;
                return Some(date);
            }
        }

        None
    }
}

fn occurrence_in_month(month_start: NaiveDate, weekday: Weekday, week: WeekOfMonth) -> NaiveDate {
    match week {
        WeekOfMonth::Nth(n) => {
            let first = month_start + Duration::days(days_until_weekday(month_start, weekday));
            let advanced = first + Duration::weeks(i64::from(n) - 1);

            if advanced.month() == month_start.month() {
                advanced
            } else {
                advanced - Duration::weeks(1)
            }
        }
        WeekOfMonth::Last => {
            let last = (month_start + Months::new(1)).pred_opt().unwrap();
            let back = (last.weekday().num_days_from_monday() + 7
                - weekday.num_days_from_monday())
                % 7;
            last - Duration::days(i64::from(back))
        }
    }
}

/// Easter Sunday for `year`, via the Meeus/Jones/Butcher computus.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}
