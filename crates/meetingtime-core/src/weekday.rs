use chrono::{Datelike, Weekday};

/// Returns the day of the week of `date` and which occurrence of that weekday
/// it is within its month, counting from 1.
///
/// The 1st through 7th of a month are always the first occurrence of their
/// weekday, the 8th through 14th the second, and so on, so the ordinal
/// follows directly from the day of the month.
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use meetingtime_core::weekday::ordinal_weekday;
///
/// // 2016-09-14 is the second Wednesday of September 2016.
/// let date = NaiveDate::from_ymd_opt(2016, 9, 14).unwrap();
/// assert_eq!(ordinal_weekday(&date), (Weekday::Wed, 2));
/// ```
#[inline]
pub fn ordinal_weekday<D: Datelike>(date: &D) -> (Weekday, u32) {
    (date.weekday(), date.day0() / 7 + 1)
}

/// English ordinal suffix for `n`: "st", "nd", "rd" or "th".
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (1, rem) if rem != 11 => "st",
        (2, rem) if rem != 12 => "nd",
        (3, rem) if rem != 13 => "rd",
        _ => "th",
    }
}
