//! RFC-822 dates as required by RSS `pubDate`.
//!
//! Day and month names come from fixed English tables so the output never
//! depends on the host locale.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::{SyndicationError, SyndicationResult};

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats `date` as `ddd, dd MMM yyyy HH:mm:ss GMT`.
///
/// The year must fit in four digits; dates outside 0..=9999 fail.
pub fn format(date: &DateTime<Utc>) -> SyndicationResult<String> {
    if !(0..=9999).contains(&date.year()) {
        return Err(SyndicationError::DateOutOfRange(*date));
    }
    Ok(format!(
        "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
        DAYS[date.weekday().num_days_from_monday() as usize],
        date.day(),
        MONTHS[date.month0() as usize],
        date.year(),
        date.hour(),
        date.minute(),
        date.second(),
    ))
}
