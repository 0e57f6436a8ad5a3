//! Locale-aware timestamp rendering.
//!
//! English timestamps use the conventional abbreviated US layout
//! (`Mar 20, 2024, 2:05 PM`). Khmer timestamps are assembled by hand: the
//! day precedes the month name, every digit is replaced with its Khmer
//! numeral, and the half-day is written out as a word rather than AM/PM.

mod khmer;

pub use khmer::{Digit, Meridiem, khmer_digits, month_name, to_khmer_numerals};

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::language::Language;

const INPUT_WITH_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const INPUT_WITHOUT_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");

/// Convert a 24-hour clock hour to the 12-hour clock, mapping 0 to 12.
#[must_use]
pub const fn twelve_hour(hour: u8) -> u8 {
    match hour {
        0 => 12,
        13..=23 => hour - 12,
        _ => hour,
    }
}

/// Render a wall-clock timestamp for `language`.
///
/// # Examples
///
/// ```
/// use pharmadesk::format::format_datetime;
/// use pharmadesk::language::Language;
/// use time::macros::datetime;
///
/// let stamp = datetime!(2024-03-20 14:05);
/// assert_eq!(format_datetime(stamp, Language::En), "Mar 20, 2024, 2:05 PM");
/// assert_eq!(format_datetime(stamp, Language::Km), "២០ មីនា ២០២៤, ២:០៥ ល្ងាច");
/// ```
#[must_use]
pub fn format_datetime(datetime: PrimitiveDateTime, language: Language) -> String {
    match language {
        Language::En => format_english(datetime),
        Language::Km => format_khmer(datetime),
    }
}

/// Render an offset timestamp using its local wall-clock reading.
#[must_use]
pub fn format_offset_datetime(datetime: OffsetDateTime, language: Language) -> String {
    format_datetime(PrimitiveDateTime::new(datetime.date(), datetime.time()), language)
}

fn format_english(datetime: PrimitiveDateTime) -> String {
    let hour = datetime.hour();
    format!(
        "{} {}, {}, {}:{:02} {}",
        short_month(datetime.month()),
        datetime.day(),
        datetime.year(),
        twelve_hour(hour),
        datetime.minute(),
        Meridiem::from_hour(hour).english(),
    )
}

fn format_khmer(datetime: PrimitiveDateTime) -> String {
    let hour = datetime.hour();
    format!(
        "{} {} {}, {}:{} {}",
        to_khmer_numerals(datetime.day()),
        month_name(datetime.month()),
        to_khmer_numerals(datetime.year()),
        to_khmer_numerals(twelve_hour(hour)),
        khmer_digits(&format!("{:02}", datetime.minute())),
        Meridiem::from_hour(hour).khmer(),
    )
}

const fn short_month(month: time::Month) -> &'static str {
    use time::Month;
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Parse a `YYYY-MM-DDTHH:MM[:SS]` wall-clock timestamp.
///
/// # Errors
///
/// Returns the parse failure for the minute-precision layout when neither
/// layout matches.
pub fn parse_wall_clock(raw: &str) -> Result<PrimitiveDateTime, time::error::Parse> {
    let trimmed = raw.trim();
    PrimitiveDateTime::parse(trimmed, INPUT_WITH_SECONDS)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, INPUT_WITHOUT_SECONDS))
}

#[cfg(test)]
mod tests;
