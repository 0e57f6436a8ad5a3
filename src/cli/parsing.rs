//! CLI parsing helpers for clap value parsers.

use std::str::FromStr;

use time::PrimitiveDateTime;
use unic_langid::LanguageIdentifier;

use crate::format::parse_wall_clock;

pub(super) fn parse_locale(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("locale must not be empty".to_owned());
    }
    LanguageIdentifier::from_str(&trimmed.replace('_', "-"))
        .map(|_| trimmed.to_owned())
        .map_err(|_| format!("invalid locale '{trimmed}'"))
}

/// Parse a timestamp argument; `now` is kept symbolic and resolved at run time.
pub(super) fn parse_timestamp(s: &str) -> Result<Timestamp, String> {
    if s.trim().eq_ignore_ascii_case("now") {
        return Ok(Timestamp::Now);
    }
    parse_wall_clock(s)
        .map(Timestamp::At)
        .map_err(|err| format!("invalid timestamp '{s}': {err}; expected YYYY-MM-DDTHH:MM[:SS] or 'now'"))
}

/// A timestamp supplied on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// The current UTC time when the command runs.
    Now,
    /// A fixed wall-clock reading.
    At(PrimitiveDateTime),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[rstest]
    #[case("km")]
    #[case("en-US")]
    #[case("km_KH")]
    fn accepts_well_formed_locales(#[case] raw: &str) {
        assert_eq!(parse_locale(raw).as_deref(), Ok(raw));
    }

    #[rstest]
    #[case("")]
    #[case("not a locale")]
    fn rejects_malformed_locales(#[case] raw: &str) {
        assert!(parse_locale(raw).is_err());
    }

    #[rstest]
    fn now_is_symbolic() {
        assert_eq!(parse_timestamp("NOW"), Ok(Timestamp::Now));
    }

    #[rstest]
    fn fixed_timestamps_parse() {
        assert_eq!(
            parse_timestamp("2024-03-20T14:05"),
            Ok(Timestamp::At(datetime!(2024-03-20 14:05)))
        );
    }
}
