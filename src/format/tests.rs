use super::*;
use rstest::rstest;
use time::macros::{datetime, offset};

#[rstest]
#[case(datetime!(2024-03-20 14:05), "Mar 20, 2024, 2:05 PM")]
#[case(datetime!(2024-03-20 00:30), "Mar 20, 2024, 12:30 AM")]
#[case(datetime!(2024-12-01 12:00), "Dec 1, 2024, 12:00 PM")]
#[case(datetime!(2023-07-09 09:59), "Jul 9, 2023, 9:59 AM")]
fn english_matches_us_layout(#[case] stamp: PrimitiveDateTime, #[case] expected: &str) {
    assert_eq!(format_datetime(stamp, Language::En), expected);
}

#[rstest]
#[case(datetime!(2024-03-20 14:05), "២០ មីនា ២០២៤, ២:០៥ ល្ងាច")]
#[case(datetime!(2024-03-20 00:00), "២០ មីនា ២០២៤, ១២:០០ ព្រឹក")]
#[case(datetime!(2025-01-01 11:45), "១ មករា ២០២៥, ១១:៤៥ ព្រឹក")]
#[case(datetime!(2024-10-15 12:10), "១៥ តុលា ២០២៤, ១២:១០ ល្ងាច")]
fn khmer_substitutes_numerals_and_names(#[case] stamp: PrimitiveDateTime, #[case] expected: &str) {
    assert_eq!(format_datetime(stamp, Language::Km), expected);
}

#[rstest]
fn years_are_not_zero_padded() {
    let stamp = datetime!(0999-03-20 14:05);
    assert_eq!(format_datetime(stamp, Language::En), "Mar 20, 999, 2:05 PM");
    assert_eq!(format_datetime(stamp, Language::Km), "២០ មីនា ៩៩៩, ២:០៥ ល្ងាច");
}

#[rstest]
fn midnight_renders_as_twelve_in_both_languages() {
    let stamp = datetime!(2024-03-20 00:15);
    assert!(format_datetime(stamp, Language::En).contains(" 12:15 AM"));
    assert!(format_datetime(stamp, Language::Km).contains(" ១២:១៥ "));
}

#[rstest]
fn khmer_minutes_are_zero_padded() {
    let rendered = format_datetime(datetime!(2024-03-20 14:05), Language::Km);
    assert!(rendered.contains(":០៥"), "expected padded minutes in {rendered}");
}

#[rstest]
#[case(0, 12)]
#[case(1, 1)]
#[case(11, 11)]
#[case(12, 12)]
#[case(13, 1)]
#[case(23, 11)]
fn twelve_hour_clock(#[case] hour: u8, #[case] expected: u8) {
    assert_eq!(twelve_hour(hour), expected);
}

#[rstest]
fn offset_timestamps_use_local_wall_clock() {
    let stamp = datetime!(2024-03-20 07:05 UTC).to_offset(offset!(+7));
    assert_eq!(
        format_offset_datetime(stamp, Language::En),
        "Mar 20, 2024, 2:05 PM"
    );
}

#[rstest]
#[case("2024-03-20T14:05", datetime!(2024-03-20 14:05))]
#[case("2024-03-20T14:05:30", datetime!(2024-03-20 14:05:30))]
#[case(" 2024-03-20T00:00 ", datetime!(2024-03-20 00:00))]
fn parses_wall_clock_input(#[case] raw: &str, #[case] expected: PrimitiveDateTime) {
    assert_eq!(parse_wall_clock(raw).expect("valid timestamp"), expected);
}

#[rstest]
#[case("2024-03-20")]
#[case("yesterday")]
#[case("2024-13-01T10:00")]
fn rejects_malformed_input(#[case] raw: &str) {
    assert!(parse_wall_clock(raw).is_err());
}
