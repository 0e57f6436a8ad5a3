//! Khmer numeral, month, and half-day lookup tables.

use time::Month;

/// A decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    /// 0
    Zero,
    /// 1
    One,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
}

impl Digit {
    /// Classify an ASCII digit character.
    #[must_use]
    pub const fn from_ascii(ch: char) -> Option<Self> {
        Some(match ch {
            '0' => Self::Zero,
            '1' => Self::One,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            _ => return None,
        })
    }

    /// The Khmer numeral glyph for this digit.
    #[must_use]
    pub const fn khmer(self) -> char {
        match self {
            Self::Zero => '០',
            Self::One => '១',
            Self::Two => '២',
            Self::Three => '៣',
            Self::Four => '៤',
            Self::Five => '៥',
            Self::Six => '៦',
            Self::Seven => '៧',
            Self::Eight => '៨',
            Self::Nine => '៩',
        }
    }
}

/// Khmer name of a calendar month.
#[must_use]
pub const fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "មករា",
        Month::February => "កុម្ភៈ",
        Month::March => "មីនា",
        Month::April => "មេសា",
        Month::May => "ឧសភា",
        Month::June => "មិថុនា",
        Month::July => "កក្កដា",
        Month::August => "សីហា",
        Month::September => "កញ្ញា",
        Month::October => "តុលា",
        Month::November => "វិច្ឆិកា",
        Month::December => "ធ្នូ",
    }
}

/// Half of the day an hour falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before midday.
    Morning,
    /// Midday onwards.
    Evening,
}

impl Meridiem {
    /// Classify a 24-hour clock hour.
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        if hour >= 12 { Self::Evening } else { Self::Morning }
    }

    /// English clock suffix for the half-day.
    #[must_use]
    pub const fn english(self) -> &'static str {
        match self {
            Self::Morning => "AM",
            Self::Evening => "PM",
        }
    }

    /// Khmer label for the half-day.
    #[must_use]
    pub const fn khmer(self) -> &'static str {
        match self {
            Self::Morning => "ព្រឹក",
            Self::Evening => "ល្ងាច",
        }
    }
}

/// Replace every ASCII digit in `text` with its Khmer glyph.
///
/// Non-digit characters such as a leading minus sign pass through.
#[must_use]
pub fn khmer_digits(text: &str) -> String {
    text.chars()
        .map(|ch| Digit::from_ascii(ch).map_or(ch, Digit::khmer))
        .collect()
}

/// Render an integer with Khmer numerals.
///
/// # Examples
///
/// ```
/// use pharmadesk::format::to_khmer_numerals;
///
/// assert_eq!(to_khmer_numerals(2024), "២០២៤");
/// ```
#[must_use]
pub fn to_khmer_numerals(value: impl Into<i64>) -> String {
    khmer_digits(&value.into().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_ascii_digit_maps_to_a_distinct_glyph() {
        let glyphs: Vec<char> = ('0'..='9')
            .filter_map(Digit::from_ascii)
            .map(Digit::khmer)
            .collect();
        assert_eq!(glyphs, "០១២៣៤៥៦៧៨៩".chars().collect::<Vec<_>>());
    }

    #[rstest]
    #[case(11, Meridiem::Morning)]
    #[case(12, Meridiem::Evening)]
    #[case(0, Meridiem::Morning)]
    #[case(23, Meridiem::Evening)]
    fn midday_boundary_selects_meridiem(#[case] hour: u8, #[case] expected: Meridiem) {
        assert_eq!(Meridiem::from_hour(hour), expected);
    }

    #[rstest]
    fn negative_numbers_keep_sign() {
        assert_eq!(to_khmer_numerals(-42), "-៤២");
    }

    #[rstest]
    fn months_follow_calendar_order() {
        assert_eq!(month_name(Month::January), "មករា");
        assert_eq!(month_name(Month::March), "មីនា");
        assert_eq!(month_name(Month::December), "ធ្នូ");
    }
}
