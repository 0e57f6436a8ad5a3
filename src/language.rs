//! Supported interface languages.
//!
//! The console ships exactly two catalogues, so the language set is a closed
//! enumeration rather than a free-form tag. Parsing accepts any tag whose
//! primary subtag names a supported language (`km-KH` selects Khmer).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Errors raised when a tag does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    /// The tag is well formed but names no supported language.
    #[error("unsupported language tag '{tag}'; expected one of: en, km")]
    Unsupported {
        /// The rejected tag as supplied.
        tag: String,
    },
}

/// A language the console can render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Khmer.
    Km,
}

impl Language {
    /// All supported languages in selection-list order.
    pub const ALL: [Self; 2] = [Self::En, Self::Km];

    /// Short tag used in routes, storage, and the HTML `lang` attribute.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Km => "km",
        }
    }

    /// Name of the language in its own script, for selection lists.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Km => "ខ្មែរ",
        }
    }

    /// ISO 3166 country code of the flag shown beside the language.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "gb",
            Self::Km => "kh",
        }
    }

    /// Body font class applied while the language is active.
    #[must_use]
    pub const fn font_class(self) -> &'static str {
        match self {
            Self::En => "font-english",
            Self::Km => "font-khmer",
        }
    }

    /// Map an arbitrary language tag onto a supported language.
    ///
    /// Only the primary subtag is inspected, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use pharmadesk::language::Language;
    ///
    /// assert_eq!(Language::from_tag("km-KH"), Some(Language::Km));
    /// assert_eq!(Language::from_tag("EN_gb"), Some(Language::En));
    /// assert_eq!(Language::from_tag("fr"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|language| language.tag().eq_ignore_ascii_case(primary))
    }
}

/// Parse a user-supplied tag.
///
/// The whole tag must be a well-formed language identifier whose primary
/// subtag names a supported language, so `km-KH` is accepted while `km-!!`
/// and `fr` are rejected.
impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || LanguageError::Unsupported { tag: s.to_owned() };
        let candidate = s.trim().replace('_', "-");
        let identifier = LanguageIdentifier::from_str(&candidate).map_err(|_| unsupported())?;
        Self::from_tag(identifier.language.as_str()).ok_or_else(unsupported)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
