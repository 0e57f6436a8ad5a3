//! Rendering context binding a catalogue to the active language.
//!
//! Call sites receive a [`Localizer`] explicitly instead of reaching for a
//! global, so a language change is visible only where the caller rebuilds
//! the context from its [`LanguageSetting`](crate::setting::LanguageSetting).

pub mod keys;

use time::{OffsetDateTime, PrimitiveDateTime};

use crate::catalogue::Catalogue;
use crate::format;
use crate::language::Language;
use crate::locale_tree::LocaleTree;

/// Label and timestamp rendering for one language.
#[derive(Debug, Clone, Copy)]
pub struct Localizer<'a> {
    catalogue: &'a Catalogue,
    language: Language,
}

impl<'a> Localizer<'a> {
    /// Bind `catalogue` to `language`.
    #[must_use]
    pub const fn new(catalogue: &'a Catalogue, language: Language) -> Self {
        Self {
            catalogue,
            language,
        }
    }

    /// The language this context renders.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Translate `key`, or return it unchanged when no translation exists.
    #[must_use]
    pub fn t<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.catalogue.resolve(self.language, key)
    }

    /// The locale tree for this context's language.
    #[must_use]
    pub const fn tree(&self) -> &'a LocaleTree {
        self.catalogue.tree(self.language)
    }

    /// Translate `key` only when a translation exists.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        self.tree().lookup(key)
    }

    /// Render a wall-clock timestamp.
    #[must_use]
    pub fn format_datetime(&self, datetime: PrimitiveDateTime) -> String {
        format::format_datetime(datetime, self.language)
    }

    /// Render an offset timestamp using its local wall-clock reading.
    #[must_use]
    pub fn format_offset_datetime(&self, datetime: OffsetDateTime) -> String {
        format::format_offset_datetime(datetime, self.language)
    }

    /// Value for the document's `lang` attribute.
    #[must_use]
    pub const fn html_lang(&self) -> &'static str {
        self.language.tag()
    }

    /// Font class for the document body.
    #[must_use]
    pub const fn font_class(&self) -> &'static str {
        self.language.font_class()
    }
}
