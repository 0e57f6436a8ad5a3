//! Locale trees for every supported language.
//!
//! The English and Khmer documents are compiled into the binary and parsed
//! once on first use. Deployments may also load the same documents from a
//! directory, which the audit tooling uses to check work-in-progress files.

use std::sync::OnceLock;

use camino::Utf8Path;
use tracing::{debug, error};

use crate::language::Language;
use crate::locale_tree::{LocaleError, LocaleTree, parity::ParityReport};

const EN_DOCUMENT: &str = include_str!("../locales/en.json");
const KM_DOCUMENT: &str = include_str!("../locales/km.json");

static EMBEDDED: OnceLock<Catalogue> = OnceLock::new();

/// One immutable locale tree per supported language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    en: LocaleTree,
    km: LocaleTree,
}

impl Catalogue {
    /// Pair up already-loaded trees.
    #[must_use]
    pub const fn new(en: LocaleTree, km: LocaleTree) -> Self {
        Self { en, km }
    }

    /// The catalogue compiled into the binary.
    ///
    /// A document that fails to parse is replaced by an empty tree so every
    /// lookup degrades to its key; the failure is logged once.
    pub fn embedded() -> &'static Self {
        EMBEDDED.get_or_init(|| Self {
            en: load_embedded(Language::En, EN_DOCUMENT),
            km: load_embedded(Language::Km, KM_DOCUMENT),
        })
    }

    /// Load `en.json` and `km.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first [`LocaleError`] raised while reading either file.
    pub fn from_dir(dir: &Utf8Path) -> Result<Self, LocaleError> {
        let en = LocaleTree::from_path(&dir.join(document_name(Language::En)))?;
        let km = LocaleTree::from_path(&dir.join(document_name(Language::Km)))?;
        debug!(%dir, "loaded locale catalogue from directory");
        Ok(Self { en, km })
    }

    /// The tree for `language`.
    #[must_use]
    pub const fn tree(&self, language: Language) -> &LocaleTree {
        match language {
            Language::En => &self.en,
            Language::Km => &self.km,
        }
    }

    /// Resolve `path` in the tree for `language`.
    #[must_use]
    pub fn resolve<'a>(&'a self, language: Language, path: &'a str) -> &'a str {
        self.tree(language).resolve(path)
    }

    /// Compare the Khmer tree against the English reference.
    #[must_use]
    pub fn parity(&self) -> ParityReport {
        ParityReport::compare(&self.en, &self.km)
    }
}

/// File name of the locale document for `language`.
#[must_use]
pub fn document_name(language: Language) -> String {
    format!("{}.json", language.tag())
}

fn load_embedded(language: Language, document: &str) -> LocaleTree {
    LocaleTree::from_json_str(document).map_or_else(
        |err| {
            error!(%language, error = %err, "embedded locale document is invalid");
            LocaleTree::default()
        },
        |tree| {
            debug!(%language, entries = tree.len(), "loaded embedded locale document");
            tree
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Language::En, "users.title", "Users")]
    #[case(Language::Km, "users.title", "អ្នកប្រើប្រាស់")]
    #[case(Language::Km, "common.cancel", "បោះបង់")]
    fn embedded_catalogue_translates(
        #[case] language: Language,
        #[case] path: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(Catalogue::embedded().resolve(language, path), expected);
    }

    #[rstest]
    fn embedded_documents_are_valid() {
        assert!(LocaleTree::from_json_str(EN_DOCUMENT).is_ok());
        assert!(LocaleTree::from_json_str(KM_DOCUMENT).is_ok());
    }

    #[rstest]
    fn embedded_catalogues_are_in_parity() {
        let report = Catalogue::embedded().parity();
        assert!(report.is_clean(), "catalogue drift: {report:?}");
    }

    #[rstest]
    fn document_names_follow_tags() {
        assert_eq!(document_name(Language::Km), "km.json");
    }
}
