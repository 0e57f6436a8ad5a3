//! The active interface language.
//!
//! [`LanguageSetting`] is an explicit object owned by the embedding
//! application rather than ambient global state. It owns the preference
//! store and the navigator so that a language change can persist itself and
//! move the user to the equivalent route in the new locale.

pub mod store;

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalogue::Catalogue;
use crate::language::{Language, LanguageError};
use crate::localization::Localizer;
use crate::route;
use store::{LANGUAGE_KEY, PreferenceStore, StoreError};

/// Errors raised when changing the language.
#[derive(Debug, Error)]
pub enum SettingError {
    /// The requested tag is not a supported language; nothing changed.
    #[error(transparent)]
    Language(#[from] LanguageError),
    /// The language changed but the preference could not be persisted.
    #[error("language changed but the preference was not saved")]
    Store(#[from] StoreError),
}

/// Route access for locale-addressed interfaces.
pub trait Navigator {
    /// The route currently displayed, when the interface is URL-addressed.
    fn current_path(&self) -> Option<String>;

    /// Request a transition to `path`.
    fn navigate(&mut self, path: &str);
}

/// Navigator for interfaces that are not addressed by route.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoNavigation;

impl Navigator for NoNavigation {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn navigate(&mut self, _path: &str) {}
}

/// Navigator that records every transition.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Start at `path`.
    #[must_use]
    pub fn starting_at(path: &str) -> Self {
        Self {
            entries: vec![path.to_owned()],
        }
    }

    /// Every route visited, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for History {
    fn current_path(&self) -> Option<String> {
        self.entries.last().cloned()
    }

    fn navigate(&mut self, path: &str) {
        self.entries.push(path.to_owned());
    }
}

/// Holder of the current language with its persistence and navigation.
#[derive(Debug)]
pub struct LanguageSetting<S, N> {
    language: Language,
    store: S,
    navigator: N,
}

impl<S: PreferenceStore, N: Navigator> LanguageSetting<S, N> {
    /// Determine the initial language.
    ///
    /// A valid persisted preference wins, then the locale segment of the
    /// navigator's current route, then `default`. Unreadable or unsupported
    /// persisted values are logged and skipped.
    pub fn initialise(store: S, navigator: N, default: Language) -> Self {
        let persisted = match store.load(LANGUAGE_KEY) {
            Ok(value) => value.and_then(|tag| match tag.parse::<Language>() {
                Ok(language) => Some(language),
                Err(err) => {
                    warn!(error = %err, "ignoring persisted language preference");
                    None
                }
            }),
            Err(err) => {
                warn!(error = %err, "could not read persisted language preference");
                None
            }
        };
        let routed = || {
            navigator
                .current_path()
                .and_then(|path| route::locale_segment(&path))
        };
        let language = persisted.or_else(routed).unwrap_or(default);
        debug!(%language, "initialised language setting");
        Self {
            language,
            store,
            navigator,
        }
    }

    /// The current language.
    #[must_use]
    pub const fn get(&self) -> Language {
        self.language
    }

    /// Change the language from a raw tag.
    ///
    /// Unsupported tags are rejected and leave the setting untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SettingError::Language`] for an unsupported tag, and
    /// [`SettingError::Store`] when the change could not be persisted.
    pub fn set(&mut self, tag: &str) -> Result<(), SettingError> {
        let language = tag.parse::<Language>()?;
        self.set_language(language)?;
        Ok(())
    }

    /// Change the language.
    ///
    /// The in-memory value and the route are updated before persisting, so a
    /// storage failure still leaves the interface in the requested language.
    ///
    /// # Errors
    ///
    /// Returns the [`StoreError`] raised while persisting the preference.
    pub fn set_language(&mut self, language: Language) -> Result<(), StoreError> {
        let previous = self.language;
        self.language = language;
        debug!(from = %previous, to = %language, "language changed");
        if let Some(path) = self.navigator.current_path()
            && route::locale_segment(&path).is_some()
        {
            let target = route::with_locale(&path, language);
            if target != path {
                self.navigator.navigate(&target);
            }
        }
        self.store.save(LANGUAGE_KEY, language.tag())
    }

    /// Bind the current language to `catalogue` for rendering.
    #[must_use]
    pub const fn localizer<'a>(&self, catalogue: &'a Catalogue) -> Localizer<'a> {
        Localizer::new(catalogue, self.language)
    }

    /// The preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The navigator.
    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}
