//! Locale precedence for the command line front end.
//!
//! An explicit `--locale` flag beats `PHARMADESK_LOCALE`, which beats the
//! persisted preference; the host locale only supplies the default used when
//! nothing was persisted. Raw tags are normalised before being mapped onto
//! the supported languages, so `km_KH.UTF-8` selects Khmer.

use std::str::FromStr;

use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::language::Language;

/// Environment variable name used to override the locale.
pub const PHARMADESK_LOCALE_ENV: &str = "PHARMADESK_LOCALE";

/// Read-only environment access used for locale resolution.
pub trait EnvProvider {
    /// Fetch the environment variable value for `key`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Environment provider backed by the process environment.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// System locale provider for the current host.
pub trait SystemLocale {
    /// Return the system locale string when available.
    fn system_locale(&self) -> Option<String>;
}

/// System locale provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalize a raw locale string into a valid BCP 47 language tag.
///
/// This strips encoding suffixes (for example `.UTF-8`), removes variant
/// sections (for example `@latin`), replaces underscores with hyphens, and
/// validates the result using `LanguageIdentifier`.
///
/// # Examples
///
/// ```rust
/// use pharmadesk::locale_resolution::normalize_locale_tag;
///
/// assert_eq!(normalize_locale_tag("km_KH.UTF-8"), Some("km-KH".to_string()));
/// assert_eq!(normalize_locale_tag("en-US"), Some("en-US".to_string()));
/// assert_eq!(normalize_locale_tag("C"), None);
/// ```
#[must_use]
pub fn normalize_locale_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let stripped = trimmed.split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() {
        return None;
    }
    let candidate = stripped.replace('_', "-");
    LanguageIdentifier::from_str(&candidate)
        .ok()
        .map(|lang| lang.to_string())
}

/// Map a raw locale string onto a supported language.
#[must_use]
pub fn supported_language(raw: &str) -> Option<Language> {
    let normalized = normalize_locale_tag(raw)?;
    let language = Language::from_tag(&normalized);
    if language.is_none() {
        debug!(tag = %normalized, "locale is valid but not supported");
    }
    language
}

fn select_language<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<Language> {
    candidates
        .into_iter()
        .flatten()
        .find_map(supported_language)
}

/// Resolve an explicit language override.
///
/// Precedence is `--locale` (when supplied) followed by `PHARMADESK_LOCALE`.
/// Tags that are invalid or unsupported are skipped. `None` means no
/// override applies and the persisted preference should be used.
///
/// # Examples
///
/// ```rust
/// use pharmadesk::language::Language;
/// use pharmadesk::locale_resolution::{resolve_override, EnvProvider};
///
/// struct StubEnv(Option<String>);
/// impl EnvProvider for StubEnv {
///     fn var(&self, key: &str) -> Option<String> {
///         (key == "PHARMADESK_LOCALE").then(|| self.0.clone()).flatten()
///     }
/// }
///
/// let language = resolve_override(Some("fr-FR"), &StubEnv(Some("km_KH".into())));
/// assert_eq!(language, Some(Language::Km));
/// ```
#[must_use]
pub fn resolve_override(cli_locale: Option<&str>, env: &impl EnvProvider) -> Option<Language> {
    let env_locale = env.var(PHARMADESK_LOCALE_ENV);
    select_language([cli_locale, env_locale.as_deref()])
}

/// Resolve the default language used when no preference was persisted.
///
/// The host locale is consulted and English is used when it names no
/// supported language.
#[must_use]
pub fn resolve_default(system: &impl SystemLocale) -> Language {
    let system_locale = system.system_locale();
    select_language([system_locale.as_deref()]).unwrap_or_default()
}
