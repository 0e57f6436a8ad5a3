//! Locale-addressed routes.
//!
//! Every console page lives beneath a locale segment (`/km/admin/users`).
//! These helpers read and rewrite that segment and decide where requests
//! without one should be redirected.

use crate::language::Language;

/// Path prefixes that are served without a locale segment.
const UNLOCALISED_PREFIXES: [&str; 3] = ["_next", "api", "favicon.ico"];

/// Outcome of locale negotiation for an incoming path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the path as requested.
    Pass,
    /// Redirect to the contained locale-prefixed path.
    Redirect(String),
}

fn split_suffix(path: &str) -> (&str, &str) {
    path.find(['?', '#'])
        .map_or((path, ""), |index| path.split_at(index))
}

fn first_segment(path: &str) -> (&str, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    trimmed
        .find('/')
        .map_or((trimmed, ""), |index| trimmed.split_at(index))
}

/// The language named by the first segment of `path`, if any.
///
/// # Examples
///
/// ```
/// use pharmadesk::language::Language;
/// use pharmadesk::route::locale_segment;
///
/// assert_eq!(locale_segment("/km/admin/users"), Some(Language::Km));
/// assert_eq!(locale_segment("/en"), Some(Language::En));
/// assert_eq!(locale_segment("/admin"), None);
/// ```
#[must_use]
pub fn locale_segment(path: &str) -> Option<Language> {
    let (route, _) = split_suffix(path);
    let (segment, _) = first_segment(route);
    Language::ALL
        .into_iter()
        .find(|language| language.tag() == segment)
}

/// Rewrite `path` so its locale segment names `language`.
///
/// A path without a locale segment gains one. Query strings and fragments
/// are preserved.
///
/// # Examples
///
/// ```
/// use pharmadesk::language::Language;
/// use pharmadesk::route::with_locale;
///
/// assert_eq!(with_locale("/en/admin/users?page=2", Language::Km), "/km/admin/users?page=2");
/// assert_eq!(with_locale("/contact", Language::Km), "/km/contact");
/// ```
#[must_use]
pub fn with_locale(path: &str, language: Language) -> String {
    let (route, suffix) = split_suffix(path);
    let rest = if locale_segment(route).is_some() {
        first_segment(route).1
    } else if route == "/" {
        ""
    } else {
        route
    };
    let separator = if rest.is_empty() || rest.starts_with('/') { "" } else { "/" };
    format!("/{}{separator}{rest}{suffix}", language.tag())
}

/// The language preferred by an `Accept-Language` header.
///
/// Only the first listed range is considered; Khmer is chosen when its
/// primary subtag is `km`, and English otherwise.
#[must_use]
pub fn preferred_language(accept_language: Option<&str>) -> Language {
    let first = accept_language
        .unwrap_or_default()
        .split(',')
        .next()
        .unwrap_or_default();
    let range = first.split(';').next().unwrap_or_default().trim();
    let primary = range.split('-').next().unwrap_or_default();
    if primary == Language::Km.tag() {
        Language::Km
    } else {
        Language::En
    }
}

/// Decide whether `path` needs a locale prefix.
///
/// Internal paths and paths that already carry a locale pass through;
/// everything else redirects to the header's preferred locale.
///
/// # Examples
///
/// ```
/// use pharmadesk::route::{negotiate, RouteDecision};
///
/// assert_eq!(
///     negotiate("/admin/users", Some("km-KH,km;q=0.9")),
///     RouteDecision::Redirect("/km/admin/users".to_owned()),
/// );
/// assert_eq!(negotiate("/en/admin", Some("km")), RouteDecision::Pass);
/// assert_eq!(negotiate("/api/health", None), RouteDecision::Pass);
/// ```
#[must_use]
pub fn negotiate(path: &str, accept_language: Option<&str>) -> RouteDecision {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if UNLOCALISED_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
    {
        return RouteDecision::Pass;
    }
    if locale_segment(path).is_some() {
        return RouteDecision::Pass;
    }
    let language = preferred_language(accept_language);
    let (route, suffix) = split_suffix(path);
    let tail = route.strip_prefix('/').unwrap_or(route);
    let separator = if tail.is_empty() { "" } else { "/" };
    RouteDecision::Redirect(format!("/{}{separator}{tail}{suffix}", language.tag()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", None)]
    #[case("", None)]
    #[case("/km", Some(Language::Km))]
    #[case("/km/", Some(Language::Km))]
    #[case("/en?tab=1", Some(Language::En))]
    #[case("/kmx/admin", None)]
    #[case("/EN/admin", None)]
    fn detects_locale_segment(#[case] path: &str, #[case] expected: Option<Language>) {
        assert_eq!(locale_segment(path), expected);
    }

    #[rstest]
    #[case("/en", Language::Km, "/km")]
    #[case("/en/", Language::Km, "/km/")]
    #[case("/", Language::Km, "/km")]
    #[case("/km/admin/products/3/edit", Language::En, "/en/admin/products/3/edit")]
    #[case("admin", Language::En, "/en/admin")]
    #[case("/km#top", Language::En, "/en#top")]
    fn rewrites_locale_segment(
        #[case] path: &str,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        assert_eq!(with_locale(path, language), expected);
    }

    #[rstest]
    #[case(None, Language::En)]
    #[case(Some(""), Language::En)]
    #[case(Some("km"), Language::Km)]
    #[case(Some("km-KH,en;q=0.8"), Language::Km)]
    #[case(Some("en-US,km;q=0.9"), Language::En)]
    #[case(Some("fr-FR"), Language::En)]
    fn first_accept_language_range_wins(
        #[case] header: Option<&str>,
        #[case] expected: Language,
    ) {
        assert_eq!(preferred_language(header), expected);
    }

    #[rstest]
    #[case("/", "/en")]
    #[case("/contact?from=home", "/en/contact?from=home")]
    #[case("contact", "/en/contact")]
    #[case("/?tab=1", "/en?tab=1")]
    fn redirects_unprefixed_paths(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(negotiate(path, None), RouteDecision::Redirect(expected.to_owned()));
    }

    #[rstest]
    #[case("/_next/static/chunk.js")]
    #[case("/favicon.ico")]
    #[case("/km/admin")]
    fn passes_internal_and_prefixed_paths(#[case] path: &str) {
        assert_eq!(negotiate(path, Some("km")), RouteDecision::Pass);
    }
}
