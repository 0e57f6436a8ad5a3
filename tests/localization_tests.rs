//! Tests covering catalogue coverage and key fallback behaviour.

use anyhow::{Result, ensure};
use rstest::rstest;

use pharmadesk::catalogue::Catalogue;
use pharmadesk::language::Language;
use pharmadesk::localization::{Localizer, keys};

#[rstest]
#[case(Language::En)]
#[case(Language::Km)]
fn every_cli_key_is_translated(#[case] language: Language) -> Result<()> {
    let localizer = Localizer::new(Catalogue::embedded(), language);
    for key in keys::ALL_KEYS {
        let text = localizer.t(key);
        ensure!(text != *key, "{key} is untranslated in {language}");
        ensure!(!text.trim().is_empty(), "{key} is blank in {language}");
    }
    Ok(())
}

#[rstest]
fn every_shared_leaf_resolves_to_text_in_both_languages() -> Result<()> {
    let catalogue = Catalogue::embedded();
    let paths = Localizer::new(catalogue, Language::En).tree().leaf_paths();
    ensure!(!paths.is_empty(), "embedded English catalogue is empty");
    for language in Language::ALL {
        let localizer = Localizer::new(catalogue, language);
        for path in &paths {
            let text = localizer.t(path);
            ensure!(text != path.as_str(), "{path} has no {language} translation");
            ensure!(!text.trim().is_empty(), "{path} is blank in {language}");
        }
    }
    Ok(())
}

#[rstest]
#[case(Language::En, "users.title", "Users")]
#[case(Language::Km, "users.title", "អ្នកប្រើប្រាស់")]
#[case(Language::Km, "common.cancel", "បោះបង់")]
#[case(Language::En, "users.missing", "users.missing")]
#[case(Language::Km, "users", "users")]
#[case(Language::En, "", "")]
fn resolution_returns_text_or_key(
    #[case] language: Language,
    #[case] key: &str,
    #[case] expected: &str,
) -> Result<()> {
    let resolved = Localizer::new(Catalogue::embedded(), language).t(key);
    ensure!(
        resolved == expected,
        "expected {key:?} in {language} to resolve to {expected:?}, got {resolved:?}"
    );
    Ok(())
}

#[rstest]
fn document_attributes_follow_language() -> Result<()> {
    let catalogue = Catalogue::embedded();
    let khmer = Localizer::new(catalogue, Language::Km);
    ensure!(khmer.html_lang() == "km", "unexpected lang {}", khmer.html_lang());
    ensure!(khmer.font_class() == "font-khmer", "unexpected font class");
    let english = Localizer::new(catalogue, Language::En);
    ensure!(english.font_class() == "font-english", "unexpected font class");
    Ok(())
}
