//! Catalogue keys rendered by the command line front end.

/// Label preceding the active language.
pub const CLI_CURRENT_LANGUAGE: &str = "cli.currentLanguage";
/// Confirmation printed after a language change is saved.
pub const CLI_LANGUAGE_SAVED: &str = "cli.languageSaved";
/// Summary printed when the catalogues agree.
pub const CLI_PARITY_OK: &str = "cli.parityOk";
/// Heading for keys absent from one catalogue.
pub const CLI_MISSING_IN: &str = "cli.missingIn";
/// Heading for leaf/branch disagreements.
pub const CLI_SHAPE_MISMATCH: &str = "cli.shapeMismatch";

/// Every key declared above.
pub const ALL_KEYS: &[&str] = &[
    CLI_CURRENT_LANGUAGE,
    CLI_LANGUAGE_SAVED,
    CLI_PARITY_OK,
    CLI_MISSING_IN,
    CLI_SHAPE_MISMATCH,
];
