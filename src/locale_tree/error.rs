//! Errors raised while loading locale documents.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// Failures encountered while turning a JSON document into a locale tree.
#[derive(Debug, Error, Diagnostic)]
pub enum LocaleError {
    /// The document is not valid JSON.
    #[error("locale document is not valid JSON")]
    #[diagnostic(code(pharmadesk::locale::parse))]
    Parse(#[source] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("locale document root must be an object, found {found}")]
    #[diagnostic(
        code(pharmadesk::locale::root),
        help("wrap the translations in a top-level object")
    )]
    RootNotObject {
        /// JSON kind found at the root.
        found: &'static str,
    },

    /// A value other than a string or object appears in the tree.
    #[error("translation at '{path}' must be a string or object, found {found}")]
    #[diagnostic(code(pharmadesk::locale::leaf))]
    InvalidLeaf {
        /// Dotted path of the offending value.
        path: String,
        /// JSON kind found at the path.
        found: &'static str,
    },

    /// The document could not be read from disk.
    #[error("failed to read locale document {path}")]
    #[diagnostic(code(pharmadesk::locale::io))]
    Io {
        /// Path that was attempted.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}
