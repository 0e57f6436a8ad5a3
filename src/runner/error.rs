//! Error types for the runner module.
//!
//! This submodule isolates derive-macro-affected code to scope lint suppressions
//! narrowly. The `unused_assignments` lint fires in some Rust versions due to
//! thiserror/miette derive macro expansion.

// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised during command execution.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// The English and Khmer catalogues expose different keys.
    #[error("locale catalogues differ in {count} place(s)")]
    #[diagnostic(
        code(pharmadesk::runner::catalogue_drift),
        help("add the missing keys so both catalogues share the same shape")
    )]
    CatalogueDrift {
        /// Number of reported differences.
        count: usize,
    },
}
