//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands. The
//! binary is a thin front end over the library for translators and
//! operators: it resolves keys, renders timestamps, audits catalogue parity,
//! and manages the persisted language preference.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

mod parsing;

pub use parsing::Timestamp;
use parsing::{parse_locale, parse_timestamp};

/// Default directory holding persisted preferences.
const DEFAULT_STATE_DIR: &str = ".pharmadesk";

/// Bilingual localisation tooling for the Pharmadesk admin console.
#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Locale tag overriding the persisted language (for example: en, km-KH).
    #[arg(long, value_name = "LOCALE", value_parser = parse_locale)]
    pub locale: Option<String>,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Load `en.json` and `km.json` from this directory instead of the
    /// embedded catalogue.
    #[arg(long, value_name = "DIR")]
    pub locales_dir: Option<Utf8PathBuf>,

    /// Directory holding the persisted language preference.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: Utf8PathBuf,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments accepted by the `language` command.
#[derive(Debug, Args, PartialEq, Eq, Clone)]
pub struct LanguageArgs {
    /// Language to switch to; omit to show the current language.
    #[arg(value_name = "TAG")]
    pub tag: Option<String>,

    /// Locale-prefixed route to rewrite for the new language.
    #[arg(long, value_name = "PATH")]
    pub route: Option<String>,
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone)]
pub enum Commands {
    /// Print the translation of each key in the active language.
    Resolve {
        /// Dot-separated key paths.
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// Render a timestamp in the active language.
    Format {
        /// `YYYY-MM-DDTHH:MM[:SS]` or `now`.
        #[arg(value_name = "DATETIME", value_parser = parse_timestamp)]
        at: Timestamp,
    },

    /// Report keys that differ between the English and Khmer catalogues.
    Check,

    /// List every translatable key with its text in the active language.
    Keys {
        /// Only list keys beginning with this prefix.
        #[arg(value_name = "PREFIX")]
        prefix: Option<String>,
    },

    /// Show or change the persisted language preference.
    Language(LanguageArgs),
}
