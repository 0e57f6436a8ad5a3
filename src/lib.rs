//! Pharmadesk localisation core.
//!
//! This library provides the English and Khmer locale catalogues, key
//! resolution with graceful degradation, the persisted language setting,
//! locale-aware timestamp rendering, and the helpers the admin console
//! shares between its bilingual tables.

pub mod catalogue;
pub mod cli;
pub mod format;
pub mod language;
pub mod listing;
pub mod locale_resolution;
pub mod locale_tree;
pub mod localization;
pub mod route;
pub mod runner;
pub mod setting;
