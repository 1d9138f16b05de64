#![forbid(unsafe_code)]

//! Runtime phrase translation with environment-driven language selection.
//!
//! Modules register their phrases per language, usually at startup:
//!
//! ```
//! use l10n_runtime::{Lexicon, f, register, t};
//!
//! register("ja", Lexicon::from([
//!     ("Connected successfully", "正常に接続しました"),
//!     ("Query completed in %dms", "クエリが%dmsで完了しました"),
//! ]));
//!
//! l10n_runtime::force_language("ja");
//! assert_eq!(t!("Connected successfully"), "正常に接続しました");
//! assert_eq!(f!("Query completed in %dms", 42), "クエリが42msで完了しました");
//! l10n_runtime::reset_language();
//! ```
//!
//! Phrases are written in the source language and are returned as-is when
//! no translation exists for the active language.

mod config;
mod detect;
mod env;
mod error;
mod global;
mod localizer;
mod macros;
mod state;

pub use l10n_core::{Arg, LanguageTag, Lexicon, World, sprintf};

pub use crate::config::{DetectionConfig, load_config, load_config_or_default};
pub use crate::detect::{DetectionSource, is_test_mode, looks_like_test_harness};
pub use crate::env::{
    DEFAULT_LANGUAGE_VAR, Environment, MapEnvironment, ProcessEnvironment, SKIP_DETECTION_VAR,
    TEST_MODE_VAR,
};
pub use crate::error::{RuntimeError, RuntimeResult, TranslatedError};
pub use crate::global::{
    current_language, default_language, detect_language, force_language, register,
    reset_language, translate, translate_error, translate_formatted, with_localizer,
};
pub use crate::localizer::Localizer;
