use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use l10n_core::{Arg, Lexicon};

use crate::detect::DetectionSource;
use crate::error::TranslatedError;
use crate::localizer::Localizer;

static LOCALIZER: LazyLock<RwLock<Localizer>> = LazyLock::new(|| RwLock::new(Localizer::new()));

fn read() -> RwLockReadGuard<'static, Localizer> {
    LOCALIZER.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Localizer> {
    LOCALIZER.write().unwrap_or_else(PoisonError::into_inner)
}

pub fn with_localizer<R>(f: impl FnOnce(&Localizer) -> R) -> R {
    f(&read())
}

pub fn register(language: impl Into<String>, lexicon: Lexicon) {
    write().register(language, lexicon);
}

pub fn translate(phrase: &str) -> String {
    read().translate(phrase).to_string()
}

pub fn translate_formatted(phrase: &str, args: &[Arg]) -> String {
    read().translate_formatted(phrase, args)
}

pub fn translate_error(phrase: &str, args: &[Arg]) -> TranslatedError {
    read().translate_error(phrase, args)
}

pub fn force_language(language: impl Into<String>) {
    write().force_language(language);
}

pub fn reset_language() {
    write().reset_language();
}

pub fn detect_language() -> DetectionSource {
    write().detect_language()
}

pub fn current_language() -> String {
    read().current_language().to_string()
}

pub fn default_language() -> String {
    read().default_language()
}
