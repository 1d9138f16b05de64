/// Translates a phrase with the process-wide localizer.
///
/// ```
/// assert_eq!(l10n_runtime::t!("Hello"), "Hello");
/// ```
#[macro_export]
macro_rules! t {
    ($phrase:expr $(,)?) => {
        $crate::translate($phrase)
    };
}

/// Translates a phrase and expands its printf-style directives.
///
/// Each argument is converted with [`Arg::from`](crate::Arg).
///
/// ```
/// assert_eq!(l10n_runtime::f!("Processing %d items", 42), "Processing 42 items");
/// ```
#[macro_export]
macro_rules! f {
    ($phrase:expr $(, $arg:expr)* $(,)?) => {
        $crate::translate_formatted($phrase, &[$($crate::Arg::from($arg)),*])
    };
}

/// Like [`f!`], but returns a [`TranslatedError`](crate::TranslatedError).
#[macro_export]
macro_rules! e {
    ($phrase:expr $(, $arg:expr)* $(,)?) => {
        $crate::translate_error($phrase, &[$($crate::Arg::from($arg)),*])
    };
}
