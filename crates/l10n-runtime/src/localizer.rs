use l10n_core::{Arg, Lexicon, World, sprintf};
use tracing::{debug, trace};

use crate::config::DetectionConfig;
use crate::detect::{self, DetectionSource};
use crate::env::{Environment, ProcessEnvironment, SKIP_DETECTION_VAR};
use crate::error::TranslatedError;
use crate::state::LanguageState;

/// Starts on the default language and detects right away unless
/// `L10N_SKIP_DETECTION` is set.
pub struct Localizer<E = ProcessEnvironment> {
    world: World,
    state: LanguageState,
    config: DetectionConfig,
    env: E,
}

impl Localizer<ProcessEnvironment> {
    pub fn new() -> Self {
        Self::with_environment(DetectionConfig::default(), ProcessEnvironment)
    }
}

impl Default for Localizer<ProcessEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> Localizer<E> {
    pub fn with_environment(config: DetectionConfig, env: E) -> Self {
        let world = World::with_language(config.secondary_language.clone());
        let state = LanguageState::new(detect::default_language(&env, &config));
        let skip = env.non_empty_var(SKIP_DETECTION_VAR).is_some();
        let mut localizer = Self {
            world,
            state,
            config,
            env,
        };
        if skip {
            debug!(
                language = %localizer.state.active(),
                "language detection skipped"
            );
        } else {
            localizer.detect_language();
        }
        localizer
    }

    pub fn register(&mut self, language: impl Into<String>, lexicon: Lexicon) {
        let language = language.into();
        debug!(language = %language, phrases = lexicon.len(), "registering phrases");
        self.world.register(language, lexicon);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn translate<'a>(&'a self, phrase: &'a str) -> &'a str {
        let language = self.state.active();
        let translated = self.world.translate(language, phrase);
        if std::ptr::eq(translated, phrase) {
            trace!(language, phrase, "no translation, using phrase");
        }
        translated
    }

    pub fn translate_formatted(&self, phrase: &str, args: &[Arg]) -> String {
        sprintf(self.translate(phrase), args)
    }

    pub fn translate_error(&self, phrase: &str, args: &[Arg]) -> TranslatedError {
        TranslatedError::new(self.translate_formatted(phrase, args))
    }

    /// An empty `language` clears the override and detects again, exactly
    /// like [`Localizer::reset_language`].
    pub fn force_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        if language.is_empty() {
            self.reset_language();
            return;
        }
        debug!(language = %language, "language forced");
        self.state.force(language);
    }

    pub fn reset_language(&mut self) {
        self.state.clear_forced();
        self.detect_language();
    }

    pub fn detect_language(&mut self) -> DetectionSource {
        let detection = detect::detect(&self.env, &self.config, self.state.forced());
        debug!(
            language = %detection.language,
            source = ?detection.source,
            "language selected"
        );
        self.state.set_detected(detection.language);
        detection.source
    }

    pub fn current_language(&self) -> &str {
        self.state.active()
    }

    pub fn forced_language(&self) -> Option<&str> {
        self.state.forced()
    }

    pub fn is_forced(&self) -> bool {
        self.state.forced().is_some()
    }

    pub fn default_language(&self) -> String {
        detect::default_language(&self.env, &self.config)
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut E {
        &mut self.env
    }
}
