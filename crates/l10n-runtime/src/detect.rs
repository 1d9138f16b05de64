use std::path::Path;

use l10n_core::match_locale_strings;
use tracing::{debug, warn};

use crate::config::DetectionConfig;
use crate::env::{DEFAULT_LANGUAGE_VAR, Environment, TEST_MODE_VAR};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetectionSource {
    Forced,
    TestMode,
    Variable(String),
    Default,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detection {
    pub language: String,
    pub source: DetectionSource,
}

pub fn default_language(env: &impl Environment, config: &DetectionConfig) -> String {
    env.non_empty_var(DEFAULT_LANGUAGE_VAR)
        .unwrap_or_else(|| config.base_language.clone())
}

pub fn is_test_mode(env: &impl Environment, config: &DetectionConfig) -> bool {
    if env.var(TEST_MODE_VAR).as_deref() == Some("1") {
        return true;
    }
    config.sniff_test_args && looks_like_test_harness(&env.args())
}

/// Only the executable path counts: `deps/<name>-<16 hex digits>`.
pub fn looks_like_test_harness(args: &[String]) -> bool {
    args.first().is_some_and(|exe| is_hashed_deps_binary(Path::new(exe)))
}

fn is_hashed_deps_binary(exe: &Path) -> bool {
    let in_deps = exe
        .parent()
        .and_then(Path::file_name)
        .is_some_and(|dir| dir == "deps");
    let hashed = exe
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.rsplit_once('-'))
        .is_some_and(|(_, hash)| {
            hash.len() == 16 && hash.chars().all(|ch| ch.is_ascii_hexdigit())
        });
    in_deps && hashed
}

pub fn detect(
    env: &impl Environment,
    config: &DetectionConfig,
    forced: Option<&str>,
) -> Detection {
    if let Some(forced) = forced {
        return Detection {
            language: forced.to_string(),
            source: DetectionSource::Forced,
        };
    }

    let default = default_language(env, config);
    if is_test_mode(env, config) {
        debug!(language = %default, "test mode, using default language");
        return Detection {
            language: default,
            source: DetectionSource::TestMode,
        };
    }

    let (secondary, base) = match config.supported_tags() {
        Ok(tags) => tags,
        Err(err) => {
            warn!(%err, "cannot build locale matcher, using default language");
            return Detection {
                language: default,
                source: DetectionSource::Default,
            };
        }
    };
    let supported = [secondary.clone(), base.clone()];

    for name in &config.locale_vars {
        let Some(value) = env.non_empty_var(name) else {
            continue;
        };
        let Some(result) = match_locale_strings(&value, &supported, &base) else {
            debug!(variable = %name, %value, "locale value not recognised");
            continue;
        };
        if result.selected == secondary {
            debug!(
                variable = %name,
                %value,
                language = %config.secondary_language,
                "language detected"
            );
            return Detection {
                language: config.secondary_language.clone(),
                source: DetectionSource::Variable(name.clone()),
            };
        }
    }

    debug!(language = %default, "no locale variable selected the secondary language");
    Detection {
        language: default,
        source: DetectionSource::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::{DetectionSource, default_language, detect, is_test_mode, looks_like_test_harness};
    use crate::config::DetectionConfig;
    use crate::env::MapEnvironment;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn default_language_prefers_configured_value() {
        let config = DetectionConfig::default();
        assert_eq!(default_language(&MapEnvironment::new(), &config), "en");
        let env = MapEnvironment::new().with_var("L10N_DEFAULT_LANGUAGE", "fr");
        assert_eq!(default_language(&env, &config), "fr");
        let env = MapEnvironment::new().with_var("L10N_DEFAULT_LANGUAGE", "");
        assert_eq!(default_language(&env, &config), "en");
    }

    #[test]
    fn detects_each_locale_variable() {
        let config = DetectionConfig::default();
        let cases = [
            ("LANG", "ja_JP.UTF-8", "ja"),
            ("LC_MESSAGES", "ja", "ja"),
            ("LANG", "en_US.UTF-8", "en"),
            ("LANG", "zh_CN.UTF-8", "en"),
        ];
        for (name, value, expected) in cases {
            let env = MapEnvironment::new().with_var(name, value);
            let detection = detect(&env, &config, None);
            assert_eq!(detection.language, expected, "{name}={value}");
        }
    }

    #[test]
    fn later_variables_are_consulted_after_a_non_match() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new()
            .with_var("LANGUAGE", "en_US")
            .with_var("LANG", "ja_JP.UTF-8");
        let detection = detect(&env, &config, None);
        assert_eq!(detection.language, "ja");
        assert_eq!(detection.source, DetectionSource::Variable("LANG".to_string()));
    }

    #[test]
    fn language_list_is_searched_in_order() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new().with_var("LANGUAGE", "fr:ja:en");
        assert_eq!(detect(&env, &config, None).language, "ja");
    }

    #[test]
    fn unmatched_environment_keeps_configured_default() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new()
            .with_var("LANG", "C.UTF-8")
            .with_var("L10N_DEFAULT_LANGUAGE", "fr");
        let detection = detect(&env, &config, None);
        assert_eq!(detection.language, "fr");
        assert_eq!(detection.source, DetectionSource::Default);
    }

    #[test]
    fn forced_language_bypasses_everything() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new()
            .with_var("LANG", "ja_JP.UTF-8")
            .with_var("L10N_TEST_MODE", "1");
        let detection = detect(&env, &config, Some("de"));
        assert_eq!(detection.language, "de");
        assert_eq!(detection.source, DetectionSource::Forced);
    }

    #[test]
    fn explicit_test_mode_uses_default() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new()
            .with_var("LANG", "ja_JP.UTF-8")
            .with_var("L10N_TEST_MODE", "1")
            .with_var("L10N_DEFAULT_LANGUAGE", "fr");
        let detection = detect(&env, &config, None);
        assert_eq!(detection.language, "fr");
        assert_eq!(detection.source, DetectionSource::TestMode);
    }

    #[test]
    fn test_mode_flag_must_be_one() {
        let config = DetectionConfig::default();
        let env = MapEnvironment::new().with_var("L10N_TEST_MODE", "true");
        assert!(!is_test_mode(&env, &config));
    }

    #[test]
    fn recognises_cargo_test_binaries() {
        assert!(looks_like_test_harness(&args(&[
            "/work/target/debug/deps/l10n_runtime-0123456789abcdef"
        ])));
        assert!(!looks_like_test_harness(&args(&["./app", "--test-threads=1"])));
        assert!(!looks_like_test_harness(&args(&["./app", "--nocapture"])));
        assert!(!looks_like_test_harness(&args(&["/usr/bin/app"])));
        assert!(!looks_like_test_harness(&args(&["/work/target/debug/deps/tool-v2"])));
        assert!(!looks_like_test_harness(&[]));
    }

    #[test]
    fn user_flags_do_not_trigger_test_mode() {
        let config = DetectionConfig::default();
        for flag in ["--exact", "--ignored", "--include-ignored", "--nocapture"] {
            let env = MapEnvironment::new()
                .with_args(["/usr/local/bin/search", flag, "pattern"])
                .with_var("LANG", "ja_JP.UTF-8");
            assert!(!is_test_mode(&env, &config), "{flag}");
            let detection = detect(&env, &config, None);
            assert_eq!(detection.language, "ja");
            assert_eq!(detection.source, DetectionSource::Variable("LANG".to_string()));
        }
    }

    #[test]
    fn argument_sniffing_can_be_disabled() {
        let config = DetectionConfig {
            sniff_test_args: false,
            ..DetectionConfig::default()
        };
        let env = MapEnvironment::new()
            .with_args(["/work/target/debug/deps/app-0123456789abcdef"])
            .with_var("LANG", "ja_JP.UTF-8");
        assert!(!is_test_mode(&env, &config));
        assert_eq!(detect(&env, &config, None).language, "ja");
    }
}
