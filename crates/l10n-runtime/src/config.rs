use std::fs;
use std::path::Path;

use l10n_core::LanguageTag;
use serde::Deserialize;

use crate::error::{RuntimeError, RuntimeResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub base_language: String,
    pub secondary_language: String,
    pub locale_vars: Vec<String>,
    pub sniff_test_args: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            base_language: "en".to_string(),
            secondary_language: "ja".to_string(),
            locale_vars: vec![
                "LANGUAGE".to_string(),
                "LC_ALL".to_string(),
                "LC_MESSAGES".to_string(),
                "LANG".to_string(),
            ],
            sniff_test_args: true,
        }
    }
}

impl DetectionConfig {
    pub fn validate(&self) -> RuntimeResult<()> {
        let (secondary, base) = self.supported_tags()?;
        if secondary.normalized() == base.normalized() {
            return Err(RuntimeError::InvalidConfig(
                "secondary language equals base language",
            ));
        }
        if self.locale_vars.iter().all(|name| name.trim().is_empty()) {
            return Err(RuntimeError::InvalidConfig("no locale variables configured"));
        }
        Ok(())
    }

    /// `(secondary, base)`
    pub fn supported_tags(&self) -> RuntimeResult<(LanguageTag, LanguageTag)> {
        let secondary = LanguageTag::parse(&self.secondary_language)?;
        let base = LanguageTag::parse(&self.base_language)?;
        Ok((secondary, base))
    }
}

pub fn load_config(path: &Path) -> RuntimeResult<DetectionConfig> {
    let contents = fs::read_to_string(path)?;
    let config: DetectionConfig = toml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<DetectionConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(DetectionConfig::default())
    }
}
