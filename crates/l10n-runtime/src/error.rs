use l10n_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TranslatedError {
    message: String,
}

impl TranslatedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::{RuntimeError, TranslatedError};
    use l10n_core::CoreError;

    #[test]
    fn translated_error_displays_message() {
        let err = TranslatedError::new("接続に失敗しました: timeout");
        assert_eq!(err.to_string(), "接続に失敗しました: timeout");
        assert_eq!(err.message(), "接続に失敗しました: timeout");
    }

    #[test]
    fn core_errors_pass_through() {
        let err = RuntimeError::from(CoreError::InvalidTag("language tag is empty"));
        assert_eq!(err.to_string(), "invalid language tag: language tag is empty");
    }
}
