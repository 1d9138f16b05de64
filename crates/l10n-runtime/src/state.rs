#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageState {
    active: String,
    forced: Option<String>,
}

impl LanguageState {
    pub fn new(active: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            forced: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn forced(&self) -> Option<&str> {
        self.forced.as_deref()
    }

    pub fn force(&mut self, language: String) {
        self.active.clone_from(&language);
        self.forced = Some(language);
    }

    pub fn clear_forced(&mut self) {
        self.forced = None;
    }

    pub(crate) fn set_detected(&mut self, language: String) {
        self.active = language;
    }
}
