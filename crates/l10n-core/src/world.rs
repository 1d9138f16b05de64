use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;
use alloc::string::String;

use crate::Lexicon;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    lexicons: BTreeMap<String, Lexicon>,
}

impl World {
    pub fn new() -> Self {
        Self {
            lexicons: BTreeMap::new(),
        }
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        let mut world = Self::new();
        world.lexicons.insert(language.into(), Lexicon::new());
        world
    }

    /// Later registrations merge into the existing lexicon; newest wins.
    pub fn register(&mut self, language: impl Into<String>, lexicon: Lexicon) {
        match self.lexicons.entry(language.into()) {
            Entry::Vacant(entry) => {
                entry.insert(lexicon);
            }
            Entry::Occupied(mut entry) => {
                entry.get_mut().merge(lexicon);
            }
        }
    }

    pub fn lexicon(&self, language: &str) -> Option<&Lexicon> {
        self.lexicons.get(language)
    }

    pub fn translate<'a>(&'a self, language: &str, phrase: &'a str) -> &'a str {
        self.lexicons
            .get(language)
            .and_then(|lexicon| lexicon.get(phrase))
            .unwrap_or(phrase)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.lexicons.keys().map(String::as_str)
    }
}
