use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Lexicon {
    entries: BTreeMap<String, String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(
        &mut self,
        phrase: impl Into<String>,
        translation: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(phrase.into(), translation.into())
    }

    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase).map(String::as_str)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.contains_key(phrase)
    }

    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(phrase, translation)| (phrase.as_str(), translation.as_str()))
    }
}

impl<P, T> FromIterator<(P, T)> for Lexicon
where
    P: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (phrase, translation) in iter {
            lexicon.insert(phrase, translation);
        }
        lexicon
    }
}

impl<P, T, const N: usize> From<[(P, T); N]> for Lexicon
where
    P: Into<String>,
    T: Into<String>,
{
    fn from(pairs: [(P, T); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Lexicon {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
