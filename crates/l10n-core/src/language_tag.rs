use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{CoreError, CoreResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    original: String,
    normalized: String,
    match_subtags: Vec<String>,
}

impl LanguageTag {
    pub fn parse(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidTag("language tag is empty"));
        }

        let subtags: Vec<&str> = trimmed.split(['-', '_']).collect();
        if subtags.iter().any(|part| part.is_empty()) {
            return Err(CoreError::InvalidTag("language tag has empty subtag"));
        }

        let mut normalized_parts = Vec::with_capacity(subtags.len());
        let mut match_parts = Vec::with_capacity(subtags.len());
        let mut script_seen = false;
        let mut region_seen = false;
        let mut stop_for_match = false;

        for (idx, part) in subtags.iter().enumerate() {
            if idx == 0 {
                if !is_alpha(part) || !(2..=8).contains(&part.len()) {
                    return Err(CoreError::InvalidTag("invalid language subtag"));
                }
                let lower = part.to_ascii_lowercase();
                normalized_parts.push(lower.clone());
                match_parts.push(lower);
                continue;
            }

            if part.len() == 1 {
                stop_for_match = true;
                normalized_parts.push(part.to_ascii_lowercase());
                continue;
            }

            let normalized = if stop_for_match {
                part.to_ascii_lowercase()
            } else if !script_seen && !region_seen && part.len() == 4 && is_alpha(part) {
                script_seen = true;
                titlecase(part)
            } else if !region_seen && is_region(part) {
                region_seen = true;
                part.to_ascii_uppercase()
            } else {
                part.to_ascii_lowercase()
            };

            normalized_parts.push(normalized.clone());
            if !stop_for_match {
                match_parts.push(normalized);
            }
        }

        Ok(Self {
            original: trimmed.to_string(),
            normalized: normalized_parts.join("-"),
            match_subtags: match_parts,
        })
    }

    /// `ja_JP.UTF-8` -> `ja-JP`; `C` and `POSIX` are rejected.
    pub fn parse_posix(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let locale = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or(trimmed);
        if locale == "C" || locale == "POSIX" {
            return Err(CoreError::Unsupported("posix C locale"));
        }
        let mut tag = Self::parse(locale)?;
        tag.original = trimmed.to_string();
        Ok(tag)
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn language(&self) -> &str {
        &self.match_subtags[0]
    }

    pub fn match_subtags(&self) -> &[String] {
        &self.match_subtags
    }
}

fn is_alpha(value: &str) -> bool {
    value.chars().all(|ch| ch.is_ascii_alphabetic())
}

fn is_region(value: &str) -> bool {
    (value.len() == 2 && is_alpha(value))
        || (value.len() == 3 && value.chars().all(|ch| ch.is_ascii_digit()))
}

fn titlecase(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(value.len());
    output.push(first.to_ascii_uppercase());
    for ch in chars {
        output.push(ch.to_ascii_lowercase());
    }
    output
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::LanguageTag;
    use crate::CoreError;

    #[test]
    fn normalize_language_script_region() {
        let tag = LanguageTag::parse("zh-hant-tw").expect("valid tag");
        assert_eq!(tag.normalized(), "zh-Hant-TW");
        assert_eq!(tag.language(), "zh");
        assert_eq!(
            tag.match_subtags(),
            &[String::from("zh"), String::from("Hant"), String::from("TW")]
        );
    }

    #[test]
    fn accepts_underscore_separators() {
        let tag = LanguageTag::parse("pt_br").expect("valid tag");
        assert_eq!(tag.normalized(), "pt-BR");
        assert_eq!(tag.original(), "pt_br");
    }

    #[test]
    fn stops_matching_on_private_use() {
        let tag = LanguageTag::parse("es-PE-x-northperu").expect("valid tag");
        assert_eq!(tag.normalized(), "es-PE-x-northperu");
        assert_eq!(
            tag.match_subtags(),
            &[String::from("es"), String::from("PE")]
        );
    }

    #[test]
    fn posix_strips_codeset_and_modifier() {
        let tag = LanguageTag::parse_posix("ja_JP.UTF-8").expect("valid locale");
        assert_eq!(tag.normalized(), "ja-JP");
        assert_eq!(tag.original(), "ja_JP.UTF-8");

        let tag = LanguageTag::parse_posix("de_DE@euro").expect("valid locale");
        assert_eq!(tag.normalized(), "de-DE");
    }

    #[test]
    fn posix_accepts_bare_language() {
        let tag = LanguageTag::parse_posix("ja").expect("valid locale");
        assert_eq!(tag.normalized(), "ja");
    }

    #[test]
    fn posix_rejects_portable_locale() {
        let err = LanguageTag::parse_posix("C.UTF-8").expect_err("C has no language");
        assert_eq!(err, CoreError::Unsupported("posix C locale"));
        assert!(LanguageTag::parse_posix("POSIX").is_err());
    }

    #[test]
    fn rejects_empty_tag() {
        let err = LanguageTag::parse(" ").expect_err("empty tag should fail");
        assert_eq!(err, CoreError::InvalidTag("language tag is empty"));
    }

    #[test]
    fn rejects_empty_subtag() {
        let err = LanguageTag::parse("en--US").expect_err("empty subtag should fail");
        assert_eq!(err, CoreError::InvalidTag("language tag has empty subtag"));
    }
}
