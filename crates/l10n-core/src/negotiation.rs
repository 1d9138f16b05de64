use alloc::string::String;
use alloc::vec::Vec;

use crate::LanguageTag;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationResult {
    pub selected: LanguageTag,
    pub requested: LanguageTag,
    pub trace: Option<NegotiationTrace>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegotiationTrace {
    pub attempts: Vec<String>,
}

pub fn negotiate_lookup(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate_lookup_internal(requested, supported, default_locale, false)
}

pub fn negotiate_lookup_with_trace(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
) -> NegotiationResult {
    negotiate_lookup_internal(requested, supported, default_locale, true)
}

/// `candidate` may be a `:` or `,` separated list; `;q=` weights are ignored
/// and entries that do not parse are skipped.
pub fn match_locale_strings(
    candidate: &str,
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
) -> Option<NegotiationResult> {
    let requested: Vec<LanguageTag> = candidate
        .split([':', ','])
        .map(|entry| entry.split(';').next().unwrap_or(entry))
        .filter_map(|entry| LanguageTag::parse_posix(entry).ok())
        .collect();
    if requested.is_empty() {
        return None;
    }
    Some(negotiate_lookup(&requested, supported, default_locale))
}

fn negotiate_lookup_internal(
    requested: &[LanguageTag],
    supported: &[LanguageTag],
    default_locale: &LanguageTag,
    with_trace: bool,
) -> NegotiationResult {
    let mut trace = if with_trace {
        Some(NegotiationTrace {
            attempts: Vec::new(),
        })
    } else {
        None
    };

    for requested_tag in requested {
        let mut tried = Vec::new();
        tried.push(String::from(requested_tag.normalized()));

        let mut match_parts = requested_tag.match_subtags().to_vec();
        if !match_parts.is_empty() {
            let full_match = match_parts.join("-");
            if full_match != requested_tag.normalized() {
                tried.push(full_match);
            }
            while match_parts.len() > 1 {
                match_parts.pop();
                tried.push(match_parts.join("-"));
            }
        }

        for attempt in tried {
            if let Some(trace) = trace.as_mut() {
                trace.attempts.push(attempt.clone());
            }
            if let Some(selected) = find_supported(&attempt, supported) {
                return NegotiationResult {
                    selected,
                    requested: requested_tag.clone(),
                    trace,
                };
            }
        }
    }

    NegotiationResult {
        selected: default_locale.clone(),
        requested: requested
            .first()
            .cloned()
            .unwrap_or_else(|| default_locale.clone()),
        trace,
    }
}

fn find_supported(tag: &str, supported: &[LanguageTag]) -> Option<LanguageTag> {
    supported
        .iter()
        .find(|candidate| candidate.normalized() == tag)
        .cloned()
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{match_locale_strings, negotiate_lookup, negotiate_lookup_with_trace};
    use crate::LanguageTag;

    fn tag(value: &str) -> LanguageTag {
        LanguageTag::parse(value).expect("valid tag")
    }

    #[test]
    fn lookup_falls_back_by_truncation() {
        let requested = vec![tag("ja-JP")];
        let supported = vec![tag("ja"), tag("en")];
        let result = negotiate_lookup(&requested, &supported, &tag("en"));
        assert_eq!(result.selected.normalized(), "ja");
        assert_eq!(result.requested.normalized(), "ja-JP");
    }

    #[test]
    fn lookup_returns_default_when_missing() {
        let requested = vec![tag("zh-CN")];
        let supported = vec![tag("ja"), tag("en")];
        let result = negotiate_lookup(&requested, &supported, &tag("en"));
        assert_eq!(result.selected.normalized(), "en");
    }

    #[test]
    fn trace_records_attempts() {
        let requested = vec![tag("de-DE-u-co-phonebk")];
        let supported = vec![tag("de-DE")];
        let result = negotiate_lookup_with_trace(&requested, &supported, &tag("en"));
        let trace = result.trace.expect("trace should be present");
        assert_eq!(
            trace.attempts,
            vec![String::from("de-DE-u-co-phonebk"), String::from("de-DE")]
        );
    }

    #[test]
    fn matches_posix_locale_value() {
        let supported = vec![tag("ja"), tag("en")];
        let result =
            match_locale_strings("ja_JP.UTF-8", &supported, &tag("en")).expect("parsed locale");
        assert_eq!(result.selected, tag("ja"));
    }

    #[test]
    fn matches_first_supported_entry_of_a_list() {
        let supported = vec![tag("ja"), tag("en")];
        let result = match_locale_strings("fr_FR:ja:en", &supported, &tag("en")).expect("list");
        assert_eq!(result.selected, tag("ja"));

        let result =
            match_locale_strings("fr-CH, en;q=0.9, ja;q=0.8", &supported, &tag("en")).expect("list");
        assert_eq!(result.selected, tag("en"));
    }

    #[test]
    fn unparseable_candidate_yields_none() {
        let supported = vec![tag("ja"), tag("en")];
        assert!(match_locale_strings("C", &supported, &tag("en")).is_none());
        assert!(match_locale_strings("", &supported, &tag("en")).is_none());
    }
}
