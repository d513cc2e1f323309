//! Pattern-template extraction: named capture groups become fields.

use regex::Regex;

use super::Result;
use crate::error::ExtractionError;
use crate::models::record::FieldMap;

/// Apply a compiled template to the payload.
///
/// Every named group that participated in the match becomes a field keyed
/// by the group name; groups that did not participate are omitted.
pub(super) fn extract(re: &Regex, payload: &str) -> Result<FieldMap> {
    if payload.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let caps = re.captures(payload).ok_or(ExtractionError::NoMatch)?;

    let mut fields = FieldMap::new();
    for name in re.capture_names().flatten() {
        if let Some(m) = caps.name(name) {
            fields.insert(name, m.as_str());
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use regex::RegexBuilder;

    use super::*;

    fn compile(src: &str) -> Regex {
        RegexBuilder::new(src)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_named_groups_become_fields() {
        let re = compile(r"^F:(?<F>\w+);L:(?<L>\w+);C:(?<C>\w+)$");
        let fields = extract(&re, "F:Jane;L:Doe;C:Acme").unwrap();

        assert_eq!(fields.get("F"), Some("Jane"));
        assert_eq!(fields.get("L"), Some("Doe"));
        assert_eq!(fields.get("C"), Some("Acme"));
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_anchored_pattern_requires_all_groups() {
        let re = compile(r"^F:(?<F>\w+);L:(?<L>\w+);C:(?<C>\w+)$");
        let err = extract(&re, "F:Jane;L:Doe").unwrap_err();
        assert!(matches!(err, ExtractionError::NoMatch));
    }

    #[test]
    fn test_empty_payload() {
        let re = compile(r"(?<F>\w+)");
        assert!(matches!(extract(&re, "").unwrap_err(), ExtractionError::Empty));
    }

    #[test]
    fn test_non_participating_group_omitted() {
        let re = compile(r"F:(?<F>\w+);L:(?<L>\w+)(?:;K:(?<K>\w+))?");
        let fields = extract(&re, "F:Jane;L:Doe").unwrap();

        assert_eq!(fields.get("F"), Some("Jane"));
        assert_eq!(fields.get("K"), None);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let re = compile(r"f:(?<F>\w+);l:(?<L>\w+)");
        let fields = extract(&re, "F:JANE;L:DOE").unwrap();
        assert_eq!(fields.get("F"), Some("JANE"));
    }

    #[test]
    fn test_dot_matches_newline() {
        let re = compile(r"^NAME:(?<F>.+);(?<L>\w+)$");
        let fields = extract(&re, "NAME:Jane\nMarie;Doe").unwrap();
        assert_eq!(fields.get("F"), Some("Jane\nMarie"));
    }
}
