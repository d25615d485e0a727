use crate::dataset::Dataset;
use crate::error::{Result, WayfarerError};
use crate::model::DestinationId;
use regex::RegexBuilder;

/// Ids of records whose `field` matches `pattern`, case-insensitively, in
/// dataset order. A positive `limit` truncates the result without reordering.
///
/// `field` is a raw column name (`Country`, `Destination`, ...). Unknown
/// columns and empty values never match.
pub fn run(
    dataset: &Dataset,
    field: Option<&str>,
    pattern: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<DestinationId>> {
    let (field, pattern) = match (non_empty(field), non_empty(pattern)) {
        (Some(field), Some(pattern)) => (field, pattern),
        _ => {
            return Err(WayfarerError::MissingParameter(
                "Field and pattern are required parameters.".to_string(),
            ))
        }
    };

    let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;

    let matches = dataset
        .records()
        .iter()
        .filter(|record| {
            record
                .field_value(field)
                .is_some_and(|value| !value.is_empty() && regex.is_match(&value))
        })
        .map(|record| record.id);

    Ok(match limit {
        Some(n) if n > 0 => matches.take(n).collect(),
        _ => matches.collect(),
    })
}

/// Interpret the raw `n` query parameter from its leading digits, so `2abc`
/// limits to 2. Missing, non-numeric and non-positive values mean "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<usize> {
    let s = raw?.trim_start();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse::<usize>().ok().filter(|n| *n > 0)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::sample;

    #[test]
    fn matches_case_insensitively() {
        let dataset = sample();
        let ids = run(&dataset, Some("Country"), Some("france"), None).unwrap();
        assert_eq!(ids, vec![2, 3]);

        let upper = run(&dataset, Some("Country"), Some("FRANCE"), None).unwrap();
        assert_eq!(upper, ids);
    }

    #[test]
    fn substring_and_regex_patterns() {
        let dataset = sample();
        assert_eq!(
            run(&dataset, Some("Destination"), Some("ar"), None).unwrap(),
            vec![2]
        );
        assert_eq!(
            run(&dataset, Some("Category"), Some("^coastal"), None).unwrap(),
            vec![3, 4]
        );
    }

    #[test]
    fn limit_truncates_without_reordering() {
        let dataset = sample();
        let ids = run(&dataset, Some("Currency"), Some("euro"), Some(3)).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn zero_limit_means_everything() {
        let dataset = sample();
        let ids = run(&dataset, Some("Currency"), Some("euro"), Some(0)).unwrap();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn missing_field_or_pattern_is_rejected() {
        let dataset = sample();
        for (field, pattern) in [(None, Some("x")), (Some("Country"), None), (Some(""), Some("x"))] {
            assert!(matches!(
                run(&dataset, field, pattern, None),
                Err(WayfarerError::MissingParameter(_))
            ));
        }
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let dataset = sample();
        assert!(matches!(
            run(&dataset, Some("Country"), Some("(unclosed"), None),
            Err(WayfarerError::InvalidPattern(_))
        ));
    }

    #[test]
    fn unknown_field_matches_nothing() {
        let dataset = sample();
        let ids = run(&dataset, Some("Altitude"), Some(".*"), None).unwrap();
        assert!(ids.is_empty());
    }

    #[test]
    fn empty_and_absent_values_never_match() {
        let dataset = sample();
        // Amalfi Coast has no latitude
        let ids = run(&dataset, Some("Latitude"), Some(".*"), None).unwrap();
        assert_eq!(ids, vec![1, 2, 3, 5]);
    }

    #[test]
    fn coordinates_match_the_loaded_cell_text() {
        let dataset = sample();
        assert_eq!(
            run(&dataset, Some("Longitude"), Some(r"^7\.2620$"), None).unwrap(),
            vec![3]
        );
        assert_eq!(
            run(&dataset, Some("Latitude"), Some("52.5200"), None).unwrap(),
            vec![5]
        );
        assert_eq!(
            run(&dataset, Some("Longitude"), Some("n/a"), None).unwrap(),
            vec![4]
        );
    }

    #[test]
    fn parse_limit_ignores_junk() {
        assert_eq!(parse_limit(Some("2")), Some(2));
        assert_eq!(parse_limit(Some("0")), None);
        assert_eq!(parse_limit(Some("-4")), None);
        assert_eq!(parse_limit(Some("lots")), None);
        assert_eq!(parse_limit(Some("2abc")), Some(2));
        assert_eq!(parse_limit(Some(" 3")), Some(3));
        assert_eq!(parse_limit(Some("")), None);
        assert_eq!(parse_limit(None), None);
    }
}
