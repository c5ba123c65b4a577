//! Semantic invariants not expressible via JSON Schema.

use std::collections::HashSet;

use crate::catalog::CasinoRecord;

/// Check catalog invariants:
/// - No empty or duplicate ids
/// - Non-empty names
/// - `rating` finite and within `[0, 5]`
/// - Non-empty affiliate links
pub fn validate_invariants(records: &[CasinoRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let at = format!("casinos[{}]", index);
        if record.id.trim().is_empty() {
            errors.push(format!("{}: id must be non-empty", at));
        } else if !seen.insert(record.id.as_str()) {
            errors.push(format!("duplicate id '{}' at {}", record.id, at));
        }
        if record.name.trim().is_empty() {
            errors.push(format!("{}: name must be non-empty", at));
        }
        if !record.rating.is_finite() || !(0.0..=5.0).contains(&record.rating) {
            errors.push(format!(
                "{}: rating {} outside [0, 5]",
                at, record.rating
            ));
        }
        if record.affiliate_link.trim().is_empty() {
            errors.push(format!("{}: affiliateLink must be non-empty", at));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::test_support::{casino, rated};

    #[test]
    fn sample_catalog_is_valid() {
        assert!(validate_invariants(&sample_catalog().casinos).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let mut blank = casino("");
        blank.name = " ".to_string();
        blank.affiliate_link = String::new();
        let records = vec![casino("dup"), casino("dup"), rated("hot", 5.5), blank];

        let errors = validate_invariants(&records);
        assert!(errors.iter().any(|err| err.contains("duplicate id 'dup'")));
        assert!(errors.iter().any(|err| err.contains("rating 5.5")));
        assert!(errors.iter().any(|err| err.contains("id must be non-empty")));
        assert!(errors.iter().any(|err| err.contains("name must be non-empty")));
        assert!(errors.iter().any(|err| err.contains("affiliateLink")));
    }

    #[test]
    fn nan_rating_is_rejected() {
        let errors = validate_invariants(&[rated("nan", f64::NAN)]);
        assert_eq!(errors.len(), 1);
    }
}
