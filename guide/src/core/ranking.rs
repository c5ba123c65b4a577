//! Deterministic ranking of casino records.

use std::cmp::Ordering;

use crate::catalog::CasinoRecord;
use crate::core::projection::project;
use crate::core::types::{SortDirection, SortField};

/// Return a new vector of `records` ordered by `field` in `direction`.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order. Records without a bonus amount (`NaN` key) always sort last.
pub fn rank(
    records: &[CasinoRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<CasinoRecord> {
    let mut keyed: Vec<(f64, &CasinoRecord)> = records
        .iter()
        .map(|record| (project(record, field), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(*a, *b, direction));
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}

/// Ids of `records` in ranked order.
pub fn ranked_ids(
    records: &[CasinoRecord],
    field: SortField,
    direction: SortDirection,
) -> Vec<String> {
    rank(records, field, direction)
        .into_iter()
        .map(|record| record.id)
        .collect()
}

/// Compare two projected keys. `NaN` is greater than every number regardless
/// of direction, and equal to itself.
pub fn compare_keys(a: f64, b: f64, direction: SortDirection) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ascending = a.total_cmp(&b);
            match direction {
                SortDirection::Ascending => ascending,
                SortDirection::Descending => ascending.reverse(),
            }
        }
    }
}
