//! Filter criteria and the conjunctive record predicate.
//!
//! Criteria are plain values owned by the caller. Each dimension left empty
//! (or at zero for `min_deposit`) places no constraint on a record.

use serde::{Deserialize, Serialize};

use crate::catalog::CasinoRecord;
use crate::core::payment::method_matches;
use crate::core::types::GameType;

/// Minimum deposit restored by [`FilterCriteria::clear`].
pub const DEFAULT_MIN_DEPOSIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Requested game tags; any one present on a record is enough.
    pub game_types: Vec<GameType>,
    /// Records must require at least this deposit.
    pub min_deposit: u32,
    /// Requested rails or rail categories; any one supported is enough.
    pub payment_methods: Vec<String>,
    pub search_query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            game_types: Vec::new(),
            min_deposit: DEFAULT_MIN_DEPOSIT,
            payment_methods: Vec::new(),
            search_query: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Criteria that accept every record.
    pub fn unconstrained() -> Self {
        Self {
            min_deposit: 0,
            ..Self::default()
        }
    }

    /// Add `game_type` if absent, remove it if present.
    pub fn toggle_game_type(&mut self, game_type: GameType) {
        toggle(&mut self.game_types, game_type);
    }

    /// Add `method` if absent, remove it if present. Exact string match.
    pub fn toggle_payment_method(&mut self, method: &str) {
        toggle(&mut self.payment_methods, method.to_string());
    }

    pub fn set_min_deposit(&mut self, min_deposit: u32) {
        self.min_deposit = min_deposit;
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Reset every dimension to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Labels for each non-default constraint, in panel order.
    pub fn active_chips(&self, currency: &str) -> Vec<String> {
        let mut chips: Vec<String> = self
            .game_types
            .iter()
            .map(|tag| tag.label().to_string())
            .collect();
        if self.min_deposit != DEFAULT_MIN_DEPOSIT {
            chips.push(format!("Min {}{}", currency, self.min_deposit));
        }
        chips.extend(self.payment_methods.iter().cloned());
        if let Some(query) = self.trimmed_query() {
            chips.push(format!("\"{}\"", query));
        }
        chips
    }

    fn trimmed_query(&self) -> Option<&str> {
        let query = self.search_query.trim();
        (!query.is_empty()).then_some(query)
    }
}

/// True if `record` passes every constraint in `criteria`.
pub fn matches(record: &CasinoRecord, criteria: &FilterCriteria) -> bool {
    matches_game_types(record, &criteria.game_types)
        && record.min_deposit >= criteria.min_deposit
        && matches_payment_methods(record, &criteria.payment_methods)
        && matches_query(record, criteria.trimmed_query())
}

/// Records passing `criteria`, in input order.
pub fn filter_all(records: &[CasinoRecord], criteria: &FilterCriteria) -> Vec<CasinoRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .cloned()
        .collect()
}

/// Featured records in input order, truncated to `limit` when given.
pub fn featured(records: &[CasinoRecord], limit: Option<usize>) -> Vec<CasinoRecord> {
    records
        .iter()
        .filter(|record| record.featured)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}

fn matches_game_types(record: &CasinoRecord, requested: &[GameType]) -> bool {
    if requested.is_empty() {
        return true;
    }
    let tags = record.effective_game_types();
    requested.iter().any(|tag| tags.contains(tag))
}

fn matches_payment_methods(record: &CasinoRecord, requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    record.payment_methods.iter().any(|method| {
        requested
            .iter()
            .any(|wanted| method_matches(method, wanted))
    })
}

fn matches_query(record: &CasinoRecord, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(query) => record.name.to_lowercase().contains(&query.to_lowercase()),
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if let Some(pos) = items.iter().position(|existing| *existing == item) {
        items.remove(pos);
    } else {
        items.push(item);
    }
}
