//! Listing assembly shared by `guide render`, `guide filter` and the UI server.
//!
//! Combines the pure ranking and filter logic with the loaded catalog and
//! config. The featured strip ignores filters; the card grid keeps authored
//! order; the comparison table is the filtered list ranked by the sort state.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Catalog, CasinoRecord};
use crate::core::filter::{FilterCriteria, featured, filter_all};
use crate::core::ranking::rank;
use crate::core::sort_state::SortState;
use crate::core::types::{GameType, SortDirection, SortField};
use crate::io::catalog_store::load_catalog;
use crate::io::config::{GuideConfig, load_config};
use crate::io::init::GuidePaths;

/// Sort and filter selection for one rendering of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub sort: SortState,
    pub criteria: FilterCriteria,
}

impl ListingRequest {
    /// The initial page state described by `cfg`.
    pub fn from_config(cfg: &GuideConfig) -> Self {
        Self {
            sort: cfg.sort,
            criteria: FilterCriteria {
                min_deposit: cfg.default_min_deposit,
                ..FilterCriteria::default()
            },
        }
    }

    /// Query string that reproduces this request, without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut pairs = vec![
            ("sort", self.sort.field.as_str().to_string()),
            ("dir", self.sort.direction.as_str().to_string()),
        ];
        if !self.criteria.game_types.is_empty() {
            let labels: Vec<&str> = self.criteria.game_types.iter().map(|t| t.label()).collect();
            pairs.push(("game", labels.join(",")));
        }
        if !self.criteria.payment_methods.is_empty() {
            pairs.push(("payment", self.criteria.payment_methods.join(",")));
        }
        pairs.push(("min_deposit", self.criteria.min_deposit.to_string()));
        if !self.criteria.search_query.trim().is_empty() {
            pairs.push(("q", self.criteria.search_query.trim().to_string()));
        }
        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Raw query parameters as they arrive from a URL.
///
/// `game` and `payment` are comma-separated lists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub game: Option<String>,
    pub payment: Option<String>,
    pub min_deposit: Option<u32>,
    pub q: Option<String>,
}

impl ListingQuery {
    /// Resolve against the config defaults. Unknown field, direction or game
    /// type names are errors.
    pub fn into_request(self, cfg: &GuideConfig) -> Result<ListingRequest, String> {
        let mut request = ListingRequest::from_config(cfg);
        if let Some(sort) = self.sort.as_deref() {
            request.sort.field = sort.parse::<SortField>()?;
        }
        if let Some(dir) = self.dir.as_deref() {
            request.sort.direction = dir.parse::<SortDirection>()?;
        }
        for item in split_list(self.game.as_deref()) {
            let tag = item.parse::<GameType>()?;
            if !request.criteria.game_types.contains(&tag) {
                request.criteria.toggle_game_type(tag);
            }
        }
        for item in split_list(self.payment.as_deref()) {
            if !request.criteria.payment_methods.iter().any(|m| m == item) {
                request.criteria.toggle_payment_method(item);
            }
        }
        if let Some(min_deposit) = self.min_deposit {
            request.criteria.set_min_deposit(min_deposit);
        }
        if let Some(q) = self.q.as_deref() {
            request.criteria.set_search_query(q);
        }
        Ok(request)
    }
}

/// Everything the page shows for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub request: ListingRequest,
    pub featured: Vec<CasinoRecord>,
    pub grid: Vec<CasinoRecord>,
    pub table: Vec<CasinoRecord>,
}

/// Build the listing from in-memory records.
pub fn build_listing(
    records: &[CasinoRecord],
    request: &ListingRequest,
    cfg: &GuideConfig,
) -> Listing {
    let grid = filter_all(records, &request.criteria);
    let table = rank(&grid, request.sort.field, request.sort.direction);
    debug!(
        total = records.len(),
        matched = grid.len(),
        sort = %request.sort.field,
        dir = %request.sort.direction,
        "listing built"
    );
    Listing {
        request: request.clone(),
        featured: featured(records, cfg.featured_limit),
        grid,
        table,
    }
}

/// Loaded project inputs.
#[derive(Debug, Clone)]
pub struct Project {
    pub paths: GuidePaths,
    pub config: GuideConfig,
    pub catalog: Catalog,
}

/// Load config and catalog for the project at `root`.
pub fn load_project(root: &Path) -> Result<Project> {
    let paths = GuidePaths::new(root);
    let config = load_config(&paths.config_path).context("load guide config")?;
    let catalog = load_catalog(&paths.catalog_path).context("load casino catalog")?;
    Ok(Project {
        paths,
        config,
        catalog,
    })
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn default_request_shows_everything_ranked_by_rating() {
        let cfg = GuideConfig::default();
        let casinos = sample_catalog().casinos;
        let listing = build_listing(&casinos, &ListingRequest::from_config(&cfg), &cfg);
        assert_eq!(listing.grid, casinos);
        assert_eq!(listing.table, casinos);
        assert_eq!(listing.featured.len(), 10);
    }

    #[test]
    fn filters_apply_to_grid_and_table_but_not_featured() {
        let cfg = GuideConfig {
            featured_limit: Some(5),
            ..GuideConfig::default()
        };
        let mut request = ListingRequest::from_config(&cfg);
        request.criteria.set_min_deposit(300);
        request.sort = SortState::new(SortField::MinDeposit, SortDirection::Ascending);

        let listing = build_listing(&sample_catalog().casinos, &request, &cfg);
        let grid: Vec<&str> = listing.grid.iter().map(|c| c.id.as_str()).collect();
        let table: Vec<&str> = listing.table.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(grid, vec!["1", "2", "3", "5"]);
        assert_eq!(table, vec!["2", "5", "3", "1"]);
        assert_eq!(listing.featured.len(), 5);
    }

    #[test]
    fn query_resolves_lists_and_defaults() {
        let cfg = GuideConfig::default();
        let query = ListingQuery {
            sort: Some("payout-speed".to_string()),
            dir: Some("asc".to_string()),
            game: Some("Poker, live dealer,,Poker".to_string()),
            payment: Some("GCash,E-Wallet".to_string()),
            min_deposit: None,
            q: Some("bet".to_string()),
        };
        let request = query.into_request(&cfg).expect("valid query");
        assert_eq!(
            request.sort,
            SortState::new(SortField::PayoutSpeed, SortDirection::Ascending)
        );
        assert_eq!(
            request.criteria.game_types,
            vec![GameType::Poker, GameType::LiveDealer]
        );
        assert_eq!(request.criteria.payment_methods, vec!["GCash", "E-Wallet"]);
        assert_eq!(request.criteria.min_deposit, cfg.default_min_deposit);
        assert_eq!(request.criteria.search_query, "bet");
    }

    #[test]
    fn query_rejects_unknown_sort_field() {
        let query = ListingQuery {
            sort: Some("popularity".to_string()),
            ..ListingQuery::default()
        };
        let err = query
            .into_request(&GuideConfig::default())
            .expect_err("unknown field");
        assert!(err.contains("popularity"));
    }

    #[test]
    fn to_query_encodes_values() {
        let mut request = ListingRequest::from_config(&GuideConfig::default());
        request.criteria.toggle_game_type(GameType::TableGames);
        request.criteria.toggle_payment_method("Credit Card");
        request.criteria.set_search_query("GG.BET & co");
        assert_eq!(
            request.to_query(),
            "sort=rating&dir=desc&game=Table%20Games&payment=Credit%20Card&min_deposit=10&q=GG.BET%20%26%20co"
        );
    }

    #[test]
    fn to_query_encodes_multibyte_search_as_utf8() {
        let mut request = ListingRequest::from_config(&GuideConfig::default());
        request.criteria.set_search_query("₱ Café");
        assert!(request.to_query().ends_with("&q=%E2%82%B1%20Caf%C3%A9"));
    }
}
