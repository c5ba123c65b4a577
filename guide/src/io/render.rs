//! Static page rendering for a listing.

use anyhow::{Context, Result};
use chrono::Datelike;
use minijinja::{Environment, Value, context};
use serde::Serialize;

use crate::catalog::CasinoRecord;
use crate::core::display::{PayoutTier, Star, format_rating, payment_badges, star_row};
use crate::core::payment::PAYMENT_OPTIONS;
use crate::core::types::{GameType, SortDirection, SortField};
use crate::io::config::GuideConfig;
use crate::view::{Listing, ListingRequest};

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Card shown in the featured strip and the grid.
#[derive(Debug, Clone, Serialize)]
struct CardContext {
    id: String,
    name: String,
    logo: String,
    stars: Vec<&'static str>,
    rating: String,
    bonus: String,
    description: String,
    link: String,
}

impl CardContext {
    fn from_record(record: &CasinoRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            logo: record.logo.clone(),
            stars: star_classes(record.rating),
            rating: format_rating(record.rating),
            bonus: record.welcome_bonus.clone(),
            description: record.description.clone(),
            link: record.affiliate_link.clone(),
        }
    }
}

/// Row of the comparison table.
#[derive(Debug, Clone, Serialize)]
struct RowContext {
    rank: usize,
    name: String,
    logo: String,
    stars: Vec<&'static str>,
    rating: String,
    bonus: String,
    slots: u32,
    table_games: u32,
    live_dealer: u32,
    badges: Vec<String>,
    payout: String,
    payout_class: &'static str,
    min_deposit: String,
    link: String,
}

/// Sortable column header with the link that applies the next sort state.
#[derive(Debug, Clone, Serialize)]
struct ColumnContext {
    label: &'static str,
    href: String,
    arrow: &'static str,
}

/// Filter option rendered as a link that toggles it.
#[derive(Debug, Clone, Serialize)]
struct OptionContext {
    label: &'static str,
    checked: bool,
    href: String,
}

/// Template engine wrapper around minijinja.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("attr", |raw: String| Value::from_safe_string(escape_attr(&raw)));
        env.add_template("page.html", PAGE_TEMPLATE)
            .context("parse page template")?;
        Ok(Self { env })
    }

    /// Render the full page for `listing`. `year` appears in the footer.
    pub fn render(&self, listing: &Listing, cfg: &GuideConfig, year: i32) -> Result<String> {
        let request = &listing.request;
        let currency = cfg.currency_symbol.as_str();

        let featured: Vec<CardContext> =
            listing.featured.iter().map(CardContext::from_record).collect();
        let grid: Vec<CardContext> = listing.grid.iter().map(CardContext::from_record).collect();
        let rows: Vec<RowContext> = listing
            .table
            .iter()
            .enumerate()
            .map(|(index, record)| RowContext {
                rank: index + 1,
                name: record.name.clone(),
                logo: record.logo.clone(),
                stars: star_classes(record.rating),
                rating: format_rating(record.rating),
                bonus: record.welcome_bonus.clone(),
                slots: record.game_selection.slots,
                table_games: record.game_selection.table_games,
                live_dealer: record.game_selection.live_dealer,
                badges: payment_badges(&record.payment_methods, cfg.payment_badge_limit),
                payout: record.payout_speed.clone(),
                payout_class: PayoutTier::classify(&record.payout_speed).css_class(),
                min_deposit: format!("{}{}", currency, record.min_deposit),
                link: record.affiliate_link.clone(),
            })
            .collect();
        let columns: Vec<ColumnContext> = SortField::ALL
            .into_iter()
            .map(|field| {
                let next = ListingRequest {
                    sort: request.sort.select(field),
                    criteria: request.criteria.clone(),
                };
                let arrow = match (field == request.sort.field, request.sort.direction) {
                    (false, _) => "",
                    (true, SortDirection::Ascending) => "▲",
                    (true, SortDirection::Descending) => "▼",
                };
                ColumnContext {
                    label: field.label(),
                    href: format!("?{}", next.to_query()),
                    arrow,
                }
            })
            .collect();
        let game_options: Vec<OptionContext> = GameType::ALL
            .into_iter()
            .map(|tag| {
                let mut next = request.clone();
                next.criteria.toggle_game_type(tag);
                OptionContext {
                    label: tag.label(),
                    checked: request.criteria.game_types.contains(&tag),
                    href: format!("?{}", next.to_query()),
                }
            })
            .collect();
        let payment_options: Vec<OptionContext> = PAYMENT_OPTIONS
            .into_iter()
            .map(|label| {
                let mut next = request.clone();
                next.criteria.toggle_payment_method(label);
                OptionContext {
                    label,
                    checked: request.criteria.payment_methods.iter().any(|m| m == label),
                    href: format!("?{}", next.to_query()),
                }
            })
            .collect();
        let mut cleared = request.clone();
        cleared.criteria.clear();
        let game_value: Vec<&str> = request
            .criteria
            .game_types
            .iter()
            .map(|tag| tag.label())
            .collect();

        let template = self.env.get_template("page.html")?;
        let rendered = template
            .render(context! {
                site_title => &cfg.site_title,
                site_name => &cfg.site_name,
                currency => currency,
                year => year,
                featured => featured,
                chips => request.criteria.active_chips(currency),
                clear_href => format!("?{}", cleared.to_query()),
                sort => request.sort.field.as_str(),
                dir => request.sort.direction.as_str(),
                game_value => game_value.join(","),
                payment_value => request.criteria.payment_methods.join(","),
                game_options => game_options,
                payment_options => payment_options,
                min_deposit => request.criteria.min_deposit,
                search => request.criteria.search_query.trim(),
                grid => grid,
                columns => columns,
                rows => rows,
            })
            .context("render page template")?;
        Ok(rendered)
    }
}

/// Calendar year for the footer copyright line.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Attribute escaping that leaves URL slashes intact, so stored links appear
/// in `href` exactly as written apart from entity-encoded `&`.
fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn star_classes(rating: f64) -> Vec<&'static str> {
    star_row(rating)
        .into_iter()
        .map(|star| match star {
            Star::Full => "full",
            Star::Half => "half",
            Star::Empty => "empty",
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::core::sort_state::SortState;
    use crate::test_support::casino;
    use crate::view::{ListingRequest, build_listing};

    fn render(records: &[CasinoRecord], request: &ListingRequest) -> String {
        let cfg = GuideConfig::default();
        let listing = build_listing(records, request, &cfg);
        PageRenderer::new()
            .expect("renderer")
            .render(&listing, &cfg, 2026)
            .expect("render")
    }

    #[test]
    fn page_contains_every_section() {
        let cfg = GuideConfig::default();
        let html = render(&sample_catalog().casinos, &ListingRequest::from_config(&cfg));
        assert!(html.contains("<title>Top 10 Philippines Online Casinos</title>"));
        assert!(html.contains("id=\"featured\""));
        assert!(html.contains("id=\"filters\""));
        assert!(html.contains("id=\"grid\""));
        assert!(html.contains("id=\"compare\""));
        assert!(html.contains("© 2026 Philippines Casino Guide"));
    }

    #[test]
    fn affiliate_links_are_emitted_unmodified() {
        let cfg = GuideConfig::default();
        let html = render(&sample_catalog().casinos, &ListingRequest::from_config(&cfg));
        assert!(html.contains(
            "href=\"https://www.bk8.com\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.contains("href=\"https://www.bc.game\""));
    }

    #[test]
    fn names_are_html_escaped() {
        let mut record = casino("x");
        record.name = "<b>Bold</b> & Co".to_string();
        let html = render(&[record], &ListingRequest::from_config(&GuideConfig::default()));
        assert!(html.contains("&lt;b&gt;Bold&lt;&#x2f;b&gt; &amp; Co"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn table_rows_follow_sort_state() {
        let cfg = GuideConfig::default();
        let mut request = ListingRequest::from_config(&cfg);
        request.sort = SortState::new(SortField::MinDeposit, SortDirection::Ascending);
        let html = render(&sample_catalog().casinos, &request);
        let compare = html.split("id=\"compare\"").nth(1).expect("table section");
        let bc_game = compare.find("BC.Game").expect("BC.Game row");
        let bk8 = compare.find("BK8").expect("BK8 row");
        assert!(bc_game < bk8);
        assert!(compare.contains("+2 more"));
        assert!(compare.contains("₱100"));
    }

    #[test]
    fn header_links_carry_next_sort_state() {
        let cfg = GuideConfig::default();
        let html = render(&sample_catalog().casinos, &ListingRequest::from_config(&cfg));
        assert!(html.contains("?sort=rating&amp;dir=asc"));
        assert!(html.contains("?sort=minDeposit&amp;dir=desc"));
    }

    #[test]
    fn filter_options_link_to_toggled_state() {
        let cfg = GuideConfig::default();
        let mut request = ListingRequest::from_config(&cfg);
        request.criteria.toggle_payment_method("GCash");
        let html = render(&sample_catalog().casinos, &request);
        assert!(html.contains("href=\"?sort=rating&amp;dir=desc&amp;game=Poker&amp;payment=GCash&amp;min_deposit=10\""));
        assert!(html.contains("href=\"?sort=rating&amp;dir=desc&amp;min_deposit=10\""));
        assert!(html.contains("GCash</span>"));
    }

    #[test]
    fn attribute_escaping_keeps_slashes() {
        assert_eq!(
            escape_attr("https://x.test/?a=1&b=\"2\""),
            "https://x.test/?a=1&amp;b=&quot;2&quot;"
        );
    }

    #[test]
    fn empty_catalog_renders_empty_state() {
        let html = render(&[], &ListingRequest::from_config(&GuideConfig::default()));
        assert!(html.contains("No casinos match"));
    }
}
