//! Scalar projections used to order casino records.
//!
//! Every projection is total: malformed free text falls back to a documented
//! value instead of failing. The only non-finite result is the `NaN` produced
//! for a welcome bonus with no amount; the ranking comparator orders it last.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::CasinoRecord;
use crate::core::types::SortField;

/// Hours assumed when a payout description matches no known keyword.
pub const PAYOUT_FALLBACK_HOURS: f64 = 48.0;

/// A digit run that may carry `,` thousands separators between digits.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9](?:,?[0-9])*").expect("amount regex is valid"));

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit regex is valid"));

/// Project `record` onto the numeric key for `field`.
pub fn project(record: &CasinoRecord, field: SortField) -> f64 {
    match field {
        SortField::Rating => record.rating,
        SortField::WelcomeBonus => bonus_amount(&record.welcome_bonus)
            .map(|amount| amount as f64)
            .unwrap_or(f64::NAN),
        SortField::GameSelection => record.game_selection.total() as f64,
        SortField::PaymentMethods => record.payment_methods.len() as f64,
        SortField::PayoutSpeed => payout_hours(&record.payout_speed),
        SortField::MinDeposit => f64::from(record.min_deposit),
    }
}

/// First amount in an offer string, separators stripped.
///
/// `"₱100,000 + 200 Free Spins"` yields `100000`; `"180% Deposit Bonus"`
/// yields `180`. Returns `None` when there are no digits or the amount does
/// not fit in a `u64`.
pub fn bonus_amount(offer: &str) -> Option<u64> {
    let token = AMOUNT_RE.find(offer)?;
    let digits: String = token.as_str().chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Normalize a payout description to hours. Keywords match case-insensitively
/// and are checked in order: `instant`, `hour`, `day`.
pub fn payout_hours(speed: &str) -> f64 {
    let lowered = speed.to_lowercase();
    if lowered.contains("instant") {
        return 0.0;
    }
    if lowered.contains("hour") {
        return leading_number(&lowered).unwrap_or(1.0);
    }
    if lowered.contains("day") {
        return leading_number(&lowered).map_or(24.0, |days| days * 24.0);
    }
    PAYOUT_FALLBACK_HOURS
}

fn leading_number(text: &str) -> Option<f64> {
    let run = DIGITS_RE.find(text)?;
    run.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn payout_hours_follows_keyword_order() {
        assert_eq!(payout_hours("Instant"), 0.0);
        assert_eq!(payout_hours("1-2 hours"), 1.0);
        assert_eq!(payout_hours("Same day"), 24.0);
        assert_eq!(payout_hours("3-4 hours"), 3.0);
        assert_eq!(payout_hours("1 day"), 24.0);
        assert_eq!(payout_hours("1-2 days"), 24.0);
        assert_eq!(payout_hours("12 hours"), 12.0);
        assert_eq!(payout_hours("within the week"), 48.0);
        assert_eq!(payout_hours(""), 48.0);
    }

    #[test]
    fn payout_hours_without_digits_uses_unit_defaults() {
        assert_eq!(payout_hours("a few hours"), 1.0);
        assert_eq!(payout_hours("next business day"), 24.0);
    }

    #[test]
    fn instant_wins_over_later_keywords() {
        assert_eq!(payout_hours("instant, max 2 days"), 0.0);
    }

    #[test]
    fn bonus_amount_joins_thousands_groups() {
        assert_eq!(bonus_amount("₱100,000 + 200 Free Spins"), Some(100_000));
        assert_eq!(bonus_amount("180% Deposit Bonus"), Some(180));
        assert_eq!(bonus_amount("Sports Bonus up to ₱75,000"), Some(75_000));
        assert_eq!(bonus_amount("₱1,000, then 50 spins"), Some(1_000));
    }

    #[test]
    fn bonus_amount_without_digits_is_none() {
        assert_eq!(bonus_amount("Free Spins Package"), None);
        assert_eq!(bonus_amount(""), None);
        assert!(bonus_amount("99999999999999999999999 coins").is_none());
    }

    #[test]
    fn project_covers_every_field() {
        let catalog = sample_catalog();
        let bk8 = &catalog.casinos[0];
        assert_eq!(project(bk8, SortField::Rating), 4.9);
        assert_eq!(project(bk8, SortField::WelcomeBonus), 100_000.0);
        assert_eq!(project(bk8, SortField::GameSelection), 1750.0);
        assert_eq!(project(bk8, SortField::PaymentMethods), 5.0);
        assert_eq!(project(bk8, SortField::PayoutSpeed), 0.0);
        assert_eq!(project(bk8, SortField::MinDeposit), 500.0);
    }

    #[test]
    fn project_bonus_without_amount_is_nan() {
        let mut record = sample_catalog().casinos[0].clone();
        record.welcome_bonus = "Mystery Bonus".to_string();
        assert!(project(&record, SortField::WelcomeBonus).is_nan());
    }
}
