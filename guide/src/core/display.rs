//! Presentation helpers shared by the page renderer and the CLI table.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static ONE_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^0-9])1 hour").expect("one-hour regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Five star cells for `rating`: whole points are full, any fractional part
/// adds one half star.
pub fn star_row(rating: f64) -> [Star; 5] {
    let clamped = rating.clamp(0.0, 5.0);
    let full = clamped.floor() as usize;
    let has_half = clamped.fract() != 0.0;
    std::array::from_fn(|i| {
        if i < full {
            Star::Full
        } else if i == full && has_half {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Payout speed bucket used to colour the payout column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutTier {
    Fast,
    Moderate,
    Slow,
}

impl PayoutTier {
    pub fn classify(speed: &str) -> Self {
        let lowered = speed.to_lowercase();
        if lowered.contains("instant") || ONE_HOUR_RE.is_match(&lowered) {
            PayoutTier::Fast
        } else if lowered.contains("hour") || lowered.contains("same day") {
            PayoutTier::Moderate
        } else {
            PayoutTier::Slow
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PayoutTier::Fast => "payout-fast",
            PayoutTier::Moderate => "payout-moderate",
            PayoutTier::Slow => "payout-slow",
        }
    }
}

/// The first `limit` payment methods, plus a `+N more` badge for the rest.
pub fn payment_badges(methods: &[String], limit: usize) -> Vec<String> {
    let mut badges: Vec<String> = methods.iter().take(limit).cloned().collect();
    if methods.len() > limit {
        badges.push(format!("+{} more", methods.len() - limit));
    }
    badges
}
