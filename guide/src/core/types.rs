//! Shared deterministic types for ranking and filtering.
//!
//! These types are the contract between the CLI, the page renderer and the
//! HTTP surface. Each parses from the spellings a user is likely to type
//! (`welcome-bonus`, `welcomeBonus`, `Table Games`, `table_games`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ranking dimension for the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Rating,
    WelcomeBonus,
    GameSelection,
    PaymentMethods,
    PayoutSpeed,
    MinDeposit,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Rating,
        SortField::WelcomeBonus,
        SortField::GameSelection,
        SortField::PaymentMethods,
        SortField::PayoutSpeed,
        SortField::MinDeposit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Rating => "rating",
            SortField::WelcomeBonus => "welcomeBonus",
            SortField::GameSelection => "gameSelection",
            SortField::PaymentMethods => "paymentMethods",
            SortField::PayoutSpeed => "payoutSpeed",
            SortField::MinDeposit => "minDeposit",
        }
    }

    /// Column heading used by the comparison table.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Rating => "Rating",
            SortField::WelcomeBonus => "Welcome Bonus",
            SortField::GameSelection => "Game Selection",
            SortField::PaymentMethods => "Payment Methods",
            SortField::PayoutSpeed => "Payout Speed",
            SortField::MinDeposit => "Min Deposit",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        SortField::ALL
            .into_iter()
            .find(|field| normalize_key(field.as_str()) == key)
            .ok_or_else(|| {
                format!(
                    "unknown sort field '{}' (expected one of: {})",
                    s,
                    SortField::ALL.map(SortField::as_str).join(", ")
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!("unknown sort direction '{}' (expected asc or desc)", s)),
        }
    }
}

/// Categorical game tag used by the game-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameType {
    #[serde(rename = "Slots")]
    Slots,
    #[serde(rename = "Table Games")]
    TableGames,
    #[serde(rename = "Live Dealer")]
    LiveDealer,
    #[serde(rename = "Poker")]
    Poker,
    #[serde(rename = "Sports Betting")]
    SportsBetting,
}

impl GameType {
    pub const ALL: [GameType; 5] = [
        GameType::Slots,
        GameType::TableGames,
        GameType::LiveDealer,
        GameType::Poker,
        GameType::SportsBetting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GameType::Slots => "Slots",
            GameType::TableGames => "Table Games",
            GameType::LiveDealer => "Live Dealer",
            GameType::Poker => "Poker",
            GameType::SportsBetting => "Sports Betting",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        GameType::ALL
            .into_iter()
            .find(|tag| normalize_key(tag.label()) == key)
            .ok_or_else(|| {
                format!(
                    "unknown game type '{}' (expected one of: {})",
                    s,
                    GameType::ALL.map(GameType::label).join(", ")
                )
            })
    }
}

/// Lowercase and drop separators so `Table Games`, `table-games` and
/// `tableGames` compare equal.
fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
