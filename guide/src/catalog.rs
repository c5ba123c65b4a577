use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::GameType;

const SAMPLE_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/sample_catalog.json"
));

/// Game counts advertised by a casino.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSelection {
    pub slots: u32,
    pub table_games: u32,
    pub live_dealer: u32,
}

impl GameSelection {
    pub fn total(&self) -> u64 {
        u64::from(self.slots) + u64::from(self.table_games) + u64::from(self.live_dealer)
    }
}

/// A single listed casino. Records are never mutated once loaded.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CasinoRecord {
    #[serde(deserialize_with = "string_or_integer")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logo: String,
    pub rating: f64,
    pub welcome_bonus: String,
    pub game_selection: GameSelection,
    pub payment_methods: Vec<String>,
    pub payout_speed: String,
    pub min_deposit: u32,
    pub affiliate_link: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Tags that cannot be derived from `game_selection` counts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub game_types: Vec<GameType>,
}

impl CasinoRecord {
    /// Derived tags (non-zero counts) followed by explicit tags, without duplicates.
    pub fn effective_game_types(&self) -> Vec<GameType> {
        let selection = &self.game_selection;
        let derived = [
            (selection.slots, GameType::Slots),
            (selection.table_games, GameType::TableGames),
            (selection.live_dealer, GameType::LiveDealer),
        ];
        let mut tags: Vec<GameType> = derived
            .into_iter()
            .filter(|(count, _)| *count > 0)
            .map(|(_, tag)| tag)
            .collect();
        for tag in &self.game_types {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
        tags
    }
}

/// On-disk catalog document.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub casinos: Vec<CasinoRecord>,
}

/// The bundled ten-casino sample, authored in descending rating order.
pub fn sample_catalog() -> Catalog {
    serde_json::from_str(SAMPLE_CATALOG).expect("bundled sample catalog is valid JSON")
}

pub fn sample_catalog_json() -> &'static str {
    SAMPLE_CATALOG
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
