//! Test-only helpers for constructing casino records and project directories.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use crate::catalog::{Catalog, CasinoRecord, GameSelection};
use crate::io::catalog_store::write_catalog;
use crate::io::config::{GuideConfig, write_config};
use crate::io::init::GuidePaths;

/// Create a deterministic, featured record with mid-range values.
pub fn casino(id: &str) -> CasinoRecord {
    CasinoRecord {
        id: id.to_string(),
        name: format!("{} casino", id),
        logo: String::new(),
        rating: 3.0,
        welcome_bonus: "₱1,000 Welcome Bonus".to_string(),
        game_selection: GameSelection {
            slots: 100,
            table_games: 10,
            live_dealer: 5,
        },
        payment_methods: vec!["Visa".to_string(), "GCash".to_string()],
        payout_speed: "1 day".to_string(),
        min_deposit: 100,
        affiliate_link: format!("https://{}.example.com", id),
        featured: true,
        description: String::new(),
        game_types: Vec::new(),
    }
}

/// Create a record with an explicit rating.
pub fn rated(id: &str, rating: f64) -> CasinoRecord {
    let mut record = casino(id);
    record.rating = rating;
    record
}

/// Create a record with an explicit minimum deposit.
pub fn with_deposit(id: &str, min_deposit: u32) -> CasinoRecord {
    let mut record = casino(id);
    record.min_deposit = min_deposit;
    record
}

/// Temporary project directory holding `catalog.json` and `guide.toml`.
pub struct TestProject {
    dir: TempDir,
    pub paths: GuidePaths,
}

impl TestProject {
    /// Empty project: neither file exists yet.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let paths = GuidePaths::new(dir.path());
        Ok(Self { dir, paths })
    }

    /// Project seeded with `records` and the default config.
    pub fn with_records(records: Vec<CasinoRecord>) -> Result<Self> {
        let project = Self::new()?;
        project.write_records(records)?;
        project.write_config(&GuideConfig::default())?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_records(&self, records: Vec<CasinoRecord>) -> Result<()> {
        write_catalog(&self.paths.catalog_path, &Catalog { casinos: records })
    }

    pub fn write_config(&self, cfg: &GuideConfig) -> Result<()> {
        write_config(&self.paths.config_path, cfg)
    }
}
