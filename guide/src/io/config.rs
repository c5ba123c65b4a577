//! Guide configuration stored in `guide.toml` at the project root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::filter::DEFAULT_MIN_DEPOSIT;
use crate::core::sort_state::SortState;

/// Guide configuration (TOML).
///
/// Edited by hand. Missing fields fall back to the defaults below, so an
/// empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuideConfig {
    /// Heading shown in the page header and `<title>`.
    pub site_title: String,

    /// Brand name used in the footer.
    pub site_name: String,

    /// Symbol prefixed to deposit amounts.
    pub currency_symbol: String,

    /// Payment badges shown per table row before collapsing to `+N more`.
    pub payment_badge_limit: usize,

    /// Cap on the featured strip. Unset shows every featured casino.
    pub featured_limit: Option<usize>,

    /// Minimum deposit applied when no filter flag overrides it.
    pub default_min_deposit: u32,

    /// Initial table ordering.
    pub sort: SortState,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            site_title: "Top 10 Philippines Online Casinos".to_string(),
            site_name: "Philippines Casino Guide".to_string(),
            currency_symbol: "₱".to_string(),
            payment_badge_limit: 3,
            featured_limit: None,
            default_min_deposit: DEFAULT_MIN_DEPOSIT,
            sort: SortState::default(),
        }
    }
}

impl GuideConfig {
    pub fn validate(&self) -> Result<()> {
        if self.site_title.trim().is_empty() {
            return Err(anyhow!("site_title must be non-empty"));
        }
        if self.site_name.trim().is_empty() {
            return Err(anyhow!("site_name must be non-empty"));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow!("currency_symbol must be non-empty"));
        }
        if self.payment_badge_limit == 0 {
            return Err(anyhow!("payment_badge_limit must be > 0"));
        }
        if self.featured_limit == Some(0) {
            return Err(anyhow!("featured_limit must be > 0 when set"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GuideConfig::default()`.
pub fn load_config(path: &Path) -> Result<GuideConfig> {
    if !path.exists() {
        let cfg = GuideConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GuideConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &GuideConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SortDirection, SortField};

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, GuideConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guide.toml");
        let cfg = GuideConfig {
            featured_limit: Some(5),
            sort: SortState::new(SortField::PayoutSpeed, SortDirection::Ascending),
            ..GuideConfig::default()
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guide.toml");
        fs::write(
            &path,
            "currency_symbol = \"$\"\n\n[sort]\nfield = \"minDeposit\"\ndirection = \"asc\"\n",
        )
        .expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.currency_symbol, "$");
        assert_eq!(cfg.payment_badge_limit, 3);
        assert_eq!(
            cfg.sort,
            SortState::new(SortField::MinDeposit, SortDirection::Ascending)
        );
    }

    #[test]
    fn rejects_zero_badge_limit() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("guide.toml");
        fs::write(&path, "payment_badge_limit = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{:#}", err).contains("payment_badge_limit"));
    }
}
