//! Project scaffolding: canonical paths and `guide init`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::info;

use super::config::{GuideConfig, write_config};
use crate::catalog::sample_catalog_json;

/// Canonical file locations for a project root.
#[derive(Debug, Clone)]
pub struct GuidePaths {
    pub root: PathBuf,
    pub catalog_path: PathBuf,
    pub config_path: PathBuf,
}

impl GuidePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            catalog_path: root.join("catalog.json"),
            config_path: root.join("guide.toml"),
            root,
        }
    }
}

/// Options for `init_project`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite an existing catalog and config.
    pub force: bool,
}

/// Write the sample catalog and a default config into `root`.
///
/// Fails if either file already exists unless `options.force` is set.
pub fn init_project(root: &Path, options: &InitOptions) -> Result<GuidePaths> {
    let paths = GuidePaths::new(root);
    if !options.force {
        for existing in [&paths.catalog_path, &paths.config_path] {
            if existing.exists() {
                return Err(anyhow!(
                    "guide init: {} already exists (use --force to overwrite)",
                    existing.display()
                ));
            }
        }
    }

    fs::create_dir_all(&paths.root)
        .with_context(|| format!("create directory {}", paths.root.display()))?;
    fs::write(&paths.catalog_path, sample_catalog_json())
        .with_context(|| format!("write {}", paths.catalog_path.display()))?;
    write_config(&paths.config_path, &GuideConfig::default())?;

    info!(root = %paths.root.display(), "initialized guide project");
    Ok(paths)
}
