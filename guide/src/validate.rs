//! `guide validate`: check config and catalog together.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::io::init::GuidePaths;
use crate::view::load_project;

/// Summary printed by `guide validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub casinos: usize,
    pub featured: usize,
}

/// Validate the project at `root`.
///
/// Unlike listing commands, a missing catalog is an error here.
pub fn validate_project(root: &Path) -> Result<ValidationReport> {
    let paths = GuidePaths::new(root);
    if !paths.catalog_path.exists() {
        bail!("catalog not found at {}", paths.catalog_path.display());
    }
    let project = load_project(root).context("validate project")?;
    Ok(ValidationReport {
        casinos: project.catalog.casinos.len(),
        featured: project
            .catalog
            .casinos
            .iter()
            .filter(|record| record.featured)
            .count(),
    })
}
