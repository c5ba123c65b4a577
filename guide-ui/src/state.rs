//! Shared application state for the UI server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use guide::io::init::GuidePaths;
use guide::io::render::PageRenderer;
use guide::view::{Project, load_project};

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Root directory of the project (contains catalog.json and guide.toml).
    pub project_dir: PathBuf,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(project_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            project_dir,
            renderer: Arc::new(PageRenderer::new()?),
        })
    }

    pub fn paths(&self) -> GuidePaths {
        GuidePaths::new(&self.project_dir)
    }

    /// Read config and catalog from disk. Called per request so edits show up
    /// without a restart.
    pub fn load(&self) -> Result<Project> {
        load_project(&self.project_dir)
    }
}
