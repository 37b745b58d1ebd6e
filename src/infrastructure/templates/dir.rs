//! Discovery of the per-application template directories

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::{AppResolver, Result, Settings};

/// Ordered, immutable set of template directories to search.
///
/// Built once at startup, then shared by every loader that needs it.
/// Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateDirs {
    dirs: Arc<[PathBuf]>,
}

impl TemplateDirs {
    /// Use an explicit list of directories, in search order
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs: dirs.into() }
    }

    /// Discover the template directory of every installed application.
    ///
    /// Applications are resolved in `installed_apps` order. An application that
    /// cannot be resolved aborts discovery with a configuration error; one that
    /// has no template subfolder is skipped.
    pub fn discover(settings: &Settings, resolver: &dyn AppResolver) -> Result<Self> {
        settings.validate()?;

        let mut dirs = Vec::new();
        for app in &settings.installed_apps {
            let app_dir = resolver.resolve(app)?;
            let template_dir = app_dir.join(&settings.template_dir_name);

            if template_dir.is_dir() {
                debug!("Found template directory for '{}': {}", app, template_dir.display());
                dirs.push(template_dir);
            } else {
                debug!(
                    "App '{}' has no {} directory, skipping",
                    app, settings.template_dir_name
                );
            }
        }

        info!(
            "Discovered {} template directories across {} installed apps",
            dirs.len(),
            settings.installed_apps.len()
        );
        Ok(Self::new(dirs))
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}
