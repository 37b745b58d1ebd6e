//! Resolution of installed application names to their package directories.

use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::error::{Error, Result};

/// Maps an installed application name to the directory holding its package
pub trait AppResolver {
    fn resolve(&self, app: &str) -> Result<PathBuf>;
}

/// Resolves applications by looking them up under a list of root directories.
///
/// A dotted name such as `shop.checkout` resolves to the first
/// `<root>/shop/checkout` that is a directory, checking roots in order.
#[derive(Debug, Clone, Default)]
pub struct PathAppResolver {
    roots: Vec<PathBuf>,
}

impl PathAppResolver {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl AppResolver for PathAppResolver {
    fn resolve(&self, app: &str) -> Result<PathBuf> {
        let relative: PathBuf = app.split('.').collect();

        for root in &self.roots {
            let candidate = root.join(&relative);
            if candidate.is_dir() {
                debug!("Resolved app '{}' to {}", app, candidate.display());
                return absolute(&candidate);
            }
        }

        error!("Could not locate installed app '{}'", app);
        Err(Error::config(format!(
            "Cannot locate installed app '{}' in any of {} app path(s)",
            app,
            self.roots.len()
        )))
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        Error::config(format!(
            "Failed to make app path absolute {}: {e}",
            path.display()
        ))
    })
}
