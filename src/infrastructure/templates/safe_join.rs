//! Containment-checked joining of template names onto template directories.
//!
//! The check is purely lexical: `.` and `..` segments are resolved without
//! touching the filesystem, so symlinks inside a template directory are
//! followed when the file is later opened.

use std::path::{Component, Path, PathBuf};

use super::TemplateError;

/// Join `name` onto `base`, failing if the result lies outside `base`.
///
/// The returned path is absolute and normalized. A result equal to `base`
/// itself counts as contained.
pub fn safe_join(base: &Path, name: &str) -> Result<PathBuf, TemplateError> {
    if base.to_str().is_none() {
        return Err(TemplateError::Encoding(base.to_path_buf()));
    }

    let base = normalize(&std::path::absolute(base)?);
    let joined = normalize(&base.join(name));

    // Everything is inside the filesystem root
    if base.parent().is_none() || joined.starts_with(&base) {
        Ok(joined)
    } else {
        Err(TemplateError::PathEscape {
            base,
            name: name.to_string(),
        })
    }
}

/// Lexically resolve `.` and `..` segments. `..` never climbs above the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
