//! Loader settings: installed applications, where to find them, and how to read
//! their template files.
//!
//! Settings are read from a YAML or TOML file and can be adjusted through
//! environment variables. A typical YAML file looks like:
//!
//! ```yaml
//! installed_apps:
//!   - blog
//!   - shop.checkout
//! app_paths:
//!   - /srv/project
//! file_charset: utf-8
//! template_dir_name: jstemplates
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::charset::FileCharset;
use super::error::{Error, Result};

/// Subfolder searched inside every installed application
pub const DEFAULT_TEMPLATE_DIR_NAME: &str = "jstemplates";

/// Environment variable overriding [`Settings::template_dir_name`]
pub const TEMPLATE_DIR_NAME_ENV: &str = "JSTEMPLATES_DIR_NAME";

/// Environment variable overriding [`Settings::file_charset`]
pub const FILE_CHARSET_ENV: &str = "JSTEMPLATES_FILE_CHARSET";

/// Trait for reading setting overrides, allowing dependency injection for testing
pub trait SettingsReader {
    fn template_dir_name(&self) -> Option<String>;
    fn file_charset(&self) -> Option<String>;
}

/// Production implementation that reads from environment variables
pub struct EnvSettingsReader;

impl SettingsReader for EnvSettingsReader {
    fn template_dir_name(&self) -> Option<String> {
        std::env::var(TEMPLATE_DIR_NAME_ENV).ok()
    }

    fn file_charset(&self) -> Option<String> {
        std::env::var(FILE_CHARSET_ENV).ok()
    }
}

/// Mock implementation for testing with controlled values
#[cfg(test)]
pub struct MockSettingsReader {
    pub template_dir_name: Option<String>,
    pub file_charset: Option<String>,
}

#[cfg(test)]
impl SettingsReader for MockSettingsReader {
    fn template_dir_name(&self) -> Option<String> {
        self.template_dir_name.clone()
    }

    fn file_charset(&self) -> Option<String> {
        self.file_charset.clone()
    }
}

/// Process-wide configuration consumed by the loader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Installed application names, in search order. Dotted names address
    /// nested packages (`shop.checkout` lives at `<root>/shop/checkout`).
    pub installed_apps: Vec<String>,
    /// Roots in which installed applications are located, in search order
    pub app_paths: Vec<PathBuf>,
    /// Character set used to decode template files
    pub file_charset: FileCharset,
    /// Subfolder searched inside every installed application
    pub template_dir_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            installed_apps: Vec::new(),
            app_paths: Vec::new(),
            file_charset: FileCharset::default(),
            template_dir_name: DEFAULT_TEMPLATE_DIR_NAME.to_string(),
        }
    }
}

impl Settings {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read settings from a file, picking the format from its extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => Err(Error::config(format!(
                "Unsupported settings file format: {}",
                path.display()
            ))),
        }
    }

    /// Location of the per-user settings file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jstemplates").join("settings.yml"))
    }

    /// Load the per-user settings file (or defaults when absent), then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let settings = match Self::default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading settings from {}", path.display());
                Self::from_file(&path)?
            }
            _ => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        };
        settings.with_overrides(&EnvSettingsReader)
    }

    /// Apply overrides from a settings reader
    pub fn with_overrides(mut self, reader: &dyn SettingsReader) -> Result<Self> {
        if let Some(name) = reader.template_dir_name() {
            debug!("Overriding template directory name: {}", name);
            self.template_dir_name = name;
        }
        if let Some(label) = reader.file_charset() {
            debug!("Overriding file charset: {}", label);
            self.file_charset = label.parse().map_err(Error::Config)?;
        }
        Ok(self)
    }

    /// Check the settings for mistakes that would make discovery meaningless
    pub fn validate(&self) -> Result<()> {
        validate_template_dir_name(&self.template_dir_name)?;

        let mut seen = HashSet::new();
        for app in &self.installed_apps {
            validate_app_name(app)?;
            if !seen.insert(app.as_str()) {
                return Err(Error::config(format!("Duplicate installed app: {app}")));
            }
        }
        Ok(())
    }
}

fn validate_template_dir_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(Error::config(format!(
            "Template directory name must be a single path component, got {name:?}"
        ))),
    }
}

fn validate_app_name(app: &str) -> Result<()> {
    let valid = !app.is_empty()
        && app
            .split('.')
            .all(|segment| !segment.is_empty() && !segment.contains(['/', '\\']));
    if valid {
        Ok(())
    } else {
        Err(Error::config(format!("Invalid installed app name: {app:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.installed_apps.is_empty());
        assert!(settings.app_paths.is_empty());
        assert_eq!(settings.file_charset, FileCharset::Utf8);
        assert_eq!(settings.template_dir_name, "jstemplates");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_from_yaml() {
        let settings = Settings::from_yaml_str(
            r#"
installed_apps:
  - blog
  - shop.checkout
app_paths:
  - /srv/project
file_charset: latin-1
"#,
        )
        .unwrap();

        assert_eq!(settings.installed_apps, vec!["blog", "shop.checkout"]);
        assert_eq!(settings.app_paths, vec![PathBuf::from("/srv/project")]);
        assert_eq!(settings.file_charset, FileCharset::Latin1);
        assert_eq!(settings.template_dir_name, "jstemplates");
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = Settings::from_toml_str(
            r#"
installed_apps = ["app_a", "app_b"]
template_dir_name = "clienttemplates"
"#,
        )
        .unwrap();

        assert_eq!(settings.installed_apps, vec!["app_a", "app_b"]);
        assert_eq!(settings.template_dir_name, "clienttemplates");
    }

    #[test]
    fn test_settings_rejects_unknown_charset() {
        let result = Settings::from_yaml_str("file_charset: ebcdic\n");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_settings_from_file_picks_format() {
        let temp_dir = TempDir::new().unwrap();
        let yaml_path = temp_dir.path().join("settings.yaml");
        std::fs::write(&yaml_path, "installed_apps: [blog]\n").unwrap();
        let toml_path = temp_dir.path().join("settings.toml");
        std::fs::write(&toml_path, "installed_apps = [\"shop\"]\n").unwrap();
        let ini_path = temp_dir.path().join("settings.ini");
        std::fs::write(&ini_path, "installed_apps=shop\n").unwrap();

        assert_eq!(
            Settings::from_file(&yaml_path).unwrap().installed_apps,
            vec!["blog"]
        );
        assert_eq!(
            Settings::from_file(&toml_path).unwrap().installed_apps,
            vec!["shop"]
        );
        assert!(matches!(
            Settings::from_file(&ini_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_default_config_path_location() {
        if let Some(path) = Settings::default_config_path() {
            assert!(path.ends_with("jstemplates/settings.yml"));
        }
    }

    #[test]
    fn test_overrides_applied() {
        let reader = MockSettingsReader {
            template_dir_name: Some("hbs".to_string()),
            file_charset: Some("ascii".to_string()),
        };
        let settings = Settings::default().with_overrides(&reader).unwrap();
        assert_eq!(settings.template_dir_name, "hbs");
        assert_eq!(settings.file_charset, FileCharset::Ascii);
    }

    #[test]
    fn test_override_with_bad_charset_is_config_error() {
        let reader = MockSettingsReader {
            template_dir_name: None,
            file_charset: Some("klingon".to_string()),
        };
        let result = Settings::default().with_overrides(&reader);
        assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("klingon")));
    }

    #[test]
    fn test_validate_template_dir_name() {
        for bad in ["", ".", "..", "a/b", "../up", "/abs"] {
            let settings = Settings {
                template_dir_name: bad.to_string(),
                ..Default::default()
            };
            assert!(settings.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_app_names() {
        for bad in ["", "shop..checkout", ".shop", "shop/checkout"] {
            let settings = Settings {
                installed_apps: vec![bad.to_string()],
                ..Default::default()
            };
            assert!(settings.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_apps() {
        let settings = Settings {
            installed_apps: vec!["blog".to_string(), "blog".to_string()],
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate installed app: blog"));
    }
}
