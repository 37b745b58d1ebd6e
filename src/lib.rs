//! Application-directories template loader.
//!
//! Every installed application may ship client-side templates in a subfolder
//! of its package directory (`jstemplates` by default). This crate discovers
//! those folders once, from [`Settings`], and resolves template names against
//! them in installation order:
//!
//! ```no_run
//! use jstemplates::{AppDirectoriesLoader, Settings, TemplateLoader};
//!
//! let settings = Settings::from_yaml_str(
//!     "installed_apps: [app_a, app_b]\napp_paths: [/srv/project]\n",
//! )?;
//! let loader = AppDirectoriesLoader::from_settings(&settings)?;
//! let (source, path) = loader.load_template_source("greeting.mustache", None)?;
//! println!("{} -> {}", path.display(), source);
//! # Ok::<(), jstemplates::Error>(())
//! ```
#![deny(unsafe_code)]

pub mod core;
pub mod infrastructure;

pub use crate::core::{
    AppResolver, EnvSettingsReader, Error, FileCharset, PathAppResolver, Result, Settings,
    SettingsReader,
};
pub use crate::infrastructure::templates::{
    AppDirectoriesLoader, Template, TemplateDirs, TemplateError, TemplateLoader, TemplateSources,
    safe_join,
};
