//! Core configuration for the jstemplates loader.
//!
//! Settings, character sets, application resolution and the crate-level
//! error type. Everything here runs once while a loader is being built.

pub mod apps;
pub mod charset;
pub mod error;
pub mod settings;

pub use apps::{AppResolver, PathAppResolver};
pub use charset::FileCharset;
pub use error::{Error, Result};
pub use settings::{EnvSettingsReader, Settings, SettingsReader};
