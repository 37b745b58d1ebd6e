//! Infrastructure layer - filesystem-backed template loading

pub mod templates;

pub use templates::*;
