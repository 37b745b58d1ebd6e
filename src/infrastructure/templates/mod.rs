//! Filesystem template resolution: directory discovery, safe joining, and the
//! application-directories loader

pub mod dir;
pub mod errors;
pub mod filesystem_loader;
pub mod safe_join;
pub mod traits;
pub mod types;

pub use dir::*;
pub use errors::*;
pub use filesystem_loader::*;
pub use safe_join::safe_join;
pub use traits::*;
pub use types::*;
