pub mod directory;
pub mod download;
pub mod error;
pub mod install;
pub mod manifest;
pub mod reconcile;
pub mod stylesheet;

pub use error::{FontpackError, Result};
