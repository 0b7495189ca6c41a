//! VCS root core - typed parameters over a string store
//!
//! This crate provides the building blocks shared by every VCS-specific
//! root: the ordered [`ParameterStore`], the [`Param`] descriptor that
//! reads and writes typed values through it, the generic [`VcsRoot`]
//! carrying identity and the type discriminator, and the document formats
//! used to load and render roots.

pub mod error;
pub mod format;
pub mod params;
pub mod root;
pub mod types;

pub use error::{Result, VcsRootError};
pub use format::DocumentFormat;
pub use params::{Param, ParamEnum, ParamValue, ParameterStore, SECURE_PREFIX, is_secure_key};
pub use root::VcsRoot;
pub use types::VcsRootId;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
