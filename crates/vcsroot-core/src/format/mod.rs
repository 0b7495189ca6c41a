//! Document formats for loading and rendering VCS roots.

use std::path::Path;

use crate::error::{Result, VcsRootError};
use crate::root::VcsRoot;

pub mod json;
pub mod properties;
pub mod yaml;

pub use json::JsonFormat;
pub use properties::PropertiesFormat;
pub use yaml::YamlFormat;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Properties,
}

impl DocumentFormat {
    /// Returns the file extensions associated with this format.
    pub fn extensions(&self) -> &[&str] {
        match self {
            DocumentFormat::Json => &["json"],
            DocumentFormat::Yaml => &["yaml", "yml"],
            DocumentFormat::Properties => &["properties"],
        }
    }

    /// Guesses the format from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "properties" => Some(DocumentFormat::Properties),
            _ => None,
        }
    }

    /// Determines the format of a file from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_extension(ext).ok_or_else(|| {
            VcsRootError::UnsupportedFormat(if ext.is_empty() {
                path.display().to_string()
            } else {
                ext.to_string()
            })
        })
    }

    /// Returns the parser for this format.
    pub fn parser(&self) -> &'static dyn FormatParser {
        match self {
            DocumentFormat::Json => &JsonFormat,
            DocumentFormat::Yaml => &YamlFormat,
            DocumentFormat::Properties => &PropertiesFormat,
        }
    }

    /// Returns the serializer for this format.
    pub fn serializer(&self) -> &'static dyn FormatSerializer {
        match self {
            DocumentFormat::Json => &JsonFormat,
            DocumentFormat::Yaml => &YamlFormat,
            DocumentFormat::Properties => &PropertiesFormat,
        }
    }
}

/// A trait for parsing a VCS root from a string.
pub trait FormatParser: Send + Sync {
    /// Parses the input string into a VcsRoot.
    fn parse(&self, input: &str) -> Result<VcsRoot>;
}

/// A trait for serializing a VCS root to a string.
pub trait FormatSerializer: Send + Sync {
    /// Serializes the VcsRoot into a string.
    fn serialize(&self, root: &VcsRoot) -> Result<String>;
}
