//! The generic VCS root: identity, type discriminator and parameter store.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VcsRootError};
use crate::format::DocumentFormat;
use crate::params::ParameterStore;
use crate::types::VcsRootId;

/// A named description of how to reach one version-control repository.
///
/// The `vcs_type` discriminator tells the host system which schema the
/// parameters follow. It is fixed at construction; VCS-specific entities
/// wrap a `VcsRoot` and expose typed fields over [`VcsRoot::params`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcsRoot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<VcsRootId>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "type")]
    vcs_type: String,

    #[serde(default)]
    params: ParameterStore,
}

impl VcsRoot {
    /// Creates an empty root of the given type.
    pub fn new(vcs_type: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            vcs_type: vcs_type.into(),
            params: ParameterStore::new(),
        }
    }

    /// Creates a root seeded from `base`.
    ///
    /// Parameters, name and description are copied; the id is not, since it
    /// identifies `base` alone. Later changes to either root do not affect
    /// the other.
    pub fn from_base(vcs_type: impl Into<String>, base: &VcsRoot) -> Self {
        let vcs_type = vcs_type.into();
        debug!(
            base = base.id.as_ref().map(VcsRootId::as_str).unwrap_or(base.name.as_str()),
            params = base.params.len(),
            "seeding {} root from base",
            vcs_type
        );

        Self {
            id: None,
            name: base.name.clone(),
            description: base.description.clone(),
            vcs_type,
            params: base.params.clone(),
        }
    }

    /// Returns the root id, if assigned.
    pub fn id(&self) -> Option<&VcsRootId> {
        self.id.as_ref()
    }

    /// Assigns the root id.
    pub fn set_id(&mut self, id: impl Into<VcsRootId>) {
        self.id = Some(id.into());
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the description; an empty string clears it.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
    }

    /// Returns the type discriminator.
    pub fn vcs_type(&self) -> &str {
        &self.vcs_type
    }

    /// Returns the parameter store.
    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Returns the parameter store for direct modification.
    pub fn params_mut(&mut self) -> &mut ParameterStore {
        &mut self.params
    }

    /// Parses a root from `input` in the given format.
    pub fn parse(input: &str, format: DocumentFormat) -> Result<Self> {
        format.parser().parse(input)
    }

    /// Renders the root in the given format.
    pub fn render(&self, format: DocumentFormat) -> Result<String> {
        format.serializer().serialize(self)
    }

    /// Loads a root from a file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        debug!(path = %path.display(), ?format, "loading VCS root");
        Self::parse(&content, format).map_err(|e| match e {
            VcsRootError::ParseError { message, cause, .. } => VcsRootError::ParseError {
                source_name: path.display().to_string(),
                message,
                cause,
            },
            other => other,
        })
    }

    /// Writes the root to a file, choosing the format by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let content = self.render(format)?;

        debug!(path = %path.display(), ?format, "saving VCS root");
        std::fs::write(path, content)?;
        Ok(())
    }
}
