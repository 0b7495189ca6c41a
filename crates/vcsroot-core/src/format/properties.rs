use encoding_rs::UTF_8;
use java_properties::{PropertiesIter, PropertiesWriter};
use tracing::warn;

use crate::error::{Result, VcsRootError};
use crate::format::{FormatParser, FormatSerializer};
use crate::params::ParameterStore;
use crate::root::VcsRoot;

/// Prefix under which every root parameter is written.
pub const PARAM_PREFIX: &str = "param.";

const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const DESCRIPTION_KEY: &str = "description";
const TYPE_KEY: &str = "type";

/// Java properties layout: identity fields as plain keys, parameters under
/// [`PARAM_PREFIX`].
///
/// Documents are UTF-8 on both sides, not the ISO-8859-1 default of the
/// properties format.
pub struct PropertiesFormat;

impl FormatParser for PropertiesFormat {
    fn parse(&self, input: &str) -> Result<VcsRoot> {
        let mut entries = Vec::new();
        PropertiesIter::new_with_encoding(input.as_bytes(), UTF_8)
            .read_into(|key, value| entries.push((key, value)))
            .map_err(|e| VcsRootError::parse_error("properties", e.to_string()))?;

        let mut id = None;
        let mut name = None;
        let mut description = None;
        let mut vcs_type = None;
        let mut params = ParameterStore::new();

        for (key, value) in entries {
            if let Some(param) = key.strip_prefix(PARAM_PREFIX) {
                params.insert(param, value);
                continue;
            }
            match key.as_str() {
                ID_KEY => id = Some(value),
                NAME_KEY => name = Some(value),
                DESCRIPTION_KEY => description = Some(value),
                TYPE_KEY => vcs_type = Some(value),
                other => warn!(key = other, "ignoring unknown property"),
            }
        }

        let vcs_type = vcs_type.ok_or_else(|| {
            VcsRootError::parse_error("properties", format!("missing '{}' property", TYPE_KEY))
        })?;

        let mut root = VcsRoot::new(vcs_type);
        if let Some(id) = id {
            root.set_id(id);
        }
        if let Some(name) = name {
            root.set_name(name);
        }
        if let Some(description) = description {
            root.set_description(description);
        }
        *root.params_mut() = params;

        Ok(root)
    }
}

impl FormatSerializer for PropertiesFormat {
    fn serialize(&self, root: &VcsRoot) -> Result<String> {
        let mut buf = Vec::new();
        let to_err = |e: java_properties::PropertiesError| {
            VcsRootError::serialize_error("properties", e.to_string())
        };

        {
            let mut writer = PropertiesWriter::new_with_encoding(&mut buf, UTF_8);
            if let Some(id) = root.id() {
                writer.write(ID_KEY, id.as_str()).map_err(to_err)?;
            }
            if !root.name().is_empty() {
                writer.write(NAME_KEY, root.name()).map_err(to_err)?;
            }
            if let Some(description) = root.description() {
                writer.write(DESCRIPTION_KEY, description).map_err(to_err)?;
            }
            writer.write(TYPE_KEY, root.vcs_type()).map_err(to_err)?;

            for (key, value) in root.params().iter() {
                writer
                    .write(&format!("{}{}", PARAM_PREFIX, key), value)
                    .map_err(to_err)?;
            }
            writer.finish().map_err(to_err)?;
        }

        String::from_utf8(buf).map_err(|e| VcsRootError::serialize_error("properties", e.to_string()))
    }
}
