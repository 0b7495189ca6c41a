use crate::error::{Result, VcsRootError};
use crate::format::{FormatParser, FormatSerializer};
use crate::root::VcsRoot;

pub struct YamlFormat;

impl FormatParser for YamlFormat {
    fn parse(&self, input: &str) -> Result<VcsRoot> {
        serde_yaml::from_str(input)
            .map_err(|e| VcsRootError::parse_error_with_cause("yaml_source", e.to_string(), e))
    }
}

impl FormatSerializer for YamlFormat {
    fn serialize(&self, root: &VcsRoot) -> Result<String> {
        serde_yaml::to_string(root)
            .map_err(|e| VcsRootError::serialize_error("yaml_target", e.to_string()))
    }
}
