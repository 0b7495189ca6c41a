use crate::error::{Result, VcsRootError};
use crate::format::{FormatParser, FormatSerializer};
use crate::root::VcsRoot;

pub struct JsonFormat;

impl FormatParser for JsonFormat {
    fn parse(&self, input: &str) -> Result<VcsRoot> {
        serde_json::from_str(input)
            .map_err(|e| VcsRootError::parse_error_with_cause("json_source", e.to_string(), e))
    }
}

impl FormatSerializer for JsonFormat {
    fn serialize(&self, root: &VcsRoot) -> Result<String> {
        serde_json::to_string_pretty(root)
            .map_err(|e| VcsRootError::serialize_error("json_target", e.to_string()))
    }
}
