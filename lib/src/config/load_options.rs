//! OBJ loader options.
//!
//! This module provides the LoadOptions type controlling how the loader
//! treats a missing input file and which diagnostics it emits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do when the requested mesh file does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFilePolicy {
    /// Return an empty mesh.
    #[default]
    Empty,
    /// Fail with [`Error::NotFound`](crate::Error::NotFound).
    Error,
}

/// Options for [`load_obj_with`](crate::mesh::load_obj_with).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Missing input handling.
    pub missing_file: MissingFilePolicy,

    /// Report faces with more than three corners when their extra corners
    /// are dropped.
    pub report_truncated_faces: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            missing_file: MissingFilePolicy::Empty,
            report_truncated_faces: true,
        }
    }
}

impl LoadOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that fail on a missing file instead of returning an empty mesh.
    pub fn strict() -> Self {
        Self::new().missing_file(MissingFilePolicy::Error)
    }

    /// Set the missing file policy.
    pub fn missing_file(mut self, policy: MissingFilePolicy) -> Self {
        self.missing_file = policy;
        self
    }

    /// Enable or disable truncated face reports.
    pub fn report_truncated_faces(mut self, enabled: bool) -> Self {
        self.report_truncated_faces = enabled;
        self
    }
}

impl fmt::Display for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LoadOptions(missing_file={:?}, report_truncated_faces={})",
            self.missing_file, self.report_truncated_faces
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_default() {
        let options = LoadOptions::default();
        assert_eq!(options.missing_file, MissingFilePolicy::Empty);
        assert!(options.report_truncated_faces);
    }

    #[test]
    fn test_load_options_builder() {
        let options = LoadOptions::new()
            .missing_file(MissingFilePolicy::Error)
            .report_truncated_faces(false);

        assert_eq!(options.missing_file, MissingFilePolicy::Error);
        assert!(!options.report_truncated_faces);
        assert_eq!(LoadOptions::strict().missing_file, MissingFilePolicy::Error);
    }

    #[test]
    fn test_load_options_partial_json() {
        let options: LoadOptions = serde_json::from_str(r#"{"missing_file": "error"}"#).unwrap();
        assert_eq!(options.missing_file, MissingFilePolicy::Error);
        assert!(options.report_truncated_faces);

        let options: LoadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, LoadOptions::default());
    }
}
