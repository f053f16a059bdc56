//! Generated project manifest (package.json) rewriting

use crate::error::{Result, ScaffoldError};
use serde_json::Value;
use std::path::Path;

/// Manifest file name inside each template directory
pub const MANIFEST_FILE: &str = "package.json";

/// Replace the `name` field of a manifest, keeping every other key in place
///
/// `path` is only used for error reporting. Output uses 2-space indentation.
pub fn rename_manifest(content: &str, name: &str, path: &Path) -> Result<String> {
    let mut manifest: Value = serde_json::from_str(content).map_err(|source| {
        ScaffoldError::Manifest {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let fields = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::ManifestNotObject {
            path: path.to_path_buf(),
        })?;
    fields.insert("name".to_string(), Value::String(name.to_string()));

    serde_json::to_string_pretty(&manifest).map_err(|source| ScaffoldError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}
