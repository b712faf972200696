//! `package.json` rewriting.

use serde_json::Value;

use crate::domain::{error::DomainError, value_objects::ProjectName};

/// File name of the manifest patched after retrieval.
pub const MANIFEST_FILE: &str = "package.json";

/// Replace the manifest's `name` with the project name.
///
/// Every other field is kept, in its original order. The result uses
/// two-space indentation and ends with a newline.
pub fn rename_package(manifest: &str, name: &ProjectName) -> Result<String, DomainError> {
    let mut document: Value =
        serde_json::from_str(manifest).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })?;

    let Some(fields) = document.as_object_mut() else {
        return Err(DomainError::InvalidManifest {
            reason: "top-level value is not an object".into(),
        });
    };
    fields.insert("name".into(), Value::String(name.as_str().to_string()));

    let mut rendered =
        serde_json::to_string_pretty(&document).map_err(|e| DomainError::InvalidManifest {
            reason: e.to_string(),
        })?;
    rendered.push('\n');
    Ok(rendered)
}
