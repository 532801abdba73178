//! Serializer for the canonical multi-document output
//!
//! Each converted component is encoded as an independent YAML document
//! containing exactly the two keys `kind` and `spec`, followed by a
//! document-boundary marker line. Segments are concatenated in module
//! order.

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Module;

/// Boundary marker emitted after every segment, including the last
const DOCUMENT_BOUNDARY: &str = "---\n";

/// Encode an upgraded module as separator-delimited YAML documents
///
/// # Errors
///
/// Returns [`Error::Serialization`] if a component's spec cannot be
/// re-encoded. For well-formed mapped components this does not happen;
/// treat it as an internal-invariant violation.
pub fn to_multi_doc(module: &Module) -> Result<String> {
    let mut out = String::new();
    for component in &module.components {
        let doc = serde_yaml::to_string(component).map_err(|e| Error::Serialization {
            kind: component.kind().to_string(),
            source: e,
        })?;
        out.push_str(&doc);
        out.push_str(DOCUMENT_BOUNDARY);
    }

    debug!(
        components = module.components.len(),
        bytes = out.len(),
        "rendered upgraded module"
    );
    Ok(out)
}
