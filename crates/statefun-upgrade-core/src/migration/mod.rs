//! Schema-mapping layer: legacy module tree → canonical components
//!
//! This module implements the core of the upgrade: parsing the legacy
//! `module.yaml` shape and mapping every component into the flat
//! `kind`/`spec` form. Mapping is fail-fast: the first component that
//! cannot be converted aborts the whole run, and no partial module is
//! ever produced.

mod egress;
mod endpoint;
mod ingress;
pub(crate) mod legacy;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Component, Module};

/// Parse a legacy module document and map it to canonical components
///
/// Components keep the legacy ordering: endpoints first, then ingresses,
/// then egresses, each group in declaration order.
///
/// # Errors
///
/// Returns an error if:
/// - The document does not match the legacy `module.spec` shape
/// - A component's own shape is malformed
/// - An ingress or egress declares an unrecognized `meta.type`
pub fn upgrade_module(input: &str) -> Result<Module> {
    let doc: legacy::LegacyModuleDoc =
        serde_yaml::from_str(input).map_err(|e| Error::deserialization("module", e))?;
    let spec = doc.module.spec;

    debug!(
        endpoints = spec.endpoints.len(),
        ingresses = spec.ingresses.len(),
        egresses = spec.egresses.len(),
        "parsed legacy module document"
    );

    let mut components =
        Vec::with_capacity(spec.endpoints.len() + spec.ingresses.len() + spec.egresses.len());

    for (index, raw) in spec.endpoints.into_iter().enumerate() {
        components.push(Component::Endpoint(endpoint::upgrade(raw, index)?));
    }
    for (index, raw) in spec.ingresses.into_iter().enumerate() {
        components.push(Component::Ingress(ingress::upgrade(raw, index)?));
    }
    for (index, raw) in spec.egresses.into_iter().enumerate() {
        components.push(Component::Egress(egress::upgrade(raw, index)?));
    }

    Ok(Module { components })
}
