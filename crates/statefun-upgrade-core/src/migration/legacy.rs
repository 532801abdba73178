//! Legacy (< 3.1) wire shapes
//!
//! The legacy schema nests every component under a wrapper key and keeps
//! identity/type information in a `meta` sub-object. These structs exist
//! only long enough to be mapped; nothing outside the migration layer
//! sees them.
//!
//! Component elements are held as raw [`serde_yaml::Value`]s by the
//! module shape because their `spec` layout depends on a sibling `type`
//! field. The probe structs below extract just that dispatch key; the
//! generic document shapes then re-parse the same value with the schema
//! the key selects.

use serde::Deserialize;
use serde_yaml::Value;

use crate::types::HttpEndpointSpec;

/// Top-level legacy document: `module.spec.{endpoints,ingresses,egresses}`
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyModuleDoc {
    pub module: LegacyModule,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyModule {
    pub spec: LegacyModuleSpec,
}

/// Component groups; a missing group is an empty group
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyModuleSpec {
    #[serde(default)]
    pub endpoints: Vec<Value>,
    #[serde(default)]
    pub ingresses: Vec<Value>,
    #[serde(default)]
    pub egresses: Vec<Value>,
}

/// Legacy endpoint wrapper
///
/// The endpoint `meta` is not modeled: its only field (`kind`) is
/// discarded and replaced by the fixed canonical constant.
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyEndpointDoc {
    pub endpoint: LegacyEndpoint,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyEndpoint {
    pub spec: HttpEndpointSpec,
}

/// First-pass probe: reads only `ingress.meta.type`
#[derive(Debug, Deserialize)]
pub(crate) struct IngressTypeProbe {
    pub ingress: TypeTagged,
}

/// First-pass probe: reads only `egress.meta.type`
#[derive(Debug, Deserialize)]
pub(crate) struct EgressTypeProbe {
    pub egress: TypeTagged,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeTagged {
    pub meta: TypeTag,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeTag {
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Second-pass legacy ingress document, generic over the spec payload
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyIngressDoc<S> {
    pub ingress: LegacyComponent<S>,
}

/// Second-pass legacy egress document, generic over the spec payload
#[derive(Debug, Deserialize)]
pub(crate) struct LegacyEgressDoc<S> {
    pub egress: LegacyComponent<S>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LegacyComponent<S> {
    pub meta: ComponentMeta,
    pub spec: S,
}

/// The part of a legacy `meta` that survives the upgrade: the identifier,
/// relocated into the canonical `spec.id`
#[derive(Debug, Deserialize)]
pub(crate) struct ComponentMeta {
    #[serde(default)]
    pub id: String,
}
