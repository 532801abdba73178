//! Canonical component types for the >= 3.1 module schema
//!
//! This module defines the flattened `kind`/`spec` shapes that the
//! conversion emits, together with the vocabulary constants of both
//! schema generations. Fields whose internal structure is irrelevant to
//! the conversion (timeouts, properties, credentials, ...) are carried as
//! raw [`serde_yaml::Value`]s and round-trip without interpretation.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Canonical kind emitted for every HTTP endpoint
pub const HTTP_ENDPOINT_KIND: &str = "io.statefun.endpoints.v2/http";

/// Canonical kinds emitted per ingress/egress technology
pub const KAFKA_INGRESS_KIND: &str = "io.statefun.kafka.v1/ingress";
pub const KINESIS_INGRESS_KIND: &str = "io.statefun.kinesis.v1/ingress";
pub const KAFKA_EGRESS_KIND: &str = "io.statefun.kafka.v1/egress";
pub const KINESIS_EGRESS_KIND: &str = "io.statefun.kinesis.v1/egress";

/// Legacy dispatch vocabulary recognized in `meta.type`
pub const LEGACY_KAFKA_INGRESS_TYPE: &str = "io.statefun.kafka/ingress";
pub const LEGACY_KINESIS_INGRESS_TYPE: &str = "io.statefun.kinesis/ingress";
pub const LEGACY_KAFKA_EGRESS_TYPE: &str = "io.statefun.kafka/egress";
pub const LEGACY_KINESIS_EGRESS_TYPE: &str = "io.statefun.kinesis/egress";

/// An upgraded module: the ordered sequence of converted components
///
/// Order is inherited from the legacy document: endpoints first, then
/// ingresses, then egresses, each group in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub components: Vec<Component>,
}

/// A single converted component in canonical `kind`/`spec` form
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Component {
    Endpoint(Endpoint),
    Ingress(Ingress),
    Egress(Egress),
}

impl Component {
    /// The canonical kind discriminator of this component
    pub fn kind(&self) -> &str {
        match self {
            Component::Endpoint(e) => &e.kind,
            Component::Ingress(i) => &i.kind,
            Component::Egress(e) => &e.kind,
        }
    }
}

/// Canonical HTTP endpoint component
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Endpoint {
    pub kind: String,
    pub spec: HttpEndpointSpec,
}

/// Spec payload of an HTTP endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HttpEndpointSpec {
    /// Function selector, e.g. `example-namespace/*`
    pub functions: String,

    /// URL path template invocations are delivered to
    pub url_path_template: String,

    /// Opaque timeout configuration, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<Value>,
}

/// Canonical ingress component
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Ingress {
    pub kind: String,
    pub spec: IngressSpec,
}

/// Technology-specific ingress spec payload
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum IngressSpec {
    Kafka(KafkaIngressSpec),
    Kinesis(KinesisIngressSpec),
}

/// Spec payload of a Kafka ingress
///
/// `id` lives under `meta` in the legacy schema; the mapper relocates it
/// here. During the legacy parse it defaults to empty and is overwritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KafkaIngressSpec {
    #[serde(default)]
    pub id: String,

    /// Kafka broker address
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumer_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_position: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,

    /// Topic bindings, opaque but required
    pub topics: Value,
}

/// Spec payload of a Kinesis ingress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KinesisIngressSpec {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_credentials: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub startup_position: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_config_properties: Option<Value>,
}

/// Canonical egress component
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Egress {
    pub kind: String,
    pub spec: EgressSpec,
}

/// Technology-specific egress spec payload
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum EgressSpec {
    Kafka(KafkaEgressSpec),
    Kinesis(KinesisEgressSpec),
}

/// Spec payload of a Kafka egress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KafkaEgressSpec {
    #[serde(default)]
    pub id: String,

    /// Kafka broker address
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_semantic: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

/// Spec payload of a Kinesis egress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KinesisEgressSpec {
    #[serde(default)]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_credentials: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_outstanding_records: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_config_properties: Option<Value>,
}
