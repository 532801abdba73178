//! StateFun Upgrade Core - schema-mapping engine for module.yaml migration
//!
//! This crate converts an Apache Flink Stateful Functions `module.yaml`
//! written in the legacy (< 3.1) nested `meta`/`spec` schema into the flat
//! `kind`/`spec` schema used by StateFun >= 3.1.
//!
//! # Main Components
//!
//! - **Error Handling**: fail-fast error taxonomy using `thiserror`
//! - **Core Types**: canonical component shapes and vocabulary constants
//! - **Migration Layer**: legacy parsing and per-component mapping,
//!   including the two-pass type dispatch for ingresses and egresses
//! - **Serializer**: separator-delimited multi-document YAML output
//!
//! # Example
//!
//! ```
//! use statefun_upgrade_core::convert;
//!
//! let legacy = r#"
//! module:
//!   meta:
//!     type: remote
//!   spec:
//!     endpoints:
//!       - endpoint:
//!           meta:
//!             kind: http
//!           spec:
//!             functions: example/*
//!             urlPathTemplate: https://bar.foo.com/{function.name}
//! "#;
//!
//! let upgraded = convert(legacy)?;
//! assert!(upgraded.contains("io.statefun.endpoints.v2/http"));
//! # Ok::<(), statefun_upgrade_core::Error>(())
//! ```

pub mod error;
pub mod migration;
pub mod render;
pub mod types;

// Re-export main types for convenience
pub use error::{ComponentCategory, Error, Result};
pub use migration::upgrade_module;
pub use render::to_multi_doc;
pub use types::{
    // Canonical components
    Component, Egress, Endpoint, Ingress, Module,

    // Spec payloads
    EgressSpec, HttpEndpointSpec, IngressSpec, KafkaEgressSpec, KafkaIngressSpec,
    KinesisEgressSpec, KinesisIngressSpec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a legacy module document to the >= 3.1 multi-document form
///
/// This is the one conversion entry point: parse, map, serialize, in a
/// single synchronous call with no partial output on failure.
pub fn convert(input: &str) -> Result<String> {
    let module = migration::upgrade_module(input)?;
    render::to_multi_doc(&module)
}
