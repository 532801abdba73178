//! Error types for the module upgrade engine
//!
//! This module defines the error taxonomy for the conversion pipeline,
//! using thiserror for ergonomic error definitions. Every error is fatal:
//! the conversion is a one-shot batch transformation with no notion of
//! partial success.

use std::fmt;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum Error {
    /// The legacy document does not match the expected shape
    #[error("failed to deserialize legacy {context}: {source}")]
    Deserialization {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A component's dispatch key names no recognized technology
    #[error("unknown {category} type '{found}' ({category} index {index})")]
    UnknownType {
        category: ComponentCategory,
        index: usize,
        found: String,
    },

    /// A mapped component could not be re-encoded
    #[error("failed to serialize '{kind}' component: {source}")]
    Serialization {
        kind: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The three component categories of a legacy module document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentCategory {
    Endpoint,
    Ingress,
    Egress,
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCategory::Endpoint => write!(f, "endpoint"),
            ComponentCategory::Ingress => write!(f, "ingress"),
            ComponentCategory::Egress => write!(f, "egress"),
        }
    }
}

impl Error {
    /// Build a deserialization error with a human-readable context label
    pub(crate) fn deserialization(
        context: impl Into<String>,
        source: serde_yaml::Error,
    ) -> Self {
        Error::Deserialization {
            context: context.into(),
            source,
        }
    }
}
