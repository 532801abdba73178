//! Endpoint mapper
//!
//! The baseline mapper the ingress/egress ones extend. There is only one
//! endpoint kind in the legacy schema, so no dispatch happens here: the
//! legacy `meta.kind` is discarded and the fixed canonical constant takes
//! its place, while the spec fields copy through unchanged.

use serde_yaml::Value;

use super::legacy::LegacyEndpointDoc;
use crate::error::{Error, Result};
use crate::types::{Endpoint, HTTP_ENDPOINT_KIND};

/// Map one legacy endpoint document to its canonical form
pub(crate) fn upgrade(raw: Value, index: usize) -> Result<Endpoint> {
    let doc: LegacyEndpointDoc = serde_yaml::from_value(raw)
        .map_err(|e| Error::deserialization(format!("endpoint (index {})", index), e))?;

    Ok(Endpoint {
        kind: HTTP_ENDPOINT_KIND.to_string(),
        spec: doc.endpoint.spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_maps_to_fixed_http_kind() {
        let endpoint = upgrade(
            raw(r#"
endpoint:
  meta:
    kind: http
  spec:
    functions: ns/fn
    urlPathTemplate: /a/{b}
"#),
            0,
        )
        .unwrap();

        assert_eq!(endpoint.kind, HTTP_ENDPOINT_KIND);
        assert_eq!(endpoint.spec.functions, "ns/fn");
        assert_eq!(endpoint.spec.url_path_template, "/a/{b}");
        assert_eq!(endpoint.spec.timeouts, None);
    }

    #[test]
    fn test_timeouts_pass_through_opaquely() {
        let endpoint = upgrade(
            raw(r#"
endpoint:
  meta:
    kind: http
  spec:
    functions: ns/fn
    urlPathTemplate: /a/{b}
    timeouts:
      call: 2min
      read: 10s
"#),
            0,
        )
        .unwrap();

        let timeouts = endpoint.spec.timeouts.expect("timeouts should survive");
        assert_eq!(timeouts["call"], Value::from("2min"));
        assert_eq!(timeouts["read"], Value::from("10s"));
    }

    #[test]
    fn test_missing_endpoint_key_fails() {
        let err = upgrade(raw("ingress: {}"), 3).unwrap_err();
        assert!(matches!(err, Error::Deserialization { .. }));
        assert!(err.to_string().contains("endpoint (index 3)"));
    }
}
