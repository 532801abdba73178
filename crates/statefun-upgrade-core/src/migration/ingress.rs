//! Ingress mapper
//!
//! The `spec` shape of a legacy ingress depends on the sibling
//! `meta.type` field, so mapping is a two-pass parse: a partial probe
//! extracts the dispatch key, then the full document is re-parsed with
//! the technology-specific schema that key selects. An unrecognized key
//! is fatal; there is no best-effort fallback.

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::legacy::{ComponentMeta, IngressTypeProbe, LegacyIngressDoc};
use crate::error::{ComponentCategory, Error, Result};
use crate::types::{
    Ingress, IngressSpec, KafkaIngressSpec, KinesisIngressSpec, KAFKA_INGRESS_KIND,
    KINESIS_INGRESS_KIND, LEGACY_KAFKA_INGRESS_TYPE, LEGACY_KINESIS_INGRESS_TYPE,
};

/// Map one legacy ingress document to its canonical form
pub(crate) fn upgrade(raw: Value, index: usize) -> Result<Ingress> {
    let probe: IngressTypeProbe = serde_yaml::from_value(raw.clone())
        .map_err(|e| Error::deserialization(format!("ingress (index {})", index), e))?;

    match probe.ingress.meta.type_name.as_str() {
        LEGACY_KAFKA_INGRESS_TYPE => {
            let (meta, mut spec) = reparse::<KafkaIngressSpec>(raw, "kafka ingress", index)?;
            spec.id = meta.id;
            Ok(Ingress {
                kind: KAFKA_INGRESS_KIND.to_string(),
                spec: IngressSpec::Kafka(spec),
            })
        }
        LEGACY_KINESIS_INGRESS_TYPE => {
            let (meta, mut spec) = reparse::<KinesisIngressSpec>(raw, "kinesis ingress", index)?;
            spec.id = meta.id;
            Ok(Ingress {
                kind: KINESIS_INGRESS_KIND.to_string(),
                spec: IngressSpec::Kinesis(spec),
            })
        }
        other => Err(Error::UnknownType {
            category: ComponentCategory::Ingress,
            index,
            found: other.to_string(),
        }),
    }
}

/// Second pass: full parse with the schema the dispatch key selected
fn reparse<S>(raw: Value, context: &str, index: usize) -> Result<(ComponentMeta, S)>
where
    S: DeserializeOwned,
{
    let doc: LegacyIngressDoc<S> = serde_yaml::from_value(raw)
        .map_err(|e| Error::deserialization(format!("{} (index {})", context, index), e))?;
    Ok((doc.ingress.meta, doc.ingress.spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_kafka_ingress_relocates_id() {
        let ingress = upgrade(
            raw(r#"
ingress:
  meta:
    type: io.statefun.kafka/ingress
    id: names
  spec:
    address: kafka:9092
    topics: [in]
"#),
            0,
        )
        .unwrap();

        assert_eq!(ingress.kind, KAFKA_INGRESS_KIND);
        match ingress.spec {
            IngressSpec::Kafka(spec) => {
                assert_eq!(spec.id, "names");
                assert_eq!(spec.address, "kafka:9092");
                assert_eq!(spec.topics, serde_yaml::from_str::<Value>("[in]").unwrap());
                assert_eq!(spec.consumer_group_id, None);
            }
            other => panic!("expected kafka spec, got {:?}", other),
        }
    }

    #[test]
    fn test_kinesis_ingress_optional_fields() {
        let ingress = upgrade(
            raw(r#"
ingress:
  meta:
    type: io.statefun.kinesis/ingress
    id: events
  spec:
    awsRegion: us-west-2
    streams:
      - stream: s1
"#),
            1,
        )
        .unwrap();

        assert_eq!(ingress.kind, KINESIS_INGRESS_KIND);
        match ingress.spec {
            IngressSpec::Kinesis(spec) => {
                assert_eq!(spec.id, "events");
                assert_eq!(spec.aws_region, Some(Value::from("us-west-2")));
                assert!(spec.streams.is_some());
                assert_eq!(spec.aws_credentials, None);
                assert_eq!(spec.startup_position, None);
                assert_eq!(spec.client_config_properties, None);
            }
            other => panic!("expected kinesis spec, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = upgrade(
            raw(r#"
ingress:
  meta:
    type: io.statefun.unknown/ingress
    id: names
  spec: {}
"#),
            2,
        )
        .unwrap_err();

        match err {
            Error::UnknownType {
                category,
                index,
                found,
            } => {
                assert_eq!(category, ComponentCategory::Ingress);
                assert_eq!(index, 2);
                assert_eq!(found, "io.statefun.unknown/ingress");
            }
            other => panic!("expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_kafka_ingress_without_topics_fails() {
        let err = upgrade(
            raw(r#"
ingress:
  meta:
    type: io.statefun.kafka/ingress
    id: names
  spec:
    address: kafka:9092
"#),
            0,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Deserialization { .. }));
        assert!(err.to_string().contains("kafka ingress (index 0)"));
    }
}
