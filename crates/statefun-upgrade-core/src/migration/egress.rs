//! Egress mapper
//!
//! Same two-pass dispatch-then-reparse flow as the ingress mapper,
//! applied to the egress vocabulary: the dispatch key is read from
//! `egress.meta.type`, and only `io.statefun.kafka/egress` and
//! `io.statefun.kinesis/egress` are recognized.

use serde::de::DeserializeOwned;
use serde_yaml::Value;

use super::legacy::{ComponentMeta, EgressTypeProbe, LegacyEgressDoc};
use crate::error::{ComponentCategory, Error, Result};
use crate::types::{
    Egress, EgressSpec, KafkaEgressSpec, KinesisEgressSpec, KAFKA_EGRESS_KIND,
    KINESIS_EGRESS_KIND, LEGACY_KAFKA_EGRESS_TYPE, LEGACY_KINESIS_EGRESS_TYPE,
};

/// Map one legacy egress document to its canonical form
pub(crate) fn upgrade(raw: Value, index: usize) -> Result<Egress> {
    let probe: EgressTypeProbe = serde_yaml::from_value(raw.clone())
        .map_err(|e| Error::deserialization(format!("egress (index {})", index), e))?;

    match probe.egress.meta.type_name.as_str() {
        LEGACY_KAFKA_EGRESS_TYPE => {
            let (meta, mut spec) = reparse::<KafkaEgressSpec>(raw, "kafka egress", index)?;
            spec.id = meta.id;
            Ok(Egress {
                kind: KAFKA_EGRESS_KIND.to_string(),
                spec: EgressSpec::Kafka(spec),
            })
        }
        LEGACY_KINESIS_EGRESS_TYPE => {
            let (meta, mut spec) = reparse::<KinesisEgressSpec>(raw, "kinesis egress", index)?;
            spec.id = meta.id;
            Ok(Egress {
                kind: KINESIS_EGRESS_KIND.to_string(),
                spec: EgressSpec::Kinesis(spec),
            })
        }
        other => Err(Error::UnknownType {
            category: ComponentCategory::Egress,
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
    let doc: LegacyEgressDoc<S> = serde_yaml::from_value(raw)
        .map_err(|e| Error::deserialization(format!("{} (index {})", context, index), e))?;
    Ok((doc.egress.meta, doc.egress.spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_kafka_egress_relocates_id() {
        let egress = upgrade(
            raw(r#"
egress:
  meta:
    type: io.statefun.kafka/egress
    id: out
  spec:
    address: kafka:9092
    deliverySemantic:
      type: exactly-once
      transactionTimeoutMillis: 100000
"#),
            0,
        )
        .unwrap();

        assert_eq!(egress.kind, KAFKA_EGRESS_KIND);
        match egress.spec {
            EgressSpec::Kafka(spec) => {
                assert_eq!(spec.id, "out");
                assert_eq!(spec.address, "kafka:9092");
                let semantic = spec.delivery_semantic.expect("deliverySemantic survives");
                assert_eq!(semantic["type"], Value::from("exactly-once"));
                assert_eq!(spec.properties, None);
            }
            other => panic!("expected kafka spec, got {:?}", other),
        }
    }

    #[test]
    fn test_kinesis_egress_minimal() {
        let egress = upgrade(
            raw(r#"
egress:
  meta:
    type: io.statefun.kinesis/egress
    id: out
  spec:
    awsRegion: us-west-2
"#),
            0,
        )
        .unwrap();

        assert_eq!(egress.kind, KINESIS_EGRESS_KIND);
        match egress.spec {
            EgressSpec::Kinesis(spec) => {
                assert_eq!(spec.id, "out");
                assert_eq!(spec.aws_region, Some(Value::from("us-west-2")));
                assert_eq!(spec.aws_credentials, None);
                assert_eq!(spec.max_outstanding_records, None);
                assert_eq!(spec.client_config_properties, None);
            }
            other => panic!("expected kinesis spec, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = upgrade(
            raw(r#"
egress:
  meta:
    type: io.statefun.pulsar/egress
    id: out
  spec: {}
"#),
            1,
        )
        .unwrap_err();

        match err {
            Error::UnknownType {
                category,
                index,
                found,
            } => {
                assert_eq!(category, ComponentCategory::Egress);
                assert_eq!(index, 1);
                assert_eq!(found, "io.statefun.pulsar/egress");
            }
            other => panic!("expected UnknownType, got {:?}", other),
        }
    }

    #[test]
    fn test_ingress_vocabulary_is_not_accepted_for_egress() {
        // an ingress discriminator inside an egress wrapper is unknown
        let err = upgrade(
            raw(r#"
egress:
  meta:
    type: io.statefun.kinesis/ingress
    id: out
  spec: {}
"#),
            0,
        )
        .unwrap_err();

        match err {
            Error::UnknownType { found, .. } => {
                assert_eq!(found, "io.statefun.kinesis/ingress");
            }
            other => panic!("expected UnknownType, got {:?}", other),
        }
    }
}
