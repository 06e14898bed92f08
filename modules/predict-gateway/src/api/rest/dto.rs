//! REST DTOs for the predict gateway

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /predict`.
///
/// Only a JSON object is accepted. The derived impl would also take the
/// sequence form `["..."]`, so deserialization is written by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    /// Model input. May be empty; the worker decides whether it is valid.
    pub input_data: String,
}

impl<'de> Deserialize<'de> for PredictRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = PredictRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with a string `input_data` field")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<PredictRequest, A::Error> {
                let mut input_data: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "input_data" {
                        if input_data.is_some() {
                            return Err(de::Error::duplicate_field("input_data"));
                        }
                        input_data = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                let Some(input_data) = input_data else {
                    return Err(de::Error::missing_field("input_data"));
                };
                Ok(PredictRequest { input_data })
            }
        }

        deserializer.deserialize_struct("PredictRequest", &["input_data"], Visitor)
    }
}

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub output_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn object_with_input_data_is_accepted() {
        let req: PredictRequest =
            serde_json::from_str(r#"{"input_data":"hello","extra":[1,2]}"#).unwrap();
        assert_eq!(req.input_data, "hello");

        let req: PredictRequest = serde_json::from_str(r#"{"input_data":""}"#).unwrap();
        assert!(req.input_data.is_empty());
    }

    #[test]
    fn array_form_is_rejected() {
        let err = serde_json::from_str::<PredictRequest>(r#"["hello"]"#).unwrap_err();
        assert!(err.to_string().contains("input_data"), "{err}");
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        for body in [
            "{}",
            "null",
            "42",
            r#""hello""#,
            r#"{"input_data":42}"#,
            r#"{"input_data":null}"#,
            r#"{"input_data":"a","input_data":"b"}"#,
        ] {
            assert!(
                serde_json::from_str::<PredictRequest>(body).is_err(),
                "{body} must not deserialize"
            );
        }
    }

    #[test]
    fn missing_field_is_named_in_the_error() {
        let err = serde_json::from_str::<PredictRequest>(r#"{"wrong_field":"x"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `input_data`"), "{err}");
    }
}
