use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::MetaVariant;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default = "default_variant_count", deserialize_with = "lenient_count")]
    pub variant_count: u32,
}

fn default_variant_count() -> u32 {
    1
}

/// Accepts numbers or numeric strings; anything else falls back to 1.
/// The result is always at least 1.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let count = match value {
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(1),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().unwrap_or(1),
        _ => 1,
    };
    Ok(count.clamp(1, i64::from(u32::MAX)) as u32)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub meta_content: Vec<MetaVariant>,
    pub url: String,
    pub keywords: String,
    pub variant_count: u32,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> GenerateRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn variant_count_defaults_when_absent() {
        let req = decode(r#"{"url":"http://a.example","keywords":"k"}"#);
        assert_eq!(req.variant_count, 1);
    }

    #[test]
    fn variant_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(decode(r#"{"variantCount":3}"#).variant_count, 3);
        assert_eq!(decode(r#"{"variantCount":"4"}"#).variant_count, 4);
        assert_eq!(decode(r#"{"variantCount":" 5 "}"#).variant_count, 5);
    }

    #[test]
    fn variant_count_defaults_on_junk() {
        assert_eq!(decode(r#"{"variantCount":"lots"}"#).variant_count, 1);
        assert_eq!(decode(r#"{"variantCount":null}"#).variant_count, 1);
        assert_eq!(decode(r#"{"variantCount":true}"#).variant_count, 1);
        assert_eq!(decode(r#"{"variantCount":[2]}"#).variant_count, 1);
    }

    #[test]
    fn variant_count_clamps_to_at_least_one() {
        assert_eq!(decode(r#"{"variantCount":0}"#).variant_count, 1);
        assert_eq!(decode(r#"{"variantCount":-5}"#).variant_count, 1);
    }

    #[test]
    fn missing_url_and_keywords_decode_as_none() {
        let req = decode(r#"{}"#);
        assert!(req.url.is_none());
        assert!(req.keywords.is_none());
    }

    #[test]
    fn response_serializes_with_camel_case_keys() {
        let response = GenerateResponse {
            meta_content: vec![MetaVariant::new("A", "B")],
            url: "http://a.example".to_string(),
            keywords: "k".to_string(),
            variant_count: 1,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("metaContent").is_some());
        assert!(json.get("variantCount").is_some());
        assert_eq!(json["metaContent"][0]["title"], "A");
    }
}
