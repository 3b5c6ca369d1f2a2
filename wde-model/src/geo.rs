//! GeoJSON feature handling for the choropleth view.
//!
//! World atlas files identify countries inconsistently (top-level `id`,
//! `ISO_A3`, lowercase variants, `Code`). The code is resolved once at geo
//! load and written back onto each feature, so the renderer and click
//! handling never re-resolve alternate property names.

use serde_json::Value;

use crate::error::{Result, WdeError};

/// Property written onto each feature carrying its resolved country code.
pub const CODE_PROPERTY: &str = "wdeCode";

/// Conventional property names carrying an ISO-like country code, in
/// precedence order after the top-level `id`.
const CODE_PROPERTIES: [&str; 6] = ["ISO_A3", "iso_a3", "ISO3", "iso3", "Code", "code"];

/// Resolve a feature's country code: top-level `id` first, then the
/// conventional property names. Trimmed and uppercased; `None` when no
/// usable code exists.
pub fn feature_code(feature: &Value) -> Option<String> {
    let raw = feature
        .get("id")
        .and_then(Value::as_str)
        .or_else(|| {
            let properties = feature.get("properties")?;
            CODE_PROPERTIES
                .iter()
                .find_map(|key| properties.get(*key).and_then(Value::as_str))
        })?
        .trim()
        .to_uppercase();
    if raw.is_empty() {
        None
    } else {
        Some(raw)
    }
}

/// Display name of a feature, if present.
pub fn feature_name(feature: &Value) -> Option<&str> {
    feature.get("properties")?.get("name")?.as_str()
}

/// Parse a GeoJSON feature collection and annotate every feature with its
/// resolved code under [`CODE_PROPERTY`]. Features without a resolvable
/// code are kept (they render with the no-data fill) but get no annotation.
pub fn load_feature_collection(geojson_text: &str) -> Result<Value> {
    let mut doc: Value = serde_json::from_str(geojson_text)?;

    let features = doc
        .get_mut("features")
        .and_then(Value::as_array_mut)
        .ok_or(WdeError::NoFeatures)?;
    if features.is_empty() {
        return Err(WdeError::NoFeatures);
    }

    for feature in features.iter_mut() {
        if let Some(code) = feature_code(feature) {
            if let Some(properties) = feature
                .get_mut("properties")
                .and_then(Value::as_object_mut)
            {
                properties.insert(CODE_PROPERTY.to_string(), Value::String(code));
            }
        }
    }
    Ok(doc)
}

/// All annotated codes in a loaded feature collection.
pub fn feature_codes(doc: &Value) -> Vec<String> {
    doc.get("features")
        .and_then(Value::as_array)
        .map(|features| {
            features
                .iter()
                .filter_map(|f| {
                    f.get("properties")?
                        .get(CODE_PROPERTY)?
                        .as_str()
                        .map(str::to_string)
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_code_precedence() {
        let by_id = json!({"id": "usa", "properties": {"ISO_A3": "CAN"}});
        assert_eq!(feature_code(&by_id), Some("USA".to_string()));

        let by_property = json!({"properties": {"iso_a3": " ind "}});
        assert_eq!(feature_code(&by_property), Some("IND".to_string()));

        let by_code = json!({"properties": {"code": "chn"}});
        assert_eq!(feature_code(&by_code), Some("CHN".to_string()));

        let none = json!({"properties": {"name": "Atlantis"}});
        assert_eq!(feature_code(&none), None);

        let blank = json!({"id": "  "});
        assert_eq!(feature_code(&blank), None);
    }

    #[test]
    fn test_load_annotates_features() {
        let text = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "id": "USA", "properties": {"name": "United States"}},
                {"type": "Feature", "properties": {"name": "Atlantis"}}
            ]
        })
        .to_string();

        let doc = load_feature_collection(&text).unwrap();
        assert_eq!(feature_codes(&doc), vec!["USA".to_string()]);
        assert_eq!(
            feature_name(&doc["features"][1]),
            Some("Atlantis")
        );
    }

    #[test]
    fn test_load_rejects_empty_collections() {
        let empty = r#"{"type": "FeatureCollection", "features": []}"#;
        assert!(matches!(
            load_feature_collection(empty),
            Err(WdeError::NoFeatures)
        ));
        assert!(matches!(
            load_feature_collection(r#"{"type": "Topology"}"#),
            Err(WdeError::NoFeatures)
        ));
        assert!(load_feature_collection("not json").is_err());
    }
}
