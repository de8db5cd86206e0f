//! Parsing of user-supplied field data and tags.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};

/// An option counts as given only when it is non-empty.
pub fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parse JSON text that must be an object.
pub fn parse_object(text: &str, origin: &str) -> CliResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(CliError::malformed(
            origin,
            format!("expected an object, got {}", json_kind(&other)),
        )),
        Err(e) => Err(CliError::malformed(origin, e)),
    }
}

/// Read and parse a JSON file as an untyped value.
pub async fn read_json_file(path: &Path) -> CliResult<Value> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|e| CliError::malformed(path.display().to_string(), e))
}

/// Field data for `create`: `--file` wins over `--data`; neither yields an empty object.
pub async fn load_fields(data: Option<&str>, file: Option<&Path>) -> CliResult<Map<String, Value>> {
    if let Some(path) = file {
        let origin = path.display().to_string();
        return match read_json_file(path).await? {
            Value::Object(map) => Ok(map),
            other => Err(CliError::malformed(
                origin,
                format!("expected an object, got {}", json_kind(&other)),
            )),
        };
    }
    match supplied(data) {
        Some(text) => parse_object(text, "--data"),
        None => Ok(Map::new()),
    }
}

/// Split comma-separated tags, trimming and dropping empty pieces.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_object() {
        let map = parse_object(r#"{"name":"Schottenhamel","totalSeats":6000}"#, "--data").unwrap();
        assert_eq!(map["name"], json!("Schottenhamel"));
        assert_eq!(map["totalSeats"], json!(6000));
    }

    #[test]
    fn test_parse_object_rejects_malformed_and_non_objects() {
        assert!(matches!(
            parse_object("{name:", "--data"),
            Err(CliError::MalformedInput { .. })
        ));
        match parse_object("[1,2]", "--data") {
            Err(CliError::MalformedInput { origin, message }) => {
                assert_eq!(origin, "--data");
                assert_eq!(message, "expected an object, got array");
            }
            other => panic!("Expected MalformedInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_wins_over_data() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tent.json");
        std::fs::write(&path, r#"{"name":"Armbrustschützenzelt"}"#).unwrap();

        let map = load_fields(Some(r#"{"name":"ignored"}"#), Some(&path))
            .await
            .unwrap();
        assert_eq!(map["name"], json!("Armbrustschützenzelt"));
    }

    #[tokio::test]
    async fn test_no_input_is_empty_object() {
        assert!(load_fields(None, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_fields(None, Some(&temp.path().join("nope.json"))).await;
        assert!(matches!(result, Err(CliError::ReadFile { .. })));
    }

    #[tokio::test]
    async fn test_empty_data_is_empty_object() {
        assert!(load_fields(Some(""), None).await.unwrap().is_empty());
    }

    #[test]
    fn test_supplied() {
        assert_eq!(supplied(Some("a")), Some("a"));
        assert_eq!(supplied(Some("")), None);
        assert_eq!(supplied(None), None);
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(split_tags("big, beer ,,tent"), vec!["big", "beer", "tent"]);
        assert!(split_tags(" , ").is_empty());
    }
}
