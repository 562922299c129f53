//! Reading and writing JSON documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::io::config::write_atomic;

/// Read and parse a JSON document. Member order is preserved.
pub fn read_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "read document");
    Ok(value)
}

/// Serialize `value` to JSON text with a trailing newline.
pub fn render_document(value: &Value, pretty: bool) -> Result<String> {
    let mut payload = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize json")?;
    payload.push('\n');
    Ok(payload)
}

/// Render `value` and atomically replace `path` with it.
pub fn write_document(path: &Path, value: &Value, pretty: bool) -> Result<()> {
    let payload = render_document(value, pretty)?;
    write_atomic(path, &payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn render_pretty_and_compact_end_with_newline() {
        let value = json!({"b": 1, "a": [true, null]});
        let pretty = render_document(&value, true).expect("pretty");
        assert_eq!(
            pretty,
            "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}\n"
        );
        let compact = render_document(&value, false).expect("compact");
        assert_eq!(compact, "{\"b\":1,\"a\":[true,null]}\n");
    }

    #[test]
    fn read_preserves_member_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("doc.json");
        fs::write(&path, r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).expect("write");

        let value = read_document(&path).expect("read");
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn read_reports_path_on_parse_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");

        let err = read_document(&path).expect_err("parse error");
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("out").join("doc.json");
        let value = json!({"k": ["v", 2.5]});
        write_document(&path, &value, false).expect("write");
        assert_eq!(read_document(&path).expect("read"), value);
        assert!(!temp.path().join("out").join("doc.json.tmp").exists());
    }
}
