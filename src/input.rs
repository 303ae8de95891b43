// 📂 Input Loading
// File reads live here so the core stays pure: aggregation, comparison and
// rendering only ever see already-loaded values.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load and parse one JSON snapshot.
pub fn load_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Load the optional free-text document (pre-extracted from the generated
/// PDF). An absent file is not an error: the fallback source simply does not
/// exist for this submission.
pub fn load_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let path = temp_file("fsr_audit_load_json.json", r#"{"income": []}"#);
        let value = load_json(&path).unwrap();
        assert!(value["income"].is_array());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_json_parse_failure_names_file() {
        let path = temp_file("fsr_audit_bad.json", "{not json");
        let err = load_json(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("fsr_audit_bad.json"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_text_absent_file_is_none() {
        let path = std::env::temp_dir().join("fsr_audit_does_not_exist.txt");
        assert!(load_text(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_text_present_file() {
        let path = temp_file("fsr_audit_text.txt", "Amount that can be paid toward debt: $250.00");
        let text = load_text(&path).unwrap().unwrap();
        assert!(text.contains("$250.00"));
        fs::remove_file(&path).unwrap();
    }
}
