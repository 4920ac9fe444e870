//! modes.yaml parser for ModeCatalog generation
//!
//! Parses the mode catalog file into a ModeCatalog that can be
//! validated and emitted.

use super::{MaqamOverride, ModeCatalog, ModeSpec};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Parse a modes.yaml file and return a ModeCatalog
pub fn parse_modes_yaml(path: &Path) -> Result<ModeCatalog, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    parse_modes_str(&content)
}

/// Parse mode catalog YAML text
pub fn parse_modes_str(content: &str) -> Result<ModeCatalog, String> {
    let doc: Value = serde_yaml::from_str(content)
        .map_err(|e| format!("Failed to parse modes.yaml as YAML: {}", e))?;

    let modes = extract_modes(&doc)?;
    let maqam_overrides = extract_maqam_overrides(&doc)?;
    let prefer_sharps = extract_prefer_sharps(&doc)?;

    Ok(ModeCatalog {
        modes,
        maqam_overrides,
        prefer_sharps,
    })
}

/// Extract the required `modes` sequence
fn extract_modes(doc: &Value) -> Result<Vec<ModeSpec>, String> {
    let modes_seq = doc
        .get("modes")
        .ok_or_else(|| "modes not found in modes.yaml".to_string())?
        .as_sequence()
        .ok_or_else(|| "modes must be a sequence".to_string())?;

    modes_seq
        .iter()
        .enumerate()
        .map(|(idx, mode_value)| {
            let name = mode_value
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| format!("Mode {}: name not found", idx))?
                .to_string();

            let intervals = mode_value
                .get("intervals")
                .and_then(|v| v.as_sequence())
                .ok_or_else(|| format!("Mode '{}': intervals not found", name))?
                .iter()
                .map(|step| {
                    step.as_u64()
                        .and_then(|v| u32::try_from(v).ok())
                        .ok_or_else(|| {
                            format!("Mode '{}': interval {:?} is not a non-negative integer", name, step)
                        })
                })
                .collect::<Result<Vec<_>, String>>()?;

            Ok(ModeSpec { name, intervals })
        })
        .collect()
}

/// Extract the optional `maqam_overrides` sequence
fn extract_maqam_overrides(doc: &Value) -> Result<Vec<MaqamOverride>, String> {
    let Some(value) = doc.get("maqam_overrides") else {
        return Ok(Vec::new());
    };
    let entries = value
        .as_sequence()
        .ok_or_else(|| "maqam_overrides must be a sequence".to_string())?;

    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let field = |key: &str| {
                entry
                    .get(key)
                    .and_then(yaml_scalar_string)
                    .ok_or_else(|| format!("Maqam override {}: {} not found", idx, key))
            };
            Ok(MaqamOverride {
                mode: field("mode")?,
                key: field("key")?,
            })
        })
        .collect()
}

/// Extract the optional `prefer_sharps` list
fn extract_prefer_sharps(doc: &Value) -> Result<Vec<String>, String> {
    let Some(value) = doc.get("prefer_sharps") else {
        return Ok(Vec::new());
    };
    value
        .as_sequence()
        .ok_or_else(|| "prefer_sharps must be a sequence".to_string())?
        .iter()
        .map(|entry| {
            yaml_scalar_string(entry)
                .ok_or_else(|| format!("prefer_sharps entry {:?} is not a string", entry))
        })
        .collect()
}

/// Read a scalar as text; YAML would otherwise type some names as
/// numbers or booleans
fn yaml_scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_modes() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let content = r#"
modes:
  - name: major
    intervals: [2, 2, 1, 2, 2, 2, 1]
  - name: whole tone
    intervals: [2, 2, 2, 2, 2, 2]
prefer_sharps:
  - c major
"#;
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_modes_success() {
        let file = create_test_modes();
        let catalog = parse_modes_yaml(file.path()).unwrap();

        assert_eq!(catalog.modes.len(), 2);
        assert_eq!(catalog.modes[1].name, "whole tone");
        assert_eq!(catalog.modes[1].intervals, vec![2; 6]);
        assert!(catalog.maqam_overrides.is_empty());
        assert_eq!(catalog.prefer_sharps, vec!["c major"]);
    }

    #[test]
    fn test_parse_missing_modes() {
        let result = parse_modes_str("prefer_sharps: []\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("modes"));
    }

    #[test]
    fn test_parse_rejects_negative_interval() {
        let result = parse_modes_str("modes:\n  - name: odd\n    intervals: [2, -1]\n");
        assert!(result.unwrap_err().contains("odd"));
    }

    #[test]
    fn test_yaml_scalar_string() {
        assert_eq!(yaml_scalar_string(&Value::String("c".into())), Some("c".to_string()));
        assert_eq!(yaml_scalar_string(&Value::Bool(false)), Some("false".to_string()));
        assert_eq!(yaml_scalar_string(&Value::Null), None);
    }
}
