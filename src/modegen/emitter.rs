//! Rust and JSON emitters for ModeCatalog
//!
//! build.rs writes the Rust tables into OUT_DIR where the key signature
//! module includes them; the JSON form is handed to JavaScript as-is.

use super::ModeCatalog;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render the catalog as static Rust tables
pub fn emit_rust_tables(catalog: &ModeCatalog) -> String {
    let mut out = String::new();
    out.push_str("// @generated by build.rs from data/modes.yaml\n\n");

    out.push_str("/// Named interval patterns, in catalog order\n");
    out.push_str("pub static MODES: &[(&str, &[u32])] = &[\n");
    for mode in &catalog.modes {
        let steps: Vec<String> = mode.intervals.iter().map(u32::to_string).collect();
        let _ = writeln!(out, "    ({:?}, &[{}]),", mode.name, steps.join(", "));
    }
    out.push_str("];\n\n");

    out.push_str("/// Mode names that fix the key: (mode, key)\n");
    out.push_str("pub static MAQAM_KEY_OVERRIDES: &[(&str, &str)] = &[\n");
    for entry in &catalog.maqam_overrides {
        let _ = writeln!(out, "    ({:?}, {:?}),", entry.mode, entry.key);
    }
    out.push_str("];\n\n");

    out.push_str("/// \"{key} {mode}\" pairs spelled with sharps\n");
    out.push_str("pub static PREFER_SHARPS: &[&str] = &[\n");
    for entry in &catalog.prefer_sharps {
        let _ = writeln!(out, "    {:?},", entry);
    }
    out.push_str("];\n");

    out
}

/// Write the Rust tables to a file
pub fn emit_rust_tables_file(catalog: &ModeCatalog, path: &Path) -> Result<(), String> {
    fs::write(path, emit_rust_tables(catalog))
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Emit ModeCatalog as JSON string
pub fn emit_catalog_json_string(catalog: &ModeCatalog) -> Result<String, String> {
    serde_json::to_string_pretty(catalog)
        .map_err(|e| format!("Failed to serialize ModeCatalog to JSON: {}", e))
}

/// Emit ModeCatalog as JSON to a file
pub fn emit_catalog_json(catalog: &ModeCatalog, path: &Path) -> Result<(), String> {
    let json = emit_catalog_json_string(catalog)?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
