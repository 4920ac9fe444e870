// Build script: compile data/modes.yaml into static tables
//
// 1. Parse and validate data/modes.yaml with the modegen module
// 2. Emit OUT_DIR/modes.rs (included by src/key_signature/modes.rs)
// 3. Emit OUT_DIR/modes.json (served to JavaScript by getModeCatalog)

#[allow(dead_code)]
#[path = "src/modegen/mod.rs"]
mod modegen;

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=data/modes.yaml");
    println!("cargo:rerun-if-changed=src/modegen");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let modes_path = manifest_dir.join("data").join("modes.yaml");

    let catalog = match modegen::parser::parse_modes_yaml(&modes_path) {
        Ok(catalog) => catalog,
        Err(e) => panic!("Failed to parse {}: {}", modes_path.display(), e),
    };

    let validation = catalog.validate();
    for warning in &validation.warnings {
        println!("cargo:warning=modes.yaml: {}", warning);
    }
    if !validation.is_valid {
        for error in &validation.errors {
            println!("cargo:warning=modes.yaml error: {}", error);
        }
        panic!("data/modes.yaml failed validation ({} errors)", validation.errors.len());
    }

    if let Err(e) = modegen::emitter::emit_rust_tables_file(&catalog, &out_dir.join("modes.rs")) {
        panic!("{}", e);
    }
    if let Err(e) = modegen::emitter::emit_catalog_json(&catalog, &out_dir.join("modes.json")) {
        panic!("{}", e);
    }
}
