//! Build script for results-explorer.
//!
//! Reads the benchmark catalog and every problem record from `fixtures/`
//! and writes them to OUT_DIR as one gzip-compressed bundle, embedded via
//! `include_bytes!` at compile time. Without a catalog the bundle is empty.

use std::env;
use std::fs;
use std::path::Path;

use sigs_data::{Catalog, Problem, ProblemBundle};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("bundle.json.gz");
    let catalog_path = Path::new("../fixtures/problems.json");
    let data_dir = Path::new("../fixtures/data");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", catalog_path.display());
    println!("cargo:rerun-if-changed={}", data_dir.display());

    if !catalog_path.exists() {
        fs::write(&dest, b"").unwrap();
        println!(
            "cargo:warning=Fixture file {} not found, using empty bundle",
            catalog_path.display()
        );
        return;
    }

    let catalog_json = fs::read_to_string(catalog_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", catalog_path.display(), e));
    let catalog = Catalog::from_json(&catalog_json)
        .unwrap_or_else(|e| panic!("Invalid catalog {}: {}", catalog_path.display(), e));

    let mut records: Vec<Problem> = Vec::new();
    for entry in &catalog.problems {
        let path = data_dir.join(format!("{}.json", entry.id));
        println!("cargo:rerun-if-changed={}", path.display());
        match fs::read_to_string(&path) {
            Ok(json) => records.push(
                Problem::from_json(&json)
                    .unwrap_or_else(|e| panic!("Invalid problem {}: {}", path.display(), e)),
            ),
            Err(_) => println!(
                "cargo:warning=No record for '{}' at {}, dropping it",
                entry.id,
                path.display()
            ),
        }
    }

    let bundle = ProblemBundle::assemble(catalog, records);
    let bytes = bundle
        .to_gzip()
        .unwrap_or_else(|e| panic!("Failed to compress bundle: {}", e));
    fs::write(&dest, bytes).unwrap_or_else(|e| {
        panic!("Failed to write {}: {}", dest.display(), e);
    });
}
