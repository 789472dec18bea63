use std::collections::BTreeMap;
use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::DataError;
use crate::problem::Problem;

/// Catalog plus every problem record, shipped as one gzip-compressed JSON blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemBundle {
    pub catalog: Catalog,
    #[serde(default)]
    pub problems: BTreeMap<String, Problem>,
}

impl ProblemBundle {
    /// Assemble a bundle, dropping catalog entries that have no record.
    pub fn assemble(catalog: Catalog, records: impl IntoIterator<Item = Problem>) -> Self {
        let problems: BTreeMap<String, Problem> =
            records.into_iter().map(|p| (p.id.clone(), p)).collect();

        let mut catalog = catalog;
        catalog.problems.retain(|entry| {
            let present = problems.contains_key(&entry.id);
            if !present {
                warn!("catalog entry '{}' has no problem record; dropping it", entry.id);
            }
            present
        });

        Self { catalog, problems }
    }

    pub fn problem(&self, id: &str) -> Result<&Problem, DataError> {
        self.problems
            .get(id)
            .ok_or_else(|| DataError::MissingProblem(id.to_string()))
    }

    pub fn to_gzip(&self) -> Result<Vec<u8>, DataError> {
        let json = serde_json::to_vec(self)?;
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&json)?;
        Ok(encoder.finish()?)
    }

    /// Decode a bundle. An empty input is an empty bundle.
    pub fn from_gzip(bytes: &[u8]) -> Result<Self, DataError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let mut json = String::new();
        GzDecoder::new(bytes).read_to_string(&mut json)?;
        let bundle: ProblemBundle = serde_json::from_str(&json)?;
        info!(
            "loaded bundle with {} catalog entries and {} problems",
            bundle.catalog.len(),
            bundle.problems.len()
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryFilter;

    fn problem(id: &str, known: bool) -> Problem {
        Problem::from_json(&format!(
            r#"{{ "id": "{id}", "name": "{id}", "known": {known} }}"#
        ))
        .unwrap()
    }

    #[test]
    fn survives_compression() {
        let catalog = Catalog::from_json(
            r#"{ "problems": [
                { "id": "a", "name": "a" },
                { "id": "b", "name": "b", "known": false }
            ] }"#,
        )
        .unwrap();
        let bundle = ProblemBundle::assemble(catalog, [problem("a", true), problem("b", false)]);
        let bytes = bundle.to_gzip().unwrap();
        let decoded = ProblemBundle::from_gzip(&bytes).unwrap();
        assert_eq!(decoded, bundle);
        assert_eq!(decoded.catalog.default_selection(CategoryFilter::Unknown), Some("b"));
    }

    #[test]
    fn entries_without_records_are_dropped() {
        let catalog = Catalog::from_json(
            r#"{ "problems": [{ "id": "a", "name": "a" }, { "id": "ghost", "name": "ghost" }] }"#,
        )
        .unwrap();
        let bundle = ProblemBundle::assemble(catalog, [problem("a", true)]);
        assert_eq!(bundle.catalog.len(), 1);
        assert!(matches!(bundle.problem("ghost"), Err(DataError::MissingProblem(_))));
        assert!(bundle.problem("a").is_ok());
    }

    #[test]
    fn empty_input_is_empty_bundle() {
        let bundle = ProblemBundle::from_gzip(&[]).unwrap();
        assert!(bundle.catalog.is_empty());
        assert!(bundle.problems.is_empty());
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(ProblemBundle::from_gzip(b"definitely not gzip").is_err());
    }
}
