use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

fn default_known() -> bool {
    true
}

/// One benchmark as listed in `problems.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    /// Whether an analytical reference solution exists. Absent means known.
    #[serde(default = "default_known")]
    pub known: bool,
}

/// The benchmark catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub problems: Vec<CatalogEntry>,
}

/// Category tabs above the problem picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Known,
    Unknown,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 3] = [
        CategoryFilter::All,
        CategoryFilter::Known,
        CategoryFilter::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Known => "known",
            CategoryFilter::Unknown => "unknown",
        }
    }

    /// Text shown on the filter tab.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All benchmarks",
            CategoryFilter::Known => "Known analytical solution",
            CategoryFilter::Unknown => "Unknown / FEM reference",
        }
    }

    pub fn matches(self, entry: &CatalogEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Known => entry.known,
            CategoryFilter::Unknown => !entry.known,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "known" => Ok(CategoryFilter::Known),
            "unknown" => Ok(CategoryFilter::Unknown),
            other => Err(DataError::UnknownFilter(other.to_string())),
        }
    }
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Entries passing `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&CatalogEntry> {
        self.problems.iter().filter(|p| filter.matches(p)).collect()
    }

    /// The problem selected when `filter` becomes active: its first entry.
    pub fn default_selection(&self, filter: CategoryFilter) -> Option<&str> {
        self.problems
            .iter()
            .find(|p| filter.matches(p))
            .map(|p| p.id.as_str())
    }

    pub fn entry(&self, id: &str) -> Option<&CatalogEntry> {
        self.problems.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "problems": [
            { "id": "heat1d", "name": "1D heat equation" },
            { "id": "burgers", "name": "Viscous Burgers", "known": true },
            { "id": "poisson_l", "name": "Poisson on L-shape", "known": false },
            { "id": "swe", "name": "Shallow water", "known": false }
        ]
    }"#;

    #[test]
    fn missing_known_flag_counts_as_known() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.entry("heat1d").unwrap().known);
    }

    #[test]
    fn filters_by_category() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let ids = |f| {
            catalog
                .filtered(f)
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(CategoryFilter::All).len(), 4);
        assert_eq!(ids(CategoryFilter::Known), vec!["heat1d", "burgers"]);
        assert_eq!(ids(CategoryFilter::Unknown), vec!["poisson_l", "swe"]);
    }

    #[test]
    fn selects_first_entry_of_filter() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert_eq!(catalog.default_selection(CategoryFilter::All), Some("heat1d"));
        assert_eq!(catalog.default_selection(CategoryFilter::Unknown), Some("poisson_l"));
        assert_eq!(Catalog::default().default_selection(CategoryFilter::All), None);
    }

    #[test]
    fn empty_category_has_no_selection() {
        let catalog = Catalog::from_json(r#"{ "problems": [{ "id": "a", "name": "A" }] }"#).unwrap();
        assert!(catalog.filtered(CategoryFilter::Unknown).is_empty());
        assert_eq!(catalog.default_selection(CategoryFilter::Unknown), None);
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("Known".parse::<CategoryFilter>().unwrap(), CategoryFilter::Known);
        assert!(matches!(
            "fem".parse::<CategoryFilter>(),
            Err(DataError::UnknownFilter(_))
        ));
        for filter in CategoryFilter::ALL {
            assert_eq!(filter.as_str().parse::<CategoryFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn missing_problem_list_is_empty_catalog() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
