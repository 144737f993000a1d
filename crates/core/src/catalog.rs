//! BEELINE benchmark records and their table rows

use crate::error::Error;
use crate::value::{to_fixed, Row};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An expression dataset used as a benchmark input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub organism: String,
    /// Assay type, e.g. `scRNA-seq`
    #[serde(rename = "type")]
    pub kind: String,
    pub genes: u32,
    pub cells: u32,
    /// Edges in the ground-truth network
    pub edges: u32,
    pub source: DatasetSource,
    pub last_updated: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSource {
    Curated,
    Real,
    Synthetic,
}

impl DatasetSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetSource::Curated => "curated",
            DatasetSource::Real => "real",
            DatasetSource::Synthetic => "synthetic",
        }
    }
}

impl Dataset {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("organism", self.organism.as_str())
            .with("type", self.kind.as_str())
            .with("genes", self.genes)
            .with("cells", self.cells)
            .with("edges", self.edges)
            .with("source", self.source.as_str())
            .with("lastUpdated", self.last_updated.format("%Y-%m-%d").to_string())
            .with("description", self.description.as_str())
    }

    /// Search/organism filter used by the dataset pages
    ///
    /// `query` matches name or organism case-insensitively; an empty query
    /// matches everything. `organism` of `None` means "all".
    pub fn matches(&self, query: &str, organism: Option<&str>) -> bool {
        let query = query.to_lowercase();
        let matches_search = self.name.to_lowercase().contains(&query)
            || self.organism.to_lowercase().contains(&query);
        let matches_organism = organism.map_or(true, |o| self.organism == o);
        matches_search && matches_organism
    }
}

/// A GRN inference algorithm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Algorithm {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub category: String,
}

impl Algorithm {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("version", self.version.as_str())
            .with("description", self.description.as_str())
            .with("category", self.category.as_str())
    }
}

/// A performance metric reported for an algorithm run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    Auprc,
    Auroc,
    F1,
    Precision,
    Recall,
    EarlyPrecision,
    Runtime,
    Memory,
}

impl Metric {
    /// Canonical column order
    pub const ALL: [Metric; 8] = [
        Metric::Auprc,
        Metric::Auroc,
        Metric::F1,
        Metric::Precision,
        Metric::Recall,
        Metric::EarlyPrecision,
        Metric::Runtime,
        Metric::Memory,
    ];

    pub const DEFAULT_SELECTION: [Metric; 5] = [
        Metric::Auprc,
        Metric::Auroc,
        Metric::F1,
        Metric::Precision,
        Metric::Recall,
    ];

    /// Row key
    pub fn key(self) -> &'static str {
        match self {
            Metric::Auprc => "auprc",
            Metric::Auroc => "auroc",
            Metric::F1 => "f1",
            Metric::Precision => "precision",
            Metric::Recall => "recall",
            Metric::EarlyPrecision => "earlyPrec",
            Metric::Runtime => "runtime",
            Metric::Memory => "memory",
        }
    }

    /// Column header
    pub fn label(self) -> &'static str {
        match self {
            Metric::Auprc => "AUPRC",
            Metric::Auroc => "AUROC",
            Metric::F1 => "F1 Score",
            Metric::Precision => "Precision",
            Metric::Recall => "Recall",
            Metric::EarlyPrecision => "Early Precision",
            Metric::Runtime => "Runtime (s)",
            Metric::Memory => "Memory (GB)",
        }
    }

    /// Early precision is shown regardless of the selection
    pub fn always_shown(self) -> bool {
        self == Metric::EarlyPrecision
    }

    /// Display text for a value of this metric
    pub fn format(self, value: f64) -> String {
        match self {
            Metric::Runtime => format!("{}s", value),
            Metric::Memory => format!("{}GB", value),
            _ => to_fixed(value, 3),
        }
    }

    /// Metrics to show as columns for `selected`, in canonical order
    pub fn columns_for(selected: &[Metric]) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| m.always_shown() || selected.contains(m))
            .collect()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.key().to_lowercase() == wanted || (wanted == "early" && m.always_shown()))
            .ok_or_else(|| Error::UnknownColumn(s.to_string()))
    }
}

/// Metrics for one algorithm on one dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceMetrics {
    pub algorithm: String,
    pub auprc: f64,
    pub auroc: f64,
    pub f1: f64,
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "earlyPrec")]
    pub early_precision: f64,
    /// Seconds
    pub runtime: f64,
    /// Gigabytes
    pub memory: f64,
}

impl PerformanceMetrics {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Auprc => self.auprc,
            Metric::Auroc => self.auroc,
            Metric::F1 => self.f1,
            Metric::Precision => self.precision,
            Metric::Recall => self.recall,
            Metric::EarlyPrecision => self.early_precision,
            Metric::Runtime => self.runtime,
            Metric::Memory => self.memory,
        }
    }

    pub fn to_row(&self) -> Row {
        Metric::ALL.into_iter().fold(
            Row::new().with("algorithm", self.algorithm.as_str()),
            |row, metric| row.with(metric.key(), self.value(metric)),
        )
    }
}

/// Kind of regulatory interaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Activation,
    Inhibition,
    Repression,
    Unknown,
}

impl EdgeType {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeType::Activation => "activation",
            EdgeType::Inhibition => "inhibition",
            EdgeType::Repression => "repression",
            EdgeType::Unknown => "unknown",
        }
    }
}

/// A predicted regulatory edge from an inference run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictedEdge {
    pub source: String,
    pub target: String,
    /// Confidence in `[0, 1]`
    pub score: f64,
    pub runtime: f64,
    #[serde(rename = "type")]
    pub kind: EdgeType,
    /// Present in the ground-truth network
    pub validated: bool,
}

impl PredictedEdge {
    pub fn to_row(&self) -> Row {
        Row::new()
            .with("source", self.source.as_str())
            .with("target", self.target.as_str())
            .with("score", self.score)
            .with("runtime", self.runtime)
            .with("type", self.kind.as_str())
            .with("validated", self.validated)
    }
}

/// Datasets, algorithms and their benchmark results
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkCatalog {
    pub datasets: Vec<Dataset>,
    pub algorithms: Vec<Algorithm>,
    /// Performance rows keyed by dataset id
    pub performance: BTreeMap<String, Vec<PerformanceMetrics>>,
    /// Highest-scoring predicted edges of the showcased run
    pub top_edges: Vec<PredictedEdge>,
}

impl BenchmarkCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON file
    pub fn load_from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.display().to_string(),
                source: e,
            })?;

        let catalog: Self = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// Save the catalog to a JSON file
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| crate::error::Error::FileWriteError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| crate::error::Error::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(())
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Performance rows for a dataset (empty when unknown)
    pub fn performance_for(&self, dataset_id: &str) -> &[PerformanceMetrics] {
        self.performance
            .get(dataset_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Datasets passing the search/organism filter, in catalog order
    pub fn filter_datasets(&self, query: &str, organism: Option<&str>) -> Vec<&Dataset> {
        self.datasets
            .iter()
            .filter(|d| d.matches(query, organism))
            .collect()
    }

    /// Distinct organisms in catalog order
    pub fn organisms(&self) -> Vec<&str> {
        let mut organisms: Vec<&str> = Vec::new();
        for dataset in &self.datasets {
            if !organisms.contains(&dataset.organism.as_str()) {
                organisms.push(&dataset.organism);
            }
        }
        organisms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CellValue;

    fn metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            algorithm: "GENIE3".to_string(),
            auprc: 0.847,
            auroc: 0.923,
            f1: 0.782,
            precision: 0.821,
            recall: 0.746,
            early_precision: 0.891,
            runtime: 252.0,
            memory: 1.8,
        }
    }

    #[test]
    fn test_metric_columns_keep_canonical_order() {
        let columns = Metric::columns_for(&[Metric::Memory, Metric::Auroc]);
        assert_eq!(
            columns,
            vec![Metric::Auroc, Metric::EarlyPrecision, Metric::Memory]
        );
        assert_eq!(Metric::columns_for(&[]), vec![Metric::EarlyPrecision]);
    }

    #[test]
    fn test_metric_parse_and_format() {
        assert_eq!("AUROC".parse::<Metric>().unwrap(), Metric::Auroc);
        assert_eq!("earlyPrec".parse::<Metric>().unwrap(), Metric::EarlyPrecision);
        assert!("bogus".parse::<Metric>().is_err());

        assert_eq!(Metric::Auroc.format(0.9231), "0.923");
        assert_eq!(Metric::Runtime.format(252.0), "252s");
        assert_eq!(Metric::Memory.format(1.8), "1.8GB");
    }

    #[test]
    fn test_performance_row_keys() {
        let row = metrics().to_row();
        assert_eq!(row.text("algorithm"), "GENIE3");
        assert_eq!(row.get("earlyPrec").and_then(CellValue::as_number), Some(0.891));
        assert_eq!(row.len(), 9);
    }

    #[test]
    fn test_performance_json_field_names() {
        let json = serde_json::to_value(metrics()).unwrap();
        assert_eq!(json["earlyPrec"], 0.891);
        assert!(json.get("early_precision").is_none());
    }

    #[test]
    fn test_dataset_filter() {
        let dataset = Dataset {
            id: "hESC".to_string(),
            name: "hESC".to_string(),
            organism: "Human".to_string(),
            kind: "scRNA-seq".to_string(),
            genes: 1872,
            cells: 758,
            edges: 3289,
            source: DatasetSource::Curated,
            last_updated: NaiveDate::from_ymd_opt(2024, 11, 15).unwrap(),
            description: "Human embryonic stem cells".to_string(),
        };

        assert!(dataset.matches("", None));
        assert!(dataset.matches("hes", None));
        assert!(dataset.matches("HUMAN", Some("Human")));
        assert!(!dataset.matches("", Some("Mouse")));
        assert!(!dataset.matches("yeast", None));

        let row = dataset.to_row();
        assert_eq!(row.text("lastUpdated"), "2024-11-15");
        assert_eq!(row.text("type"), "scRNA-seq");
        assert_eq!(row.text("genes"), "1872");
    }
}
