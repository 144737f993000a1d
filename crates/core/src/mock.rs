//! Built-in BEELINE mock catalog
//!
//! Used by the dashboard (which has no backend) and by `webgenie mock`.

use crate::catalog::{
    Algorithm, BenchmarkCatalog, Dataset, DatasetSource, EdgeType, PerformanceMetrics,
    PredictedEdge,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Dataset the Compare page opens on
pub const DEFAULT_DATASET: &str = "hESC";

pub fn mock_catalog() -> BenchmarkCatalog {
    let mut performance = BTreeMap::new();
    performance.insert("hESC".to_string(), hesc_performance());
    performance.insert("mDC".to_string(), mdc_performance());

    BenchmarkCatalog {
        datasets: mock_datasets(),
        algorithms: mock_algorithms(),
        performance,
        top_edges: mock_top_edges(),
    }
}

#[allow(clippy::too_many_arguments)]
fn make_dataset(
    id: &str,
    name: &str,
    organism: &str,
    kind: &str,
    (genes, cells, edges): (u32, u32, u32),
    source: DatasetSource,
    (year, month, day): (i32, u32, u32),
    description: &str,
) -> Dataset {
    Dataset {
        id: id.to_string(),
        name: name.to_string(),
        organism: organism.to_string(),
        kind: kind.to_string(),
        genes,
        cells,
        edges,
        source,
        last_updated: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        description: description.to_string(),
    }
}

pub fn mock_datasets() -> Vec<Dataset> {
    use DatasetSource::*;

    vec![
        make_dataset(
            "hESC",
            "hESC",
            "Human",
            "scRNA-seq",
            (1872, 758, 3289),
            Curated,
            (2024, 11, 15),
            "Human embryonic stem cells single-cell RNA-seq dataset",
        ),
        make_dataset(
            "mDC",
            "mDC",
            "Mouse",
            "scRNA-seq",
            (1547, 383, 2456),
            Real,
            (2024, 10, 28),
            "Mouse dendritic cells differentiation time series",
        ),
        make_dataset(
            "mESC",
            "mESC",
            "Mouse",
            "scRNA-seq",
            (1654, 421, 2891),
            Curated,
            (2024, 11, 8),
            "Mouse embryonic stem cell differentiation",
        ),
        make_dataset(
            "hHep",
            "hHep",
            "Human",
            "scRNA-seq",
            (1985, 642, 3567),
            Synthetic,
            (2024, 9, 22),
            "Human mature hepatocytes",
        ),
        make_dataset(
            "VSC",
            "VSC",
            "Mouse",
            "scRNA-seq",
            (1432, 564, 2234),
            Curated,
            (2024, 10, 12),
            "Ventral spinal cord development",
        ),
        make_dataset(
            "hHSPC",
            "hHSPC",
            "Human",
            "scRNA-seq",
            (2145, 823, 4156),
            Real,
            (2024, 9, 5),
            "Human hematopoietic stem and progenitor cells",
        ),
        make_dataset(
            "mHSC-E",
            "mHSC-E",
            "Mouse",
            "scRNA-seq",
            (1789, 645, 3012),
            Curated,
            (2024, 11, 1),
            "Mouse hematopoietic stem cells, erythroid lineage",
        ),
        make_dataset(
            "mHSC-L",
            "mHSC-L",
            "Mouse",
            "scRNA-seq",
            (1823, 712, 3178),
            Curated,
            (2024, 10, 29),
            "Mouse hematopoietic stem cells, lymphoid lineage",
        ),
        make_dataset(
            "Synthetic-1",
            "Synthetic-1",
            "Synthetic",
            "scRNA-seq",
            (1500, 500, 2500),
            Synthetic,
            (2024, 8, 15),
            "Synthetic network simulated with BoolODE",
        ),
        make_dataset(
            "Synthetic-2",
            "Synthetic-2",
            "Synthetic",
            "scRNA-seq",
            (2000, 750, 3500),
            Synthetic,
            (2024, 8, 20),
            "Synthetic network simulated with BoolODE",
        ),
        make_dataset(
            "yeast-1",
            "Yeast Network 1",
            "Yeast",
            "Bulk RNA-seq",
            (987, 234, 1456),
            Real,
            (2024, 7, 10),
            "Yeast bulk expression compendium",
        ),
        make_dataset(
            "yeast-2",
            "Yeast Network 2",
            "Yeast",
            "Bulk RNA-seq",
            (1123, 298, 1789),
            Real,
            (2024, 7, 22),
            "Yeast bulk expression compendium",
        ),
    ]
}

fn make_algorithm(
    id: &str,
    name: &str,
    version: &str,
    category: &str,
    description: &str,
) -> Algorithm {
    Algorithm {
        id: id.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

pub fn mock_algorithms() -> Vec<Algorithm> {
    vec![
        make_algorithm(
            "alg1",
            "ARBORETO",
            "1.0",
            "Ensemble",
            "Tree-based network inference using random forests",
        ),
        make_algorithm("alg2", "BTR", "1.0", "Boolean", "Boolean network inference with BTR"),
        make_algorithm(
            "alg3",
            "GRISLI",
            "1.0",
            "Time Series",
            "Gene regulatory inference using single-cell time series",
        ),
        make_algorithm(
            "alg4",
            "GRNVBEM",
            "1.0",
            "Bayesian",
            "Variational Bayesian EM for network inference",
        ),
        make_algorithm("alg5", "JUMP3", "1.0", "Time Series", "Time-series network inference"),
        make_algorithm(
            "alg6",
            "LEAP",
            "1.2",
            "Time Series",
            "Lag-based expression association for pseudotime",
        ),
        make_algorithm(
            "alg7",
            "PIDC",
            "2.1",
            "Information Theory",
            "Partial Information Decomposition and Context",
        ),
        make_algorithm("alg8", "PNI", "1.0", "Time Series", "Pseudo-time network inference"),
        make_algorithm(
            "alg9",
            "PPCOR",
            "1.0",
            "Correlation",
            "Partial correlation based network inference",
        ),
        make_algorithm(
            "alg10",
            "SCINGE",
            "1.0",
            "Single Cell",
            "Single-cell network inference with time series",
        ),
        make_algorithm("alg11", "SCNS", "1.0", "Single Cell", "Single-cell network inference"),
        make_algorithm(
            "alg12",
            "SCODE",
            "1.0",
            "Single Cell",
            "Network inference from single-cell expression data",
        ),
        make_algorithm(
            "alg13",
            "SCRIBE",
            "1.0",
            "Single Cell",
            "Single-cell trajectory network inference",
        ),
        make_algorithm(
            "alg14",
            "SCSGL",
            "1.0",
            "Single Cell",
            "Single-cell sparse gene network learning",
        ),
        make_algorithm(
            "alg15",
            "SINCERITIES",
            "1.5",
            "Time Series",
            "Temporally informed network inference",
        ),
        make_algorithm("alg16", "SINGE", "1.0", "Single Cell", "Single-cell network inference"),
    ]
}

/// `[auprc, auroc, f1, precision, recall, early precision, runtime, memory]`
fn make_metrics(algorithm: &str, values: [f64; 8]) -> PerformanceMetrics {
    let [auprc, auroc, f1, precision, recall, early_precision, runtime, memory] = values;
    PerformanceMetrics {
        algorithm: algorithm.to_string(),
        auprc,
        auroc,
        f1,
        precision,
        recall,
        early_precision,
        runtime,
        memory,
    }
}

fn hesc_performance() -> Vec<PerformanceMetrics> {
    vec![
        make_metrics("GENIE3", [0.847, 0.923, 0.782, 0.821, 0.746, 0.891, 252.0, 1.8]),
        make_metrics("GRNBoost2", [0.803, 0.891, 0.756, 0.798, 0.718, 0.867, 324.0, 2.1]),
        make_metrics("SCENIC", [0.789, 0.878, 0.741, 0.776, 0.709, 0.852, 486.0, 3.4]),
        make_metrics("SINCERITIES", [0.734, 0.856, 0.698, 0.741, 0.659, 0.801, 522.0, 2.7]),
        make_metrics("PIDC", [0.691, 0.812, 0.654, 0.701, 0.612, 0.778, 186.0, 1.2]),
        make_metrics("PPCOR", [0.612, 0.789, 0.601, 0.648, 0.559, 0.723, 108.0, 0.9]),
    ]
}

fn mdc_performance() -> Vec<PerformanceMetrics> {
    vec![
        make_metrics("GENIE3", [0.702, 0.861, 0.688, 0.731, 0.649, 0.812, 198.0, 1.5]),
        make_metrics("GRNBoost2", [0.718, 0.874, 0.695, 0.744, 0.652, 0.826, 241.0, 1.9]),
        make_metrics("PIDC", [0.655, 0.803, 0.622, 0.671, 0.580, 0.749, 143.0, 1.0]),
        make_metrics("PPCOR", [0.598, 0.771, 0.583, 0.630, 0.542, 0.701, 87.0, 0.7]),
        make_metrics("SCODE", [0.541, 0.732, 0.529, 0.588, 0.481, 0.664, 412.0, 2.4]),
    ]
}

fn make_edge(
    source: &str,
    target: &str,
    score: f64,
    runtime: f64,
    kind: EdgeType,
    validated: bool,
) -> PredictedEdge {
    PredictedEdge {
        source: source.to_string(),
        target: target.to_string(),
        score,
        runtime,
        kind,
        validated,
    }
}

pub fn mock_top_edges() -> Vec<PredictedEdge> {
    use EdgeType::*;

    vec![
        make_edge("SOX2", "NANOG", 0.947, 121.6, Activation, true),
        make_edge("OCT4", "SOX2", 0.923, 162.7, Activation, true),
        make_edge("NANOG", "KLF4", 0.891, 153.9, Activation, true),
        make_edge("MYC", "SOX2", 0.867, 168.3, Inhibition, false),
        make_edge("KLF4", "MYC", 0.834, 153.5, Activation, true),
        make_edge("SOX2", "UTF1", 0.812, 114.6, Activation, true),
        make_edge("NANOG", "DPPA3", 0.789, 165.8, Activation, false),
        make_edge("OCT4", "NANOG", 0.776, 135.6, Activation, true),
        make_edge("MYC", "TERT", 0.754, 196.3, Activation, true),
        make_edge("KLF4", "ESRRB", 0.732, 163.6, Activation, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_catalog_is_consistent() {
        let catalog = mock_catalog();

        assert_eq!(catalog.datasets.len(), 12);
        assert_eq!(catalog.algorithms.len(), 16);
        assert!(catalog.dataset(DEFAULT_DATASET).is_some());
        for dataset_id in catalog.performance.keys() {
            assert!(catalog.dataset(dataset_id).is_some(), "{dataset_id} missing");
        }
        assert_eq!(catalog.performance_for("hESC").len(), 6);
        assert!(catalog.performance_for("yeast-1").is_empty());
    }

    #[test]
    fn test_mock_filtering() {
        let catalog = mock_catalog();

        assert_eq!(catalog.filter_datasets("", Some("Yeast")).len(), 2);
        assert_eq!(catalog.filter_datasets("hsc", None).len(), 2);
        assert!(catalog.filter_datasets("zebrafish", None).is_empty());
        assert_eq!(
            catalog.organisms(),
            vec!["Human", "Mouse", "Synthetic", "Yeast"]
        );
    }

    #[test]
    fn test_catalog_json_round_trip_via_file() {
        let catalog = mock_catalog();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested/catalog.json");

        catalog.save_to_file(&path).unwrap();
        let loaded = BenchmarkCatalog::load_from_file(&path).unwrap();

        assert_eq!(loaded, catalog);
    }
}
