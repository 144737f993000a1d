//! Rendering table views to text and writing them out

use crate::error::{Error, Result};
use clap::ValueEnum;
use std::path::Path;
use webgenie_core::{Row, TableView};

/// Output format for table commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Markdown,
    Csv,
    /// Source rows in display order
    Json,
}

/// Render `view` in `format`
pub fn render(view: &TableView<'_, String>, format: Format) -> Result<String> {
    Ok(match format {
        Format::Markdown => view.to_markdown(),
        Format::Csv => view.to_csv(),
        Format::Json => {
            let rows: Vec<&Row> = view.rows().iter().map(|r| r.row).collect();
            serde_json::to_string_pretty(&rows)?
        }
    })
}

/// Write `content` to `path`, creating parent directories
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::FileWrite {
            path: parent.display().to_string(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::FileWrite {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use webgenie_core::{Column, SortableTable};

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("algorithm", "PIDC").with("auroc", 0.812),
            Row::new().with("algorithm", "GENIE3").with("auroc", 0.923),
        ]
    }

    #[test]
    fn test_json_keeps_display_order() {
        let data = rows();
        let mut table: SortableTable<String> =
            SortableTable::new(vec![Column::sortable("algorithm", "Algorithm")]);
        table.click_header("algorithm");

        let json = render(&table.view(&data), Format::Json).unwrap();
        let parsed: Vec<Row> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].text("algorithm"), "GENIE3");
        assert_eq!(parsed[1].text("algorithm"), "PIDC");
    }

    #[test]
    fn test_write_output_creates_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exports/metrics.csv");

        write_output(&path, "Algorithm\nGENIE3").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Algorithm\nGENIE3");
    }
}
