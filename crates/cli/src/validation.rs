//! Validation of table arguments

use crate::error::{Error, Result};
use webgenie_core::{validate_columns, Column, Row};

/// Parse a `key` or `key:Label` column spec
///
/// Columns are sortable unless their key is listed in `inert`.
pub fn parse_column_spec(spec: &str, inert: &[String]) -> Result<Column<String>> {
    let (key, label) = match spec.split_once(':') {
        Some((key, label)) => (key.trim(), label.trim()),
        None => (spec.trim(), spec.trim()),
    };

    if key.is_empty() {
        return Err(Error::Validation(format!(
            "Invalid column '{}': key cannot be empty",
            spec
        )));
    }

    let label = if label.is_empty() { key } else { label };
    Ok(if inert.iter().any(|k| k == key) {
        Column::new(key, label)
    } else {
        Column::sortable(key, label)
    })
}

/// Parse every column spec and reject duplicate keys
pub fn parse_columns(specs: &[String], inert: &[String]) -> Result<Vec<Column<String>>> {
    let columns = specs
        .iter()
        .map(|spec| parse_column_spec(spec, inert))
        .collect::<Result<Vec<_>>>()?;
    validate_columns(&columns)?;
    Ok(columns)
}

/// One column per key seen in `rows`
///
/// Rows keep their fields sorted by key, so the first row's keys come in
/// key order, followed by keys that only appear in later rows.
pub fn infer_columns(rows: &[Row], inert: &[String]) -> Vec<Column<String>> {
    let mut keys: Vec<&str> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }

    keys.into_iter()
        .map(|key| {
            if inert.iter().any(|k| k == key) {
                Column::new(key, key)
            } else {
                Column::sortable(key, key)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_spec() {
        let column = parse_column_spec("auroc:AUROC", &[]).unwrap();
        assert_eq!(column.key, "auroc");
        assert_eq!(column.label, "AUROC");
        assert!(column.sortable);

        let column = parse_column_spec("algorithm", &[]).unwrap();
        assert_eq!(column.label, "algorithm");

        let column = parse_column_spec("type:Edge Type", &["type".to_string()]).unwrap();
        assert!(!column.sortable);

        assert!(parse_column_spec(":Label", &[]).is_err());
    }

    #[test]
    fn test_parse_columns_rejects_duplicates() {
        let specs = vec!["auroc:AUROC".to_string(), "auroc:Again".to_string()];
        assert!(matches!(
            parse_columns(&specs, &[]),
            Err(Error::Core(webgenie_core::Error::DuplicateColumnKey(_)))
        ));
    }

    #[test]
    fn test_infer_columns() {
        let rows = vec![
            Row::new().with("b", 1.0).with("a", "x"),
            Row::new().with("c", true),
        ];
        let keys: Vec<String> = infer_columns(&rows, &[])
            .into_iter()
            .map(|c| c.key)
            .collect();

        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_infer_columns_appends_later_keys() {
        let rows = vec![
            Row::new().with("score", 0.9).with("source", "SOX2"),
            Row::new().with("auroc", 0.8),
        ];
        let keys: Vec<String> = infer_columns(&rows, &[])
            .into_iter()
            .map(|c| c.key)
            .collect();

        assert_eq!(keys, vec!["score", "source", "auroc"]);
    }
}
