//! CSV and Markdown export of rendered text tables

use crate::table::{TableBody, TableView};

impl TableView<'_, String> {
    /// Export as CSV: header labels, then one line per row in display order
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::new();
        lines.push(
            self.headers
                .iter()
                .map(|h| csv_field(&h.label))
                .collect::<Vec<_>>()
                .join(","),
        );

        for row in self.rows() {
            lines.push(
                row.cells
                    .iter()
                    .map(|c| csv_field(c.as_text()))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        lines.join("\n")
    }

    /// Export as a Markdown table
    pub fn to_markdown(&self) -> String {
        if self.headers.is_empty() {
            return match &self.body {
                TableBody::Empty { message, .. } => message.to_string(),
                TableBody::Rows(_) => String::new(),
            };
        }

        let mut lines = Vec::new();
        lines.push(markdown_line(self.headers.iter().map(|h| h.label.as_str())));
        lines.push(markdown_line(self.headers.iter().map(|h| {
            if h.label.is_empty() {
                "---"
            } else {
                dashes(h.label.chars().count())
            }
        })));

        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    lines.push(markdown_line(row.cells.iter().map(|c| c.as_text())));
                }
            }
            TableBody::Empty { message, colspan } => {
                let mut cells = vec![*message];
                cells.resize((*colspan).max(1), "");
                lines.push(markdown_line(cells.into_iter()));
            }
        }

        lines.join("\n")
    }
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn markdown_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(|c| c.replace('|', "\\|")).collect();
    format!("| {} |", cells.join(" | "))
}

fn dashes(width: usize) -> &'static str {
    const DASHES: &str = "--------------------------------";
    &DASHES[..width.clamp(3, DASHES.len())]
}
