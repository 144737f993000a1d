//! Column descriptors and cell rendering

use crate::error::{Error, Result};
use crate::value::{CellValue, Row};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Custom cell renderer: `(value, row) -> element`
///
/// `value` is `None` when the row has no field for the column key.
pub type CellRenderer<E> = Rc<dyn Fn(Option<&CellValue>, &Row) -> E>;

/// Describes one table column
///
/// `E` is the element type produced by custom renderers.
pub struct Column<E> {
    /// Field name looked up in every row
    pub key: String,
    /// Header text
    pub label: String,
    /// Whether the header toggles sorting
    pub sortable: bool,
    render: Option<CellRenderer<E>>,
}

impl<E> Column<E> {
    /// A column with an inert header
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    /// A column whose header toggles sorting
    pub fn sortable(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            sortable: true,
            ..Self::new(key, label)
        }
    }

    /// Attach a custom renderer
    pub fn render(mut self, render: impl Fn(Option<&CellValue>, &Row) -> E + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Produce the cell for `row`: the renderer output when one is set,
    /// otherwise the raw value as text.
    pub fn render_cell(&self, row: &Row) -> Cell<E> {
        let value = row.get(&self.key);
        match &self.render {
            Some(render) => Cell::Rendered(render(value, row)),
            None => Cell::Text(CellValue::text_of(value)),
        }
    }
}

impl<E> Clone for Column<E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<E> PartialEq for Column<E> {
    fn eq(&self, other: &Self) -> bool {
        let same_render = match (&self.render, &other.render) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && same_render
    }
}

impl<E> fmt::Debug for Column<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// Content of one body cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<E> {
    /// Output of the column's renderer
    Rendered(E),
    /// Raw value coerced to text
    Text(String),
}

impl Cell<String> {
    pub fn as_text(&self) -> &str {
        match self {
            Cell::Rendered(text) | Cell::Text(text) => text,
        }
    }
}

/// Check that column keys are unique
pub fn validate_columns<E>(columns: &[Column<E>]) -> Result<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(Error::DuplicateColumnKey(column.key.clone()));
        }
    }
    Ok(())
}
