//! Sort state machine and row comparator

use crate::collate::locale_compare;
use crate::value::{CellValue, Row};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Per-column header indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not the active sort key
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Value for the `aria-sort` attribute
    pub fn aria_sort(self) -> &'static str {
        match self {
            SortIndicator::None => "none",
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::None => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

/// Sort state owned by one table instance
///
/// Starts unsorted. Activating a new key sorts ascending on it; activating
/// the active key flips the direction. There is no way back to unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    active_key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Apply one header activation for `key`
    pub fn handle_sort(&mut self, key: &str) {
        if self.active_key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.active_key = Some(key.to_string());
            self.direction = SortDirection::Asc;
        }
    }

    /// Indicator to show on the header of `key`
    pub fn indicator(&self, key: &str) -> SortIndicator {
        match (self.active_key.as_deref(), self.direction) {
            (Some(active), SortDirection::Asc) if active == key => SortIndicator::Ascending,
            (Some(active), SortDirection::Desc) if active == key => SortIndicator::Descending,
            _ => SortIndicator::None,
        }
    }
}

/// Compare two cell values for sorting
///
/// Two numbers compare numerically; anything else compares as text.
/// Missing values and `null` coerce to empty text, so they lead an
/// ascending sort instead of sorting as the word "undefined".
pub fn compare_values(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    let ordering = match (a, b) {
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => locale_compare(&CellValue::text_of(a), &CellValue::text_of(b)),
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Order `data` according to `state` without touching the caller's slice
///
/// Rows with equal sort values keep their relative input order, in both
/// directions.
pub fn sort_rows<'a>(data: &'a [Row], state: &SortState) -> Vec<&'a Row> {
    let mut rows: Vec<&Row> = data.iter().collect();

    if let Some(key) = state.active_key() {
        let direction = state.direction();
        merge_sort_by(&mut rows, &mut |a: &&Row, b: &&Row| {
            compare_values(a.get(key), b.get(key), direction)
        });
    }

    rows
}

/// Stable merge sort that tolerates comparators which are not a total
/// order (mixed number/text columns).
fn merge_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort_by(&mut items[..mid], compare);
    merge_sort_by(&mut items[mid..], compare);

    let mut merged = Vec::with_capacity(len);
    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        if compare(&items[j], &items[i]) == Ordering::Less {
            merged.push(items[j]);
            j += 1;
        } else {
            merged.push(items[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&items[i..mid]);
    merged.extend_from_slice(&items[j..]);
    items.copy_from_slice(&merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows(key: &str, values: Vec<CellValue>) -> Vec<Row> {
        values
            .into_iter()
            .map(|v| Row::new().with(key, v))
            .collect()
    }

    fn column_text(sorted: &[&Row], key: &str) -> Vec<String> {
        sorted.iter().map(|r| r.text(key)).collect()
    }

    #[test]
    fn test_state_transitions() {
        let mut state = SortState::new();
        assert_eq!(state.active_key(), None);

        state.handle_sort("auroc");
        assert_eq!(state.active_key(), Some("auroc"));
        assert_eq!(state.direction(), SortDirection::Asc);

        state.handle_sort("auroc");
        assert_eq!(state.direction(), SortDirection::Desc);

        state.handle_sort("auroc");
        assert_eq!(state.direction(), SortDirection::Asc);
        assert_eq!(state.active_key(), Some("auroc"));
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let mut state = SortState::new();
        state.handle_sort("auroc");
        state.handle_sort("auroc");
        assert_eq!(state.direction(), SortDirection::Desc);

        state.handle_sort("runtime");
        assert_eq!(state.active_key(), Some("runtime"));
        assert_eq!(state.direction(), SortDirection::Asc);
    }

    #[test]
    fn test_indicator() {
        let mut state = SortState::new();
        assert_eq!(state.indicator("auroc"), SortIndicator::None);

        state.handle_sort("auroc");
        assert_eq!(state.indicator("auroc"), SortIndicator::Ascending);
        assert_eq!(state.indicator("auprc"), SortIndicator::None);

        state.handle_sort("auroc");
        assert_eq!(state.indicator("auroc"), SortIndicator::Descending);
        assert_eq!(state.indicator("auroc").aria_sort(), "descending");
    }

    #[test]
    fn test_numeric_sort() {
        let data = rows("v", vec![10.0.into(), 2.0.into(), 33.0.into()]);
        let mut state = SortState::new();
        state.handle_sort("v");

        assert_eq!(column_text(&sort_rows(&data, &state), "v"), vec!["2", "10", "33"]);

        state.handle_sort("v");
        assert_eq!(column_text(&sort_rows(&data, &state), "v"), vec!["33", "10", "2"]);
    }

    #[test]
    fn test_string_sort() {
        let data = rows("v", vec!["banana".into(), "Apple".into(), "cherry".into()]);
        let mut state = SortState::new();
        state.handle_sort("v");

        assert_eq!(
            column_text(&sort_rows(&data, &state), "v"),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_string_sort_is_locale_aware() {
        let data = rows(
            "v",
            vec!["Zeta".into(), "~draft".into(), "Émile".into(), "eve".into()],
        );
        let mut state = SortState::new();
        state.handle_sort("v");

        assert_eq!(
            column_text(&sort_rows(&data, &state), "v"),
            vec!["~draft", "Émile", "eve", "Zeta"]
        );
    }

    #[test]
    fn test_numeric_strings_sort_as_text() {
        let data = rows("v", vec!["10".into(), "2".into(), "33".into()]);
        let mut state = SortState::new();
        state.handle_sort("v");

        assert_eq!(column_text(&sort_rows(&data, &state), "v"), vec!["10", "2", "33"]);
    }

    #[test]
    fn test_mixed_types_fall_back_to_text() {
        let data = rows(
            "v",
            vec![10.0.into(), "15".into(), 2.0.into(), true.into(), CellValue::Null],
        );
        let mut state = SortState::new();
        state.handle_sort("v");

        // No panic, every row kept
        assert_eq!(sort_rows(&data, &state).len(), 5);
    }

    #[test]
    fn test_missing_values_sort_as_blank() {
        let data = vec![
            Row::new().with("name", "b"),
            Row::new(),
            Row::new().with("name", "a"),
        ];
        let mut state = SortState::new();
        state.handle_sort("name");

        assert_eq!(column_text(&sort_rows(&data, &state), "name"), vec!["", "a", "b"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let data: Vec<Row> = vec![
            Row::new().with("id", "first").with("v", 1.0),
            Row::new().with("id", "second").with("v", 0.5),
            Row::new().with("id", "third").with("v", 1.0),
        ];
        let mut state = SortState::new();
        state.handle_sort("v");
        assert_eq!(
            column_text(&sort_rows(&data, &state), "id"),
            vec!["second", "first", "third"]
        );

        state.handle_sort("v");
        assert_eq!(
            column_text(&sort_rows(&data, &state), "id"),
            vec!["first", "third", "second"]
        );
    }

    #[test]
    fn test_unsorted_passthrough() {
        let data = rows("v", vec![3.0.into(), 1.0.into(), 2.0.into()]);
        let sorted = sort_rows(&data, &SortState::new());

        assert_eq!(column_text(&sorted, "v"), vec!["3", "1", "2"]);
        for (original, view) in data.iter().zip(sorted) {
            assert!(std::ptr::eq(original, view));
        }
    }
}
