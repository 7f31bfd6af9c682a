//! Substring filtering over the configured columns.

use crate::config::Column;
use crate::row::Row;

/// Normalizes a raw query into its matchable form (lower-cased).
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase()
}

/// Returns the global indices of the rows matching `query`, in raw order.
///
/// `query` must already be normalized. An empty query keeps every row. A
/// row matches when any candidate field's display string contains the
/// query, case-insensitively. Candidate fields are the filterable columns;
/// if the schema marks every column non-filterable, all columns become
/// candidates so a misconfigured schema never silently disables search.
pub fn filter_indices(rows: &[Row], query: &str, columns: &[Column]) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let filterable: Vec<&str> = columns
        .iter()
        .filter(|c| c.filterable)
        .map(|c| c.field.as_str())
        .collect();
    let candidates: Vec<&str> = if filterable.is_empty() {
        columns.iter().map(|c| c.field.as_str()).collect()
    } else {
        filterable
    };

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            candidates
                .iter()
                .any(|field| row.display(field).to_lowercase().contains(query))
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![Column::new("name"), Column::new("age")]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row::new().set("name", "Bob").set("age", 30),
            Row::new().set("name", "Al").set("age", 25),
            Row::new().set("name", "Cy").set("age", 40),
        ]
    }

    #[test]
    fn test_empty_query_keeps_all_rows_in_order() {
        assert_eq!(filter_indices(&rows(), "", &columns()), vec![0, 1, 2]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert_eq!(filter_indices(&rows(), "al", &columns()), vec![1]);
        assert_eq!(filter_indices(&rows(), "b", &columns()), vec![0]);
    }

    #[test]
    fn test_matches_numeric_fields_as_text() {
        assert_eq!(filter_indices(&rows(), "40", &columns()), vec![2]);
    }

    #[test]
    fn test_non_filterable_columns_are_skipped() {
        let columns = vec![Column::new("name"), Column::new("age").filterable(false)];
        assert_eq!(filter_indices(&rows(), "30", &columns), Vec::<usize>::new());
    }

    #[test]
    fn test_all_columns_non_filterable_falls_back_to_all() {
        let columns = vec![
            Column::new("name").filterable(false),
            Column::new("age").filterable(false),
        ];
        assert_eq!(filter_indices(&rows(), "al", &columns), vec![1]);
    }

    #[test]
    fn test_missing_fields_never_match() {
        let columns = vec![Column::new("title")];
        assert_eq!(filter_indices(&rows(), "al", &columns), Vec::<usize>::new());
    }
}
