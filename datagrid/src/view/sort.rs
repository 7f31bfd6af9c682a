//! Value comparison and sort state.

use std::cmp::Ordering;

use serde_json::Value;

use crate::row::{Row, display_value, numeric_value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Wire name of the direction ("asc" / "desc").
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Current sort of the view.
///
/// `field: None` means identity order: the filtered rows keep their raw
/// data order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: Direction,
}

impl SortState {
    /// The direction this state sorts `field` by, if it sorts it at all.
    pub fn direction_for(&self, field: &str) -> Option<Direction> {
        (self.field.as_deref() == Some(field)).then_some(self.direction)
    }
}

/// Ascending comparison of two field values.
///
/// If both values are numeric (JSON numbers, or strings parsing as finite
/// floats), they compare numerically. Otherwise both coerce to lower-cased
/// display strings (missing and null become empty) and compare as strings.
/// Total and panic-free for any pair of inputs.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    if let (Some(x), Some(y)) = (numeric_value(a), numeric_value(b)) {
        // Finite floats only, so total_cmp agrees with the numeric order.
        return x.total_cmp(&y);
    }
    let x = display_value(a).to_lowercase();
    let y = display_value(b).to_lowercase();
    x.cmp(&y)
}

/// Reorders `indices` (positions into `rows`) according to `sort`.
///
/// A stable sort: rows with equal keys keep their filtered order, and the
/// descending order is the exact reversal of the ascending comparison
/// rather than a separate codepath.
pub fn sort_indices(rows: &[Row], indices: &mut [usize], sort: &SortState) {
    let Some(field) = sort.field.as_deref() else {
        return;
    };
    let direction = sort.direction;
    indices.sort_by(|&a, &b| {
        let ord = compare_values(
            rows.get(a).and_then(|r| r.get(field)),
            rows.get(b).and_then(|r| r.get(field)),
        );
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_comparison() {
        assert_eq!(
            compare_values(Some(&json!(9)), Some(&json!(10))),
            Ordering::Less
        );
        // Lexicographic would say "9" > "10"; numeric strings stay numeric.
        assert_eq!(
            compare_values(Some(&json!("9")), Some(&json!("10"))),
            Ordering::Less
        );
    }

    #[test]
    fn test_string_comparison_is_case_insensitive() {
        assert_eq!(
            compare_values(Some(&json!("alice")), Some(&json!("BOB"))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&json!("Same")), Some(&json!("same"))),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_values_sort_as_empty() {
        assert_eq!(compare_values(None, Some(&json!("a"))), Ordering::Less);
        assert_eq!(compare_values(None, None), Ordering::Equal);
        assert_eq!(
            compare_values(Some(&Value::Null), None),
            Ordering::Equal
        );
    }

    #[test]
    fn test_mixed_types_fall_back_to_strings() {
        // One numeric, one not: both coerce to strings.
        assert_eq!(
            compare_values(Some(&json!(2)), Some(&json!("10x"))),
            Ordering::Greater
        );
    }

    #[test]
    fn test_desc_is_exact_negation() {
        let rows = vec![
            Row::new().set("n", 3),
            Row::new().set("n", 1),
            Row::new().set("n", 2),
        ];
        let mut asc: Vec<usize> = (0..rows.len()).collect();
        let mut desc = asc.clone();
        sort_indices(
            &rows,
            &mut asc,
            &SortState {
                field: Some("n".into()),
                direction: Direction::Asc,
            },
        );
        sort_indices(
            &rows,
            &mut desc,
            &SortState {
                field: Some("n".into()),
                direction: Direction::Desc,
            },
        );
        let reversed: Vec<usize> = asc.iter().rev().copied().collect();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_identity_order_without_field() {
        let rows = vec![Row::new().set("n", 3), Row::new().set("n", 1)];
        let mut indices = vec![0, 1];
        sort_indices(&rows, &mut indices, &SortState::default());
        assert_eq!(indices, vec![0, 1]);
    }
}
