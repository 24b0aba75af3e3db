//! Structural comparison over expression sequences

use crate::query::QueryExpr;

/// Index of the first expression structurally equal to `target`
pub fn index_of_expr(items: &[QueryExpr], target: &QueryExpr) -> Option<usize> {
    items.iter().position(|item| item == target)
}

/// Positional structural equality of two sequences
pub fn sequence_equal(x: &[QueryExpr], y: &[QueryExpr]) -> bool {
    if x.len() != y.len() {
        return false;
    }
    x.iter().zip(y).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> QueryExpr {
        QueryExpr::column(QueryExpr::entity("db", "Sales"), name)
    }

    #[test]
    fn test_index_of_expr_returns_first_match() {
        let items = vec![col("a"), col("b"), col("a")];
        assert_eq!(index_of_expr(&items, &col("a")), Some(0));
        assert_eq!(index_of_expr(&items, &col("b")), Some(1));
        assert_eq!(index_of_expr(&items, &col("c")), None);
        assert_eq!(index_of_expr(&[], &col("a")), None);
    }

    #[test]
    fn test_index_of_expr_is_structural() {
        // Same names under a different variant do not match
        let items = vec![QueryExpr::measure(QueryExpr::entity("db", "Sales"), "a")];
        assert_eq!(index_of_expr(&items, &col("a")), None);
        assert_eq!(
            index_of_expr(&items, &QueryExpr::measure(QueryExpr::entity("db", "Sales"), "a")),
            Some(0)
        );
    }

    #[test]
    fn test_sequence_equal() {
        assert!(sequence_equal(&[], &[]));
        assert!(sequence_equal(&[col("a"), col("b")], &[col("a"), col("b")]));
        assert!(!sequence_equal(&[col("a")], &[col("a"), col("b")]));
        assert!(!sequence_equal(&[col("a"), col("b")], &[col("b"), col("a")]));
        assert!(sequence_equal(&[col("a"), col("a")], &[col("a"), col("a")]));
    }
}
