//! Projected expressions

use super::expr::QueryExpr;

/// An expression together with the name it is projected as
#[derive(Debug, Clone, PartialEq)]
pub struct NamedExpr {
    pub expr: QueryExpr,
    pub name: String,
}

impl NamedExpr {
    pub fn new(expr: QueryExpr, name: impl Into<String>) -> Self {
        Self {
            expr,
            name: name.into(),
        }
    }
}
