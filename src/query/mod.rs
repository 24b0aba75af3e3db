//! Query expression types (noun module)

mod expr;
mod named;
mod visitor;

pub use expr::{
    QueryExpr, EntityRef, FieldRef, AggregationExpr, Literal, ArithmeticOp,
    FieldKind, FieldMetadata, FieldPattern, PatternField,
};
pub use named::NamedExpr;
pub use visitor::ExprVisitor;
