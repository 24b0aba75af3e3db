//! Integration tests for default and unique names

mod common;

use common::{aggregate, column, measure};
use semexpr::{
    default_name, default_name_of, index_of_expr, is_measure, sequence_equal, unique_name,
    AggregateFunction, Literal, NamedExpr, QueryExpr,
};

#[test]
fn test_sum_of_column_label() {
    let expr = aggregate(AggregateFunction::Sum, column("warehouse", "Sales", "Amount"));
    assert_eq!(default_name_of(&expr), "Sum(Sales.Amount)");
    assert_eq!(default_name(Some(&expr), None), "Sum(Sales.Amount)");
}

#[test]
fn test_labels_ignore_schema_name() {
    assert_eq!(
        default_name_of(&column("warehouse", "Sales", "Amount")),
        default_name_of(&column("crm", "Sales", "Amount"))
    );
    assert_eq!(default_name_of(&measure("crm", "Customer", "Churn")), "Customer.Churn");
}

#[test]
fn test_projection_names_stay_unique() {
    let mut projections: Vec<NamedExpr> = Vec::new();
    let exprs = [
        column("warehouse", "Sales", "Amount"),
        column("warehouse", "Sales", "Amount"),
        aggregate(AggregateFunction::Sum, column("warehouse", "Sales", "Amount")),
        QueryExpr::Literal(Literal::Int(1)),
        QueryExpr::Literal(Literal::String("x".to_string())),
        column("crm", "Sales", "Amount"),
    ];

    for expr in exprs {
        let name = unique_name(&projections, &expr);
        assert!(projections.iter().all(|n| n.name != name), "{} collides", name);
        projections.push(NamedExpr::new(expr, name));
    }

    let names: Vec<&str> = projections.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Sales.Amount",
            "Sales.Amount1",
            "Sum(Sales.Amount)",
            "select",
            "select1",
            "Sales.Amount2",
        ]
    );
}

#[test]
fn test_unique_name_with_no_context_is_default_name() {
    for expr in [
        column("warehouse", "Store", "Region"),
        measure("warehouse", "Sales", "Revenue"),
        QueryExpr::Literal(Literal::Null),
    ] {
        assert_eq!(unique_name(&[], &expr), default_name_of(&expr));
    }
}

#[test]
fn test_projection_lookup_and_measures() {
    let amount = column("warehouse", "Sales", "Amount");
    let revenue = measure("warehouse", "Sales", "Revenue");
    let sum = aggregate(AggregateFunction::Sum, amount.clone());
    let projection = vec![amount.clone(), revenue.clone(), sum.clone()];

    assert_eq!(index_of_expr(&projection, &sum), Some(2));
    assert_eq!(index_of_expr(&projection, &aggregate(AggregateFunction::Avg, amount.clone())), None);
    assert!(sequence_equal(&projection, &[amount.clone(), revenue.clone(), sum.clone()]));
    assert!(!sequence_equal(&projection, &[revenue, amount.clone(), sum]));

    let measures: Vec<bool> = projection.iter().map(is_measure).collect();
    assert_eq!(measures, vec![false, true, true]);
}
