//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and hand
//! entity models to the service layer, which converts them to domain models.

pub mod owner;
pub mod pet;

use sea_orm::{
    sea_query::{Expr, SimpleExpr},
    ColumnTrait, IdenStatic, Value,
};

/// Case-sensitive prefix match on a text column.
///
/// Compares the leading characters directly rather than using `LIKE`, so `%` and `_`
/// in `prefix` match only themselves and letter case must agree.
fn starts_with<C: ColumnTrait>(column: C, prefix: &str) -> SimpleExpr {
    Expr::cust_with_values(
        format!("substr(\"{}\", 1, ?) = ?", column.as_str()),
        [
            Value::from(prefix.chars().count() as i64),
            Value::from(prefix.to_string()),
        ],
    )
}

#[cfg(test)]
mod test;
