//! Query parameter and result DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Every query result is wrapped as `{"value": ...}`
#[derive(Debug, Serialize)]
pub struct QueryValue<T> {
    pub value: T,
}

impl<T> QueryValue<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Dollar amount written as a JSON number
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Money(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] pub Decimal);

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct StatePath {
    #[validate(length(min = 1, max = 64))]
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct SeverityQuery {
    /// Range is checked by the query itself, which answers -1 when out of range
    pub min_severity: i64,
}
