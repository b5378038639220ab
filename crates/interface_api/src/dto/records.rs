//! Record listing DTOs

use serde::Serialize;

use domain_analytics::DatasetSummary;

#[derive(Debug, Serialize)]
pub struct RecordList<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for RecordList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub records: DatasetSummary,
}
