use serde::{Deserialize, Serialize};

/// One jurisdiction budget item, arrays parallel by fiscal year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub years: Vec<String>,
    pub revenue: Vec<f64>,
    pub expenses: Vec<f64>,
    pub deficit: Vec<f64>,
    pub net_debt: Vec<f64>,
}

/// One normalized data point, independent of which upstream produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub date: String,
    pub value: f64,
}
