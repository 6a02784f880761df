use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub file_path: String,
    pub graphs: Vec<String>,
    pub tables: Vec<FiscalYearRow>,
}

/// One fiscal-summary table row, keyed the way report consumers expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiscalYearRow {
    #[serde(rename = "Fiscal Year")]
    pub fiscal_year: String,
    #[serde(rename = "Revenue")]
    pub revenue: String,
    #[serde(rename = "Expenses")]
    pub expenses: String,
    #[serde(rename = "Surplus/Deficit")]
    pub deficit: String,
}
