use serde::{Deserialize, Serialize};

use crate::models::records::{BudgetRecord, ObservationRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    NetDebt,
    GdpGrowth,
    InflationRate,
    EmploymentGrowth,
    DebtToGdp,
    BondYields,
}

impl GraphKind {
    pub fn slug(self) -> &'static str {
        match self {
            GraphKind::NetDebt => "net_debt",
            GraphKind::GdpGrowth => "gdp_growth",
            GraphKind::InflationRate => "inflation_rate",
            GraphKind::EmploymentGrowth => "employment_growth",
            GraphKind::DebtToGdp => "debt_to_gdp",
            GraphKind::BondYields => "bond_yields",
        }
    }

    fn title(self) -> &'static str {
        match self {
            GraphKind::NetDebt => "Net Debt Over Time",
            GraphKind::GdpGrowth => "GDP Growth Rate",
            GraphKind::InflationRate => "Inflation Rate",
            GraphKind::EmploymentGrowth => "Employment Growth Rate",
            GraphKind::DebtToGdp => "Debt-to-GDP Ratio",
            GraphKind::BondYields => "Bond Yields",
        }
    }

    fn x_label(self) -> &'static str {
        match self {
            GraphKind::InflationRate => "Month",
            _ => "Year",
        }
    }

    fn y_label(self) -> &'static str {
        match self {
            GraphKind::NetDebt => "Net Debt (Billions CAD)",
            GraphKind::GdpGrowth => "GDP Growth (%)",
            GraphKind::InflationRate => "Inflation (%)",
            GraphKind::EmploymentGrowth => "Employment Growth (%)",
            GraphKind::DebtToGdp => "Debt-to-GDP (%)",
            GraphKind::BondYields => "Yield (%)",
        }
    }
}

/// What to draw, not how to draw it. The rendering service turns one of
/// these into `{slug}.png`; we only hand out the descriptor and the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    pub kind: GraphKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub periods: Vec<String>,
    pub values: Vec<f64>,
}

impl GraphSpec {
    fn new(kind: GraphKind, periods: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            x_label: kind.x_label().to_string(),
            y_label: kind.y_label().to_string(),
            periods,
            values,
        }
    }

    pub fn net_debt(record: &BudgetRecord) -> Self {
        Self::new(GraphKind::NetDebt, record.years.clone(), record.net_debt.clone())
    }

    pub fn from_observations(kind: GraphKind, records: &[ObservationRecord]) -> Self {
        Self::new(
            kind,
            records.iter().map(|r| r.date.clone()).collect(),
            records.iter().map(|r| r.value).collect(),
        )
    }

    pub fn image_url(&self, public_base_url: &str) -> String {
        format!(
            "{}/reports/{}.png",
            public_base_url.trim_end_matches('/'),
            self.kind.slug()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_debt_spec_uses_budget_series() {
        let record = BudgetRecord {
            years: vec!["2022-23".to_string(), "2023-24".to_string()],
            revenue: vec![413.3, 429.1],
            expenses: vec![448.2, 453.0],
            deficit: vec![-34.9, -23.9],
            net_debt: vec![1183.0, 1206.9],
        };

        let spec = GraphSpec::net_debt(&record);
        assert_eq!(spec.kind, GraphKind::NetDebt);
        assert_eq!(spec.periods, record.years);
        assert_eq!(spec.values, record.net_debt);
        assert_eq!(spec.y_label, "Net Debt (Billions CAD)");
    }

    #[test]
    fn observation_spec_derives_parallel_arrays() {
        let records = vec![
            ObservationRecord { date: "2023-01".to_string(), value: 5.9 },
            ObservationRecord { date: "2023-02".to_string(), value: 5.2 },
        ];

        let spec = GraphSpec::from_observations(GraphKind::InflationRate, &records);
        assert_eq!(spec.periods, vec!["2023-01", "2023-02"]);
        assert_eq!(spec.values, vec![5.9, 5.2]);
        assert_eq!(spec.x_label, "Month");
    }

    #[test]
    fn image_url_joins_base_without_double_slash() {
        let spec = GraphSpec::from_observations(GraphKind::GdpGrowth, &[]);
        assert_eq!(
            spec.image_url("http://localhost:8080/"),
            "http://localhost:8080/reports/gdp_growth.png"
        );
    }
}
