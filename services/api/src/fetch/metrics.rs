use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The canonical metric set. Every variant is both filterable and fetchable;
/// unknown metric strings are rejected at filter validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    GdpGrowth,
    InflationRate,
    EmploymentGrowth,
    DebtToGdp,
    BondYields,
}

pub const VALID_METRICS: &[&str] = &[
    "gdp_growth",
    "inflation_rate",
    "employment_growth",
    "debt_to_gdp",
    "bond_yields",
];

/// Which upstream serves a metric: the Statistics Canada cube API (keyed by
/// product id) or the Bank of Canada Valet API (keyed by series id).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricRoute {
    Cube { product_id: &'static str },
    Series { series_id: &'static str },
}

impl Metric {
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "gdp_growth" => Ok(Metric::GdpGrowth),
            "inflation_rate" => Ok(Metric::InflationRate),
            "employment_growth" => Ok(Metric::EmploymentGrowth),
            "debt_to_gdp" => Ok(Metric::DebtToGdp),
            "bond_yields" => Ok(Metric::BondYields),
            _ => Err(ApiError::Validation(format!(
                "metric must be one of: {}",
                VALID_METRICS.join(", ")
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::GdpGrowth => "gdp_growth",
            Metric::InflationRate => "inflation_rate",
            Metric::EmploymentGrowth => "employment_growth",
            Metric::DebtToGdp => "debt_to_gdp",
            Metric::BondYields => "bond_yields",
        }
    }

    pub fn route(self) -> MetricRoute {
        match self {
            Metric::GdpGrowth => MetricRoute::Cube { product_id: "36-10-0434-01" },
            Metric::EmploymentGrowth => MetricRoute::Cube { product_id: "14-10-0287-01" },
            Metric::DebtToGdp => MetricRoute::Cube { product_id: "36-10-0580-01" },
            Metric::InflationRate => MetricRoute::Series { series_id: "CPALTT01" },
            Metric::BondYields => MetricRoute::Series { series_id: "V122543" },
        }
    }
}
