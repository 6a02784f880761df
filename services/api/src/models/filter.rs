use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::fetch::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernmentLevel {
    Federal,
    Province,
}

impl GovernmentLevel {
    pub fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "Federal" => Ok(GovernmentLevel::Federal),
            "Province" => Ok(GovernmentLevel::Province),
            other => Err(ApiError::Validation(format!(
                "government_level must be either 'Federal' or 'Province', got '{}'",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GovernmentLevel::Federal => "Federal",
            GovernmentLevel::Province => "Province",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A validated data filter. Construction through `from_raw` is the only way
/// handlers obtain one, so an invalid combination never reaches the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFilter {
    pub government_level: Option<GovernmentLevel>,
    pub province: Option<String>,
    pub metric: Option<Metric>,
    pub date_range: Option<DateRange>,
}

impl DataFilter {
    /// Validation rules, applied in order:
    /// 1. government_level must be "Federal" or "Province" when present
    /// 2. province is required when government_level is "Province"
    /// 3. metric must belong to the supported set when present
    /// 4. end_date must not precede start_date
    pub fn from_raw(
        government_level: Option<&str>,
        province: Option<&str>,
        metric: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Self, ApiError> {
        let government_level = government_level.map(GovernmentLevel::parse).transpose()?;

        let province = province
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        if government_level == Some(GovernmentLevel::Province) && province.is_none() {
            return Err(ApiError::Validation(
                "province is required when government_level is 'Province'".to_string(),
            ));
        }

        let metric = metric.map(Metric::parse).transpose()?;

        let start_date = parse_date("start_date", start_date)?;
        let end_date = parse_date("end_date", end_date)?;
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(ApiError::Validation(
                    "end_date must be after start_date".to_string(),
                ));
            }
        }
        let date_range = (start_date.is_some() || end_date.is_some())
            .then_some(DateRange { start_date, end_date });

        Ok(Self {
            government_level,
            province,
            metric,
            date_range,
        })
    }
}

fn parse_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| {
            NaiveDate::parse_from_str(v, "%Y-%m-%d").map_err(|_| {
                ApiError::Validation(format!("{} must be a YYYY-MM-DD date, got '{}'", field, v))
            })
        })
        .transpose()
}
