use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::filter::DataFilter;
use crate::models::pagination::{default_page, default_page_size, PaginationParams, SortOrder};

/// Raw query string for `GET /api/v1/data`. Everything arrives as strings and
/// goes through filter validation before any request leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataQuery {
    pub government_level: String,
    #[serde(default)]
    pub province: Option<String>,
    pub metric: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub cache_bypass: bool,
}

impl DataQuery {
    pub fn filter(&self) -> Result<DataFilter, ApiError> {
        DataFilter::from_raw(
            Some(&self.government_level),
            self.province.as_deref(),
            Some(&self.metric),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )
    }

    pub fn pagination(&self) -> Result<PaginationParams, ApiError> {
        let params = PaginationParams {
            page: self.page,
            page_size: self.page_size,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Query-string half of `POST /api/v1/generate-report`: date range and
/// pagination. Level and province come from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl ReportQuery {
    pub fn pagination(&self) -> Result<PaginationParams, ApiError> {
        let params = PaginationParams {
            page: self.page,
            page_size: self.page_size,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order,
        };
        params.validate()?;
        Ok(params)
    }
}

pub const REPORT_TYPES: &[&str] = &["Summary", "Full Report", "Specific Section"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    pub government_level: String,
    #[serde(default)]
    pub province: Option<String>,
    pub report_type: String,
    pub user_name: String,
    pub company_email: String,
}

impl ReportRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if !REPORT_TYPES.contains(&self.report_type.as_str()) {
            return Err(ApiError::Validation(format!(
                "report_type must be one of: {}",
                REPORT_TYPES.join(", ")
            )));
        }
        if self.user_name.trim().is_empty() {
            return Err(ApiError::Validation("user_name must not be empty".to_string()));
        }
        if !self.company_email.contains('@') {
            return Err(ApiError::Validation(
                "company_email must be a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReportRequest {
        ReportRequest {
            government_level: "Federal".to_string(),
            province: None,
            report_type: "Summary".to_string(),
            user_name: "Jordan Li".to_string(),
            company_email: "jordan@example.com".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_report_type() {
        let mut req = request();
        req.report_type = "Digest".to_string();
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("Full Report"));
    }

    #[test]
    fn rejects_blank_name_and_bad_email() {
        let mut req = request();
        req.user_name = "   ".to_string();
        assert!(req.validate().is_err());

        let mut req = request();
        req.company_email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn data_query_builds_filter_and_pagination() {
        let query = DataQuery {
            government_level: "Province".to_string(),
            province: Some("Ontario".to_string()),
            metric: "inflation_rate".to_string(),
            start_date: None,
            end_date: None,
            page: 2,
            page_size: 50,
            sort_by: Some("date".to_string()),
            sort_order: SortOrder::Desc,
            cache_bypass: false,
        };

        let filter = query.filter().unwrap();
        assert_eq!(filter.province.as_deref(), Some("Ontario"));

        let pagination = query.pagination().unwrap();
        assert_eq!(pagination.offset(), 50);
        assert_eq!(pagination.sort_order, SortOrder::Desc);
    }
}
