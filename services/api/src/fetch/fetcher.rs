use reqwest::Client;
use serde_json::{json, Value};

use crate::config::UpstreamConfig;
use crate::fetch::{transform, FetchError, Jurisdiction, Metric, MetricRoute};
use crate::models::filter::DataFilter;
use crate::models::pagination::{paginate, PaginatedResponse, PaginationParams};
use crate::models::records::{BudgetRecord, ObservationRecord};

/// Resolves a filter to an upstream endpoint, issues the call, and normalizes
/// the response into canonical records wrapped in a page envelope.
#[derive(Clone)]
pub struct DataFetcher {
    http: Client,
    upstream: UpstreamConfig,
}

impl DataFetcher {
    pub fn new(http: Client, upstream: UpstreamConfig) -> Self {
        Self { http, upstream }
    }

    pub async fn fetch_budget(
        &self,
        filter: &DataFilter,
        pagination: &PaginationParams,
    ) -> Result<PaginatedResponse<BudgetRecord>, FetchError> {
        let jurisdiction = Jurisdiction::resolve(filter.province.as_deref())?;
        let url = format!("{}/budget", jurisdiction.base_url());

        let mut query: Vec<(&str, String)> = vec![
            ("offset", pagination.offset().to_string()),
            ("limit", pagination.page_size.to_string()),
        ];
        if let Some(level) = filter.government_level {
            query.push(("government_level", level.as_str().to_string()));
        }
        if let Some(province) = &filter.province {
            query.push(("province", province.clone()));
        }
        if let Some(range) = &filter.date_range {
            if let Some(start) = range.start_date {
                query.push(("start_date", start.to_string()));
            }
            if let Some(end) = range.end_date {
                query.push(("end_date", end.to_string()));
            }
        }
        if let Some(sort_by) = &pagination.sort_by {
            query.push(("sort_by", sort_by.clone()));
            query.push(("sort_order", pagination.sort_order.as_str().to_string()));
        }

        tracing::debug!("Fetching budget data for '{}' from {}", jurisdiction.key(), url);
        let response = self.http.get(&url).query(&query).send().await?;
        let body = read_body(response, "budget").await?;

        let (records, total) = transform::budget_records(&body)?;
        Ok(paginate(records, total, pagination))
    }

    pub async fn fetch_metric(
        &self,
        metric: Metric,
        filter: &DataFilter,
        pagination: &PaginationParams,
    ) -> Result<PaginatedResponse<ObservationRecord>, FetchError> {
        let route = metric.route();
        let response = match route {
            MetricRoute::Cube { product_id } => {
                let url = format!("{}/getCubeData", self.upstream.statcan_url);
                let mut payload = json!({
                    "productId": product_id,
                    "dimensionAtObservation": "AllDimensions",
                    "offset": pagination.offset(),
                    "limit": pagination.page_size,
                });
                if let Some(range) = &filter.date_range {
                    if let Some(start) = range.start_date {
                        payload["startDate"] = json!(start.to_string());
                    }
                    if let Some(end) = range.end_date {
                        payload["endDate"] = json!(end.to_string());
                    }
                }

                tracing::debug!("Fetching {} from {}", metric.as_str(), url);
                self.http.post(&url).json(&payload).send().await?
            }
            MetricRoute::Series { series_id } => {
                let url = format!("{}/observations/{}", self.upstream.bankofcanada_url, series_id);
                let mut query: Vec<(&str, String)> = vec![
                    ("offset", pagination.offset().to_string()),
                    ("limit", pagination.page_size.to_string()),
                    ("format", "json".to_string()),
                ];
                if let Some(range) = &filter.date_range {
                    if let Some(start) = range.start_date {
                        query.push(("start_date", start.to_string()));
                    }
                    if let Some(end) = range.end_date {
                        query.push(("end_date", end.to_string()));
                    }
                }

                tracing::debug!("Fetching {} from {}", metric.as_str(), url);
                self.http.get(&url).query(&query).send().await?
            }
        };

        let body = read_body(response, metric.as_str()).await?;
        let (records, total) = match route {
            MetricRoute::Cube { .. } => transform::cube_records(&body)?,
            MetricRoute::Series { .. } => transform::series_records(&body)?,
        };
        Ok(paginate(records, total, pagination))
    }
}

async fn read_body(response: reqwest::Response, what: &str) -> Result<Value, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Upstream {
            message: format!("Failed to fetch {} data from external API", what),
            status: Some(status.as_u16()),
        });
    }
    Ok(response.json::<Value>().await?)
}
