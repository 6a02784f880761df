use actix_web::{web, HttpResponse};

use crate::cache::Cache;
use crate::error::ApiError;
use crate::models::pagination::PaginatedResponse;
use crate::models::records::ObservationRecord;
use crate::models::request::DataQuery;
use crate::AppState;

pub async fn handler(
    state: web::Data<AppState>,
    query: web::Query<DataQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();

    // All validation happens before anything leaves the service.
    let filter = query.filter()?;
    let pagination = query.pagination()?;
    let metric = filter
        .metric
        .ok_or_else(|| ApiError::Validation("metric is required".to_string()))?;

    let cache_key = Cache::key("data", &serde_json::to_string(&query)?);
    if !query.cache_bypass {
        if let Some(cached) = state
            .cache
            .get::<PaginatedResponse<ObservationRecord>>(&cache_key)
            .await
        {
            tracing::debug!("data cache hit for {}", metric.as_str());
            return Ok(HttpResponse::Ok().json(cached));
        }
    }

    let page = state.fetcher.fetch_metric(metric, &filter, &pagination).await?;

    if !query.cache_bypass {
        state.cache.put(&cache_key, &page).await;
    }

    Ok(HttpResponse::Ok().json(page))
}
