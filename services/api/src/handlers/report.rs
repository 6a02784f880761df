use actix_web::{web, HttpResponse};
use futures::try_join;
use serde_json::json;

use crate::error::ApiError;
use crate::fetch::Metric;
use crate::models::filter::DataFilter;
use crate::models::request::{ReportQuery, ReportRequest};
use crate::models::response::ReportOutput;
use crate::report::charts::{GraphKind, GraphSpec};
use crate::report::{markdown, tables};
use crate::AppState;

pub async fn handler(
    state: web::Data<AppState>,
    query: web::Query<ReportQuery>,
    body: web::Json<ReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    request.validate()?;

    let filter = DataFilter::from_raw(
        Some(&request.government_level),
        request.province.as_deref(),
        None,
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )?;
    let pagination = query.pagination()?;

    let narrative_client = state.narrative.as_ref().ok_or_else(|| {
        ApiError::Internal(
            "Narrative provider is not configured; set OPENAI_API_KEY or GROQ_API_KEY".to_string(),
        )
    })?;

    // The six upstream calls are independent; run them concurrently and
    // fail fast so no partial report survives a broken source.
    let fetcher = &state.fetcher;
    let (budget, gdp, inflation, employment, debt_to_gdp, bond_yields) = try_join!(
        fetcher.fetch_budget(&filter, &pagination),
        fetcher.fetch_metric(Metric::GdpGrowth, &filter, &pagination),
        fetcher.fetch_metric(Metric::InflationRate, &filter, &pagination),
        fetcher.fetch_metric(Metric::EmploymentGrowth, &filter, &pagination),
        fetcher.fetch_metric(Metric::DebtToGdp, &filter, &pagination),
        fetcher.fetch_metric(Metric::BondYields, &filter, &pagination),
    )?;

    let Some(budget_record) = budget.items.first() else {
        return Err(ApiError::NotFound {
            message: "No budget data found for the specified criteria".to_string(),
            details: json!({
                "government_level": request.government_level,
                "province": request.province,
            }),
        });
    };

    let region = request.province.clone().unwrap_or_else(|| "Canada".to_string());
    let narrative = narrative_client
        .generate(&request.government_level, &region)
        .await?;

    let graphs = [
        GraphSpec::net_debt(budget_record),
        GraphSpec::from_observations(GraphKind::GdpGrowth, &gdp.items),
        GraphSpec::from_observations(GraphKind::InflationRate, &inflation.items),
        GraphSpec::from_observations(GraphKind::EmploymentGrowth, &employment.items),
        GraphSpec::from_observations(GraphKind::DebtToGdp, &debt_to_gdp.items),
        GraphSpec::from_observations(GraphKind::BondYields, &bond_yields.items),
    ];
    let base = &state.config.server.public_base_url;
    let graph_urls: Vec<String> = graphs.iter().map(|g| g.image_url(base)).collect();
    let table_rows = tables::fiscal_table(budget_record);

    let title = format!("Financial Report: {} - {}", request.government_level, region);
    let contents = markdown::render(
        &markdown::ReportContext {
            title: &title,
            narrative: &narrative,
            user_name: &request.user_name,
            company_email: &request.company_email,
        },
        &graph_urls,
        &table_rows,
    );
    let path = markdown::write_report(&state.config.reports.output_dir, &title, &contents)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(ReportOutput {
        file_path: format!("{}/reports/{}", base.trim_end_matches('/'), file_name),
        graphs: graph_urls,
        tables: table_rows,
    }))
}
