use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use watchdog_api::cache::Cache;
use watchdog_api::config::Config;
use watchdog_api::fetch::DataFetcher;
use watchdog_api::handlers;
use watchdog_api::report::NarrativeClient;
use watchdog_api::AppState;

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health::handler))
        .service(
            web::scope("/api/v1")
                .route("/data", web::get().to(handlers::data::handler))
                .route("/generate-report", web::post().to(handlers::report::handler)),
        );
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("watchdog_api=info,actix_web=info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!(
        "Starting Watchdog API server on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Statistics Canada API: {}", config.upstream.statcan_url);
    tracing::info!("Bank of Canada API: {}", config.upstream.bankofcanada_url);
    tracing::info!("Cache enabled: {}", config.cache.enabled);

    // Shared HTTP client for upstream calls
    let http = reqwest::Client::new();

    // Create Redis-backed cache
    let cache = Cache::connect(&config.redis, config.cache.clone())
        .await
        .expect("Failed to connect to Redis");

    // Narrative provider is optional; data endpoints work without it
    let narrative = config.ai.clone().map(|ai| NarrativeClient::new(http.clone(), ai));
    if narrative.is_none() {
        tracing::warn!("No narrative provider configured; report generation is disabled");
    }

    let fetcher = DataFetcher::new(http, config.upstream.clone());

    // Create shared application state
    let state = web::Data::new(AppState {
        fetcher,
        cache,
        narrative,
        config: config.clone(),
    });

    let host = config.server.host.clone();
    let port = config.server.port;

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .bind((host, port))?
    .run()
    .await
}
