pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod report;

use cache::Cache;
use config::Config;
use fetch::DataFetcher;
use report::NarrativeClient;

pub struct AppState {
    pub fetcher: DataFetcher,
    pub cache: Cache,
    pub narrative: Option<NarrativeClient>,
    pub config: Config,
}
