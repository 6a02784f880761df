use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub redis: RedisConfig,
    pub cache: CacheConfig,
    pub reports: ReportConfig,
    pub ai: Option<AiConfig>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Base URL prefixing report and chart links handed back to clients.
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub statcan_url: String,
    pub bankofcanada_url: String,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
}

/// Narrative-provider credentials, resolved once at startup and handed to the
/// client at construction. The rest of the service never reads provider keys.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: Provider,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Groq,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("WATCHDOG_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("WATCHDOG_API_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .unwrap_or(8080),
                public_base_url: env::var("WATCHDOG_PUBLIC_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            },
            upstream: UpstreamConfig {
                statcan_url: env::var("STATCAN_API_URL")
                    .unwrap_or_else(|_| "https://www150.statcan.gc.ca/t1/wds/rest".to_string()),
                bankofcanada_url: env::var("BANK_OF_CANADA_API_URL")
                    .unwrap_or_else(|_| "https://www.bankofcanada.ca/valet".to_string()),
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL")
                    .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            },
            cache: CacheConfig {
                enabled: env::var("CACHE_ENABLED")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .unwrap_or(true),
                ttl_seconds: env::var("CACHE_TTL_SECONDS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .unwrap_or(300),
            },
            reports: ReportConfig {
                output_dir: env::var("REPORTS_DIR")
                    .unwrap_or_else(|_| "reports".to_string())
                    .into(),
            },
            ai: AiConfig::from_env(),
        })
    }
}

impl AiConfig {
    /// OpenAI wins over Groq when both keys are present; neither means
    /// report generation is disabled while data endpoints keep working.
    fn from_env() -> Option<Self> {
        if let Ok(key) = env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                return Some(AiConfig {
                    provider: Provider::OpenAi,
                    api_key: key,
                    model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string()),
                });
            }
        }
        if let Ok(key) = env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                return Some(AiConfig {
                    provider: Provider::Groq,
                    api_key: key,
                    model: env::var("GROQ_MODEL")
                        .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
                });
            }
        }
        None
    }
}
