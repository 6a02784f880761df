pub mod redis;

pub use redis::Cache;
