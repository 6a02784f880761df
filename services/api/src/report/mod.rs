pub mod charts;
pub mod markdown;
pub mod narrative;
pub mod tables;

pub use narrative::NarrativeClient;
