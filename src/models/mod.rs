pub mod config;
pub mod review;

pub use config::{AnalysisConfig, AppConfig, CacheConfig};
pub use review::Review;
