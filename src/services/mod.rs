pub mod analysis;
pub mod review_store;

pub use analysis::{AnalysisService, CacheStatus};
pub use review_store::{InMemoryReviewStore, ReviewStore};
