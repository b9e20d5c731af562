use chrono::{DateTime, Utc};
use colour_engine::report::WarningKind;
use colour_engine::{CvdType, WarningKey};
use serde::Serialize;
use utoipa::ToSchema;

/// An acknowledged accessibility warning for one palette
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Review {
    /// Warning key, `{kind}:{first}:{second}:{cvd}`
    pub key: String,
    pub kind: WarningKind,
    pub cvd: CvdType,
    #[schema(value_type = String, format = DateTime)]
    pub reviewed_at: DateTime<Utc>,
}

impl Review {
    pub fn new(key: &WarningKey) -> Self {
        Self {
            key: key.to_string(),
            kind: key.kind,
            cvd: key.cvd,
            reviewed_at: Utc::now(),
        }
    }
}
