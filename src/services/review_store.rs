use crate::error::ApiError;
use crate::models::Review;
use async_trait::async_trait;
use colour_engine::WarningKey;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for per-palette review state
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Mark a warning as reviewed. Re-marking keeps the original timestamp.
    async fn mark_reviewed(&self, palette_id: &str, key: &WarningKey) -> Result<Review, ApiError>;

    /// Remove a review. Returns false when the key was not reviewed.
    async fn unmark(&self, palette_id: &str, key: &str) -> Result<bool, ApiError>;

    /// All reviews for a palette, ordered by key
    async fn list(&self, palette_id: &str) -> Result<Vec<Review>, ApiError>;

    /// Reviewed keys for a palette, in the form the report expects
    async fn reviewed_keys(&self, palette_id: &str) -> Result<HashSet<String>, ApiError> {
        Ok(self
            .list(palette_id)
            .await?
            .into_iter()
            .map(|review| review.key)
            .collect())
    }
}

/// In-memory review storage, lost on restart
pub struct InMemoryReviewStore {
    palettes: Arc<RwLock<HashMap<String, BTreeMap<String, Review>>>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self {
            palettes: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryReviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewStore for InMemoryReviewStore {
    async fn mark_reviewed(&self, palette_id: &str, key: &WarningKey) -> Result<Review, ApiError> {
        let mut palettes = self.palettes.write().await;
        let reviews = palettes.entry(palette_id.to_string()).or_default();
        let review = reviews
            .entry(key.to_string())
            .or_insert_with(|| {
                tracing::info!(palette_id, key = %key, "Warning marked as reviewed");
                Review::new(key)
            })
            .clone();
        Ok(review)
    }

    async fn unmark(&self, palette_id: &str, key: &str) -> Result<bool, ApiError> {
        let mut palettes = self.palettes.write().await;
        let Some(reviews) = palettes.get_mut(palette_id) else {
            return Ok(false);
        };
        let removed = reviews.remove(key).is_some();
        if reviews.is_empty() {
            palettes.remove(palette_id);
        }
        if removed {
            tracing::info!(palette_id, key, "Review removed");
        }
        Ok(removed)
    }

    async fn list(&self, palette_id: &str) -> Result<Vec<Review>, ApiError> {
        let palettes = self.palettes.read().await;
        Ok(palettes
            .get(palette_id)
            .map(|reviews| reviews.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colour_engine::report::WarningKind;
    use colour_engine::CvdType;

    fn key(first: &str) -> WarningKey {
        WarningKey::new(WarningKind::Contrast, first, "bg", CvdType::Protanopia)
    }

    #[tokio::test]
    async fn test_mark_and_list() {
        let store = InMemoryReviewStore::new();

        store.mark_reviewed("brand", &key("b")).await.unwrap();
        store.mark_reviewed("brand", &key("a")).await.unwrap();

        let reviews = store.list("brand").await.unwrap();
        let keys: Vec<_> = reviews.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["contrast:a:bg:protanopia", "contrast:b:bg:protanopia"]);
        assert_eq!(reviews[0].cvd, CvdType::Protanopia);
    }

    #[tokio::test]
    async fn test_mark_is_idempotent() {
        let store = InMemoryReviewStore::new();

        let first = store.mark_reviewed("brand", &key("a")).await.unwrap();
        let second = store.mark_reviewed("brand", &key("a")).await.unwrap();

        assert_eq!(first.reviewed_at, second.reviewed_at);
        assert_eq!(store.list("brand").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_palettes_are_isolated() {
        let store = InMemoryReviewStore::new();
        store.mark_reviewed("brand", &key("a")).await.unwrap();

        assert!(store.list("other").await.unwrap().is_empty());
        assert!(store.reviewed_keys("other").await.unwrap().is_empty());
        assert!(store
            .reviewed_keys("brand")
            .await
            .unwrap()
            .contains("contrast:a:bg:protanopia"));
    }

    #[tokio::test]
    async fn test_unmark() {
        let store = InMemoryReviewStore::new();
        store.mark_reviewed("brand", &key("a")).await.unwrap();

        assert!(store.unmark("brand", "contrast:a:bg:protanopia").await.unwrap());
        assert!(!store.unmark("brand", "contrast:a:bg:protanopia").await.unwrap());
        assert!(!store.unmark("missing", "contrast:a:bg:protanopia").await.unwrap());
        assert!(store.list("brand").await.unwrap().is_empty());
    }
}
