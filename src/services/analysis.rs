//! CVD analysis backed by a simulator sized from configuration.

use colour_engine::cvd::{CategoryAccessibility, TypeAccessibility};
use colour_engine::{
    contrast_ratio_from_hex, AccessibilityReport, Category, CvdType, LightnessFix, PaletteColour,
    Simulator, Swatch,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::AnalysisConfig;

/// Simulation cache occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CacheStatus {
    pub size: usize,
    pub capacity: usize,
}

/// Owns the server's simulator so its cache is shared by every request
/// and isolated from the engine's process-wide default.
pub struct AnalysisService {
    simulator: Simulator,
    config: AnalysisConfig,
}

impl AnalysisService {
    pub fn new(config: AnalysisConfig, cache_capacity: usize) -> Self {
        tracing::debug!(cache_capacity, "Creating analysis service");
        Self {
            simulator: Simulator::with_capacity(cache_capacity),
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run `f` on the blocking thread pool.
    ///
    /// Palette-wide checks are quadratic in palette size.
    pub async fn run_blocking<T, F>(self: &Arc<Self>, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&AnalysisService) -> T + Send + 'static,
        T: Send + 'static,
    {
        let service = Arc::clone(self);
        tokio::task::spawn_blocking(move || f(&service))
            .await
            .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))
    }

    pub fn simulate(&self, hex: &str, cvd: CvdType) -> String {
        self.simulator.simulate(hex, cvd)
    }

    pub fn all_simulations(&self, hex: &str) -> BTreeMap<CvdType, String> {
        self.simulator.all_simulations(hex)
    }

    /// Contrast between two colours after simulating both
    pub fn simulated_ratio(&self, a: &str, b: &str, cvd: CvdType) -> f64 {
        contrast_ratio_from_hex(&self.simulate(a, cvd), &self.simulate(b, cvd))
    }

    pub fn simulated_distance(&self, a: &str, b: &str, cvd: CvdType) -> f64 {
        self.simulator.simulated_distance(a, b, cvd)
    }

    pub fn palette_check(
        &self,
        colours: &[String],
        threshold: Option<f64>,
    ) -> BTreeMap<CvdType, TypeAccessibility> {
        let threshold = threshold.unwrap_or(self.config.distinguish_threshold);
        self.simulator.palette_accessibility(colours, threshold)
    }

    pub fn category_check(
        &self,
        categories: &BTreeMap<Category, Vec<Swatch>>,
        threshold: Option<f64>,
    ) -> CategoryAccessibility {
        let threshold = threshold.unwrap_or(self.config.distinguish_threshold);
        self.simulator.category_accessibility(categories, threshold)
    }

    pub fn contrast_fix(
        &self,
        text: &str,
        background: &str,
        cvd: CvdType,
        target_ratio: Option<f64>,
    ) -> LightnessFix {
        let target_ratio = target_ratio.unwrap_or(self.config.target_ratio);
        self.simulator
            .suggest_contrast_fix(text, background, cvd, target_ratio)
    }

    pub fn distinguish_fix(
        &self,
        colour: &str,
        other: &str,
        cvd: CvdType,
        threshold: Option<f64>,
    ) -> Option<LightnessFix> {
        let threshold = threshold.unwrap_or(self.config.fix_threshold);
        self.simulator
            .suggest_distinguishable_fix(colour, other, cvd, threshold)
    }

    pub fn report(
        &self,
        palette_id: Option<&str>,
        colours: &[PaletteColour],
        reviewed: &HashSet<String>,
    ) -> AccessibilityReport {
        let report =
            self.simulator
                .accessibility_report(colours, reviewed, &self.config.report_options());

        tracing::info!(
            palette_id = palette_id.unwrap_or("-"),
            colours = colours.len(),
            overall_score = report.overall_score,
            contrast_issues = report.simulated_contrast_issues.len(),
            distinguish_issues = report.distinguish_issues.len(),
            reviewed = report.reviewed_count,
            "Accessibility report generated"
        );

        report
    }

    pub fn cache_status(&self) -> CacheStatus {
        CacheStatus {
            size: self.simulator.cache_size(),
            capacity: self.simulator.cache_capacity(),
        }
    }

    pub fn clear_cache(&self) {
        let cleared = self.simulator.cache_size();
        self.simulator.clear_cache();
        tracing::info!(cleared, "Simulation cache cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AnalysisService {
        AnalysisService::new(AnalysisConfig::default(), 8)
    }

    #[test]
    fn test_cache_is_bounded_by_config() {
        let service = service();
        for hex in ["#ff0000", "#00ff00", "#0000ff"] {
            service.all_simulations(hex);
        }

        let status = service.cache_status();
        assert_eq!(status.capacity, 8);
        assert_eq!(status.size, 8);

        service.clear_cache();
        assert_eq!(service.cache_status().size, 0);
    }

    #[test]
    fn test_defaults_come_from_config() {
        let config = AnalysisConfig {
            distinguish_threshold: 0.0,
            ..AnalysisConfig::default()
        };
        let service = AnalysisService::new(config, 8);

        // Nothing is closer than zero
        let checks = service.palette_check(&["#c86464".to_string(), "#8cc839".to_string()], None);
        assert!(checks.values().all(|check| check.accessible));

        let checks = service.palette_check(
            &["#c86464".to_string(), "#8cc839".to_string()],
            Some(20.0),
        );
        assert!(!checks[&CvdType::Deuteranopia].accessible);
    }

    #[tokio::test]
    async fn test_run_blocking() {
        let service = Arc::new(service());

        let hex = service
            .run_blocking(|s| s.simulate("#ff0000", CvdType::Achromatopsia))
            .await
            .unwrap();
        assert_eq!(hex, "#4c4c4c");
        assert_eq!(service.cache_status().size, 1);

        // A panicking task surfaces as a 500, not a dropped connection
        let result: Result<(), ApiError> = service
            .run_blocking(|_| panic!("analysis blew up"))
            .await;
        assert!(matches!(result, Err(ApiError::Internal(message)) if message.contains("failed")));
    }

    #[test]
    fn test_simulated_ratio_matches_simulation() {
        let service = service();
        let ratio = service.simulated_ratio("#ff0000", "#000000", CvdType::Achromatopsia);
        assert_eq!(ratio, contrast_ratio_from_hex("#4c4c4c", "#000000"));
    }
}
