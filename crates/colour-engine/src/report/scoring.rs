//! Palette-wide accessibility report.
//!
//! Scores are whole percentages. Reviewed issues stay in the report for
//! display but no longer count against the scores.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::colour::{hex_to_rgb, Rgb};
use crate::contrast::{contrast_ratio_rgb, wcag_level, WcagLevel, AA_NORMAL};
use crate::cvd::{
    default_simulator, Category, CvdType, SimulationCache, Simulator, Swatch,
    DEFAULT_DISTINGUISH_THRESHOLD,
};

use super::palette::PaletteColour;
use super::warning::{WarningKey, WarningKind};

/// Weight of the contrast score in the overall score when roles exist.
const CONTRAST_WEIGHT: f64 = 0.6;
const COLOURBLIND_WEIGHT: f64 = 0.4;

/// Tunables for [`accessibility_report`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReportOptions {
    /// Minimum simulated distance between same-category colours
    pub distinguish_threshold: f64,
    /// Ratio drop that flags a still-passing pair as degraded
    pub degradation_margin: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            distinguish_threshold: DEFAULT_DISTINGUISH_THRESHOLD,
            degradation_margin: 1.0,
        }
    }
}

/// A text-on-background pair with its unsimulated contrast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContrastPair {
    pub text_id: String,
    pub background_id: String,
    pub text: String,
    pub background: String,
    pub ratio: f64,
    pub level: WcagLevel,
    /// Meets AA for normal text
    pub passes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum SimulatedIssueKind {
    /// Passes AA normally, fails it under simulation
    NewlyFails,
    /// Still passes, but lost more than the degradation margin
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SimulatedContrastIssue {
    pub key: String,
    pub cvd: CvdType,
    pub kind: SimulatedIssueKind,
    pub text_id: String,
    pub background_id: String,
    pub original_ratio: f64,
    pub simulated_ratio: f64,
    pub reviewed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DistinguishIssue {
    pub key: String,
    pub cvd: CvdType,
    pub category: Category,
    pub first_id: String,
    pub second_id: String,
    pub distance: f64,
    pub reviewed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccessibilityReport {
    pub overall_score: u8,
    /// Share of text/background pairs meeting AA (100 with no pairs)
    pub contrast_score: u8,
    pub colourblind_score: u8,
    /// True when any colour has a role
    pub roles_assigned: bool,
    pub contrast_pairs: Vec<ContrastPair>,
    pub simulated_contrast_issues: Vec<SimulatedContrastIssue>,
    pub distinguish_issues: Vec<DistinguishIssue>,
    /// Issues (of either kind) matched by a reviewed key
    pub reviewed_count: usize,
}

fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}

fn text_background_pairs(colours: &[PaletteColour]) -> Vec<(&PaletteColour, &PaletteColour)> {
    colours
        .iter()
        .filter(|c| c.is_text())
        .flat_map(move |text| {
            colours
                .iter()
                .filter(move |bg| bg.is_background() && bg.id != text.id)
                .map(move |bg| (text, bg))
        })
        .collect()
}

impl<C: SimulationCache> Simulator<C> {
    /// Build an accessibility report for a palette.
    ///
    /// `reviewed` holds warning keys (see [`WarningKey`]) the user has
    /// acknowledged.
    pub fn accessibility_report(
        &self,
        colours: &[PaletteColour],
        reviewed: &HashSet<String>,
        options: &ReportOptions,
    ) -> AccessibilityReport {
        let roles_assigned = colours.iter().any(|c| c.role.is_some());
        let pairs = text_background_pairs(colours);

        let contrast_pairs: Vec<ContrastPair> = pairs
            .iter()
            .map(|(text, bg)| {
                let ratio = contrast_ratio_rgb(hex_to_rgb(&text.hex), hex_to_rgb(&bg.hex));
                ContrastPair {
                    text_id: text.id.clone(),
                    background_id: bg.id.clone(),
                    text: text.hex.clone(),
                    background: bg.hex.clone(),
                    ratio,
                    level: wcag_level(ratio, false),
                    passes: ratio >= AA_NORMAL,
                }
            })
            .collect();

        let mut simulated_contrast_issues = Vec::new();
        for cvd in CvdType::COMMON {
            let simulated: HashMap<&str, Rgb> = colours
                .iter()
                .filter(|c| c.role.is_some())
                .map(|c| (c.hex.as_str(), self.simulate_rgb(&c.hex, cvd)))
                .collect();
            let simulated_rgb = |hex: &str| {
                simulated
                    .get(hex)
                    .copied()
                    .unwrap_or_else(|| self.simulate_rgb(hex, cvd))
            };
            for ((text, bg), pair) in pairs.iter().zip(&contrast_pairs) {
                let simulated_ratio =
                    contrast_ratio_rgb(simulated_rgb(&text.hex), simulated_rgb(&bg.hex));
                let kind = if pair.ratio >= AA_NORMAL && simulated_ratio < AA_NORMAL {
                    SimulatedIssueKind::NewlyFails
                } else if simulated_ratio >= AA_NORMAL
                    && pair.ratio - simulated_ratio > options.degradation_margin
                {
                    SimulatedIssueKind::Degraded
                } else {
                    continue;
                };
                let key = WarningKey::new(WarningKind::Contrast, &text.id, &bg.id, cvd).to_string();
                simulated_contrast_issues.push(SimulatedContrastIssue {
                    reviewed: reviewed.contains(&key),
                    key,
                    cvd,
                    kind,
                    text_id: text.id.clone(),
                    background_id: bg.id.clone(),
                    original_ratio: pair.ratio,
                    simulated_ratio,
                });
            }
        }

        let mut categories: BTreeMap<Category, Vec<Swatch>> = BTreeMap::new();
        for colour in colours {
            if let Some(category) = &colour.category {
                categories
                    .entry(category.clone())
                    .or_default()
                    .push(Swatch::new(colour.id.clone(), colour.hex.clone()));
            }
        }
        let by_type = self
            .category_accessibility(&categories, options.distinguish_threshold)
            .by_type;

        let distinguish_issues: Vec<DistinguishIssue> = by_type
            .into_iter()
            .flat_map(move |(cvd, result)| {
                result.problematic_pairs.into_iter().map(move |pair| {
                    let key = WarningKey::new(
                        WarningKind::Distinguish,
                        &pair.first.id,
                        &pair.second.id,
                        cvd,
                    )
                    .to_string();
                    DistinguishIssue {
                        reviewed: reviewed.contains(&key),
                        key,
                        cvd,
                        category: pair.category,
                        first_id: pair.first.id,
                        second_id: pair.second.id,
                        distance: pair.distance,
                    }
                })
            })
            .collect();

        let contrast_issue_types: BTreeSet<CvdType> = simulated_contrast_issues
            .iter()
            .filter(|i| !i.reviewed)
            .map(|i| i.cvd)
            .collect();
        let distinguish_issue_types: BTreeSet<CvdType> = distinguish_issues
            .iter()
            .filter(|i| !i.reviewed)
            .map(|i| i.cvd)
            .collect();
        let total_types = CvdType::COMMON.len();
        let issue_types = contrast_issue_types.len().max(distinguish_issue_types.len());
        let colourblind_score = percent(total_types - issue_types, total_types);

        let passing = contrast_pairs.iter().filter(|p| p.passes).count();
        let contrast_score = percent(passing, contrast_pairs.len());

        let overall_score = if roles_assigned {
            (contrast_score as f64 * CONTRAST_WEIGHT + colourblind_score as f64 * COLOURBLIND_WEIGHT)
                .round() as u8
        } else {
            colourblind_score
        };

        let reviewed_count = simulated_contrast_issues.iter().filter(|i| i.reviewed).count()
            + distinguish_issues.iter().filter(|i| i.reviewed).count();

        tracing::debug!(
            colours = colours.len(),
            contrast_pairs = contrast_pairs.len(),
            simulated_issues = simulated_contrast_issues.len(),
            distinguish_issues = distinguish_issues.len(),
            overall_score,
            "Built accessibility report"
        );

        AccessibilityReport {
            overall_score,
            contrast_score,
            colourblind_score,
            roles_assigned,
            contrast_pairs,
            simulated_contrast_issues,
            distinguish_issues,
            reviewed_count,
        }
    }
}

/// [`Simulator::accessibility_report`] on the shared simulator.
pub fn accessibility_report(
    colours: &[PaletteColour],
    reviewed: &HashSet<String>,
    options: &ReportOptions,
) -> AccessibilityReport {
    default_simulator().accessibility_report(colours, reviewed, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::report::Role;

    fn sim() -> Simulator {
        Simulator::with_capacity(256)
    }

    fn category(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    #[test]
    fn test_empty_palette_scores_full() {
        let report = sim().accessibility_report(&[], &HashSet::new(), &ReportOptions::default());
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.contrast_score, 100);
        assert_eq!(report.colourblind_score, 100);
        assert!(!report.roles_assigned);
        assert!(report.contrast_pairs.is_empty());
    }

    #[test]
    fn test_contrast_pairs_exclude_self() {
        let colours = vec![
            PaletteColour::new("ink", "#111111").with_role(Role::Both),
            PaletteColour::new("paper", "#ffffff").with_role(Role::Background),
            PaletteColour::new("faint", "#cccccc").with_role(Role::Text),
        ];
        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());

        let ids: Vec<(&str, &str)> = report
            .contrast_pairs
            .iter()
            .map(|p| (p.text_id.as_str(), p.background_id.as_str()))
            .collect();
        assert_eq!(ids, vec![("ink", "paper"), ("faint", "ink"), ("faint", "paper")]);

        // ink/paper and faint/ink pass; faint/paper fails
        assert_eq!(report.contrast_score, 67);
        assert!(report.roles_assigned);
    }

    #[test]
    fn test_distinguish_issue_keys_and_review() {
        let status = category("status");
        let colours = vec![
            PaletteColour::new("error", "#c86464").in_category(status.clone()),
            PaletteColour::new("ok", "#8cc839").in_category(status),
        ];

        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());
        let keys: Vec<&str> = report.distinguish_issues.iter().map(|i| i.key.as_str()).collect();
        assert!(keys.contains(&"distinguish:error:ok:deuteranopia"), "{keys:?}");
        assert!(report.colourblind_score < 100);
        assert_eq!(report.overall_score, report.colourblind_score);

        // Reviewing every issue restores the score but keeps the issues
        let reviewed: HashSet<String> = keys.iter().map(|k| k.to_string()).collect();
        let again = sim().accessibility_report(&colours, &reviewed, &ReportOptions::default());
        assert_eq!(again.colourblind_score, 100);
        assert_eq!(again.distinguish_issues.len(), report.distinguish_issues.len());
        assert!(again.distinguish_issues.iter().all(|i| i.reviewed));
        assert_eq!(again.reviewed_count, keys.len());
    }

    #[test]
    fn test_uncategorised_colours_are_not_compared() {
        let colours = vec![
            PaletteColour::new("a", "#c86464"),
            PaletteColour::new("b", "#8cc839"),
        ];
        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());
        assert!(report.distinguish_issues.is_empty());
        assert_eq!(report.colourblind_score, 100);
    }

    #[test]
    fn test_simulated_contrast_newly_fails() {
        // Red on black passes normally but not once reduced to greys
        let colours = vec![
            PaletteColour::new("red", "#ff0000").with_role(Role::Text),
            PaletteColour::new("black", "#000000").with_role(Role::Background),
        ];
        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());
        assert_eq!(report.contrast_score, 100);

        let issue = report
            .simulated_contrast_issues
            .iter()
            .find(|i| i.cvd == CvdType::Achromatopsia)
            .expect("achromatopsia issue");
        assert_eq!(issue.kind, SimulatedIssueKind::NewlyFails);
        assert_eq!(issue.key, "contrast:red:black:achromatopsia");
        assert!(issue.simulated_ratio < AA_NORMAL);
        assert!(report.colourblind_score < 100);
        assert!(report.overall_score < 100);
    }

    #[test]
    fn test_degraded_pairs_respect_margin() {
        let colours = vec![
            PaletteColour::new("t", "#00ff00").with_role(Role::Text),
            PaletteColour::new("b", "#000000").with_role(Role::Background),
        ];
        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());
        assert!(report
            .simulated_contrast_issues
            .iter()
            .any(|i| i.kind == SimulatedIssueKind::Degraded));

        let lenient = ReportOptions {
            degradation_margin: 100.0,
            ..ReportOptions::default()
        };
        let report = sim().accessibility_report(&colours, &HashSet::new(), &lenient);
        assert!(report
            .simulated_contrast_issues
            .iter()
            .all(|i| i.kind == SimulatedIssueKind::NewlyFails));
    }

    #[test]
    fn test_overall_blends_scores_when_roles_assigned() {
        let colours = vec![
            PaletteColour::new("red", "#ff0000").with_role(Role::Text),
            PaletteColour::new("black", "#000000").with_role(Role::Background),
        ];
        let report = sim().accessibility_report(&colours, &HashSet::new(), &ReportOptions::default());
        let expected = (report.contrast_score as f64 * 0.6 + report.colourblind_score as f64 * 0.4).round() as u8;
        assert_eq!(report.overall_score, expected);
    }
}
