//! Palette accessibility reports
//!
//! Combines role-based contrast, contrast under simulation and
//! within-category distinguishability into one scored report. Warnings
//! carry a [`WarningKey`] so a caller can remember which ones a user has
//! reviewed.

mod palette;
mod scoring;
mod warning;

pub use palette::{PaletteColour, Role};
pub use scoring::{
    accessibility_report, AccessibilityReport, ContrastPair, DistinguishIssue, ReportOptions,
    SimulatedContrastIssue, SimulatedIssueKind,
};
pub use warning::{WarningKey, WarningKind};
