//! Formatting utilities for display

/// Format a 0.0–1.0 relevance score as a percentage with one decimal.
pub fn format_score(score: f32) -> String {
    format!("{:.1}", score * 100.0)
}
