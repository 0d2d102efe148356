//! Document Staging Service
//!
//! Client-side accumulation of file names pending upload. Candidates
//! arrive from two sources — drag-drop and the file picker — and both
//! funnel through one extension filter. Nothing is read, transmitted,
//! or persisted; only display names are kept.

use leptos::prelude::*;

/// Extensions accepted for staging, matched case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Whether a file name carries a supported extension. The extension is
/// the substring after the last `.`; names without one are rejected.
pub fn is_supported_document(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Shared staging state.
#[derive(Clone, Copy)]
pub struct StagingState {
    /// Staged file names in arrival order. Append-only: no removal, no
    /// renaming, no deduplication — duplicates stay distinct by position.
    pub staged_files: RwSignal<Vec<String>>,
    /// Visual drag-over flag for the drop area.
    pub is_dragging: RwSignal<bool>,
}

impl StagingState {
    pub fn new() -> Self {
        Self {
            staged_files: RwSignal::new(Vec::new()),
            is_dragging: RwSignal::new(false),
        }
    }

    /// Append every supported name from `names`, preserving batch order
    /// after the existing entries. Unsupported names are dropped silently;
    /// a batch with no valid candidate leaves the signal untouched.
    pub fn stage_batch<I>(&self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let valid: Vec<String> = names
            .into_iter()
            .filter(|name| is_supported_document(name))
            .collect();
        if !valid.is_empty() {
            self.staged_files.update(|files| files.extend(valid));
        }
    }
}

impl Default for StagingState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_staging_state() {
    provide_context(StagingState::new());
}

pub fn use_staging_state() -> StagingState {
    expect_context::<StagingState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_extensions() {
        assert!(is_supported_document("notes.txt"));
        assert!(is_supported_document("report.pdf"));
        assert!(is_supported_document("thesis.docx"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_supported_document("report.PDF"));
        assert!(is_supported_document("Notes.TxT"));
        assert!(is_supported_document("a.DocX"));
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(!is_supported_document("image.png"));
        assert!(!is_supported_document("slides.pptx"));
        assert!(!is_supported_document("data.csv"));
    }

    #[test]
    fn rejects_names_without_extension() {
        assert!(!is_supported_document("README"));
        assert!(!is_supported_document(""));
    }

    #[test]
    fn only_the_last_dot_counts() {
        assert!(!is_supported_document("archive.tar.gz"));
        assert!(is_supported_document("report.final.pdf"));
        assert!(!is_supported_document("trailing.dot."));
    }

    #[test]
    fn dotfile_with_supported_extension_is_accepted() {
        assert!(is_supported_document(".txt"));
    }
}
