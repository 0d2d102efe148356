//! Results Preview Component
//!
//! Card grid of search results. The data is a static fixture standing in
//! for the backend search response; the payload shape mirrors what the
//! retrieval API will eventually return.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::formatting::format_score;

/// One ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    pub document_name: String,
    pub snippet: String,
    pub relevance_score: f32,
    pub algorithm: String,
}

const MOCK_RESULTS_JSON: &str = include_str!("../../fixtures/mock_results.json");

/// Demonstration fixtures embedded at compile time.
pub fn mock_results() -> Vec<SearchResult> {
    serde_json::from_str(MOCK_RESULTS_JSON).unwrap_or_default()
}

#[component]
pub fn ResultsPreview() -> impl IntoView {
    let results = mock_results();
    let result_count = results.len();

    view! {
        <div class="results-container flex items-center justify-center min-h-screen px-6 py-16">
            <div class="results-content w-full max-w-5xl space-y-6">
                <h2 class="section-title text-3xl font-bold text-center text-[var(--text-primary)]">
                    "Search Results"
                </h2>
                <p class="section-description text-center text-[var(--text-muted)]">
                    "Documents ranked by relevance using TF-IDF and BM25 algorithms"
                </p>

                <div class="results-header flex items-center justify-between">
                    <p class="results-count text-sm text-[var(--text-primary)]">
                        {format!("Showing {} results", result_count)}
                    </p>
                    <p class="results-note text-xs text-[var(--text-muted)]">
                        "(Mock data for demonstration - UI only)"
                    </p>
                </div>

                <div class="results-grid grid grid-cols-1 md:grid-cols-2 gap-4">
                    {results
                        .into_iter()
                        .map(|result| {
                            view! {
                                <div class="result-card p-5 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)] space-y-3">
                                    <div class="card-header flex justify-end">
                                        <div class="score-badge flex items-center gap-2 px-3 py-1 rounded-full bg-[var(--accent)]/20 text-[var(--accent)]">
                                            <span class="score-label text-xs font-mono">
                                                {result.algorithm}
                                            </span>
                                            <span class="score-value text-sm font-semibold">
                                                {format!("{}%", format_score(result.relevance_score))}
                                            </span>
                                        </div>
                                    </div>

                                    <h3 class="document-name font-medium text-[var(--text-primary)]">
                                        {result.document_name}
                                    </h3>

                                    <p class="document-snippet text-sm text-[var(--text-muted)] leading-relaxed">
                                        {result.snippet}
                                    </p>

                                    <div class="card-footer pt-2 border-t border-[var(--border-subtle)]">
                                        <span class="rank-badge text-xs text-[var(--text-muted)]">
                                            {format!("Rank #{}", result.id)}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || result_count == 0>
                    <div class="empty-results text-center py-12">
                        <p class="empty-text text-[var(--text-muted)]">
                            "No results found. Try a different search query."
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
