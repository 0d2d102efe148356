//! Search Section Component
//!
//! Controlled query input with a submit placeholder. The value is echoed
//! into a signal on every keystroke and forwarded unvalidated on submit —
//! any string, including the empty one, is a legal query. Wiring to the
//! retrieval backend happens elsewhere; submitting currently only logs.

use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn SearchSection() -> impl IntoView {
    let search_query = RwSignal::new(String::new());

    let on_input = move |evt: ev::Event| {
        search_query.set(event_target_value(&evt));
    };

    let on_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        // Placeholder until the backend search API exists.
        log::info!("Search query: {}", search_query.get_untracked());
    };

    view! {
        <div class="search-container flex items-center justify-center min-h-screen px-6">
            <div class="search-content w-full max-w-2xl space-y-6">
                <h2 class="section-title text-3xl font-bold text-center text-[var(--text-primary)]">
                    "Search Documents"
                </h2>
                <p class="section-description text-center text-[var(--text-muted)]">
                    "Enter your query in natural language to find relevant documents"
                </p>

                <form class="search-form" on:submit=on_submit>
                    <div class="search-wrapper flex gap-3">
                        <input
                            type="text"
                            class="search-input flex-1 px-4 py-3 bg-[var(--bg-elevated)] border border-[var(--border-subtle)] rounded-xl text-[var(--text-primary)] placeholder-[var(--text-muted)] focus:outline-none focus:border-[var(--accent)] transition-all"
                            placeholder="Search documents using natural language..."
                            prop:value=move || search_query.get()
                            on:input=on_input
                        />
                        <button
                            type="submit"
                            class="search-button flex items-center gap-2 px-6 py-3 rounded-xl bg-[var(--accent)] text-white hover:opacity-90 transition-opacity"
                        >
                            <span class="search-icon">"🔍"</span>
                            <span class="search-button-text">"Search"</span>
                        </button>
                    </div>
                </form>

                <div class="search-tips p-4 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)]">
                    <p class="tips-title text-sm font-medium text-[var(--text-primary)] mb-2">
                        "Search Tips:"
                    </p>
                    <ul class="tips-list list-disc list-inside space-y-1 text-sm text-[var(--text-muted)]">
                        <li>"Use natural language queries (e.g., \"machine learning algorithms\")"</li>
                        <li>"Results are ranked by relevance using TF-IDF and BM25"</li>
                        <li>"Try different phrasings for better results"</li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
