//! Hero Section Component
//!
//! Static landing section introducing the application.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let features = [
        ("📄", "Document Upload"),
        ("🔍", "Natural Language Search"),
        ("📊", "Ranked Results"),
    ];

    view! {
        <div class="hero-container flex items-center justify-center min-h-screen px-6">
            <div class="hero-content max-w-3xl text-center space-y-6">
                <h1 class="hero-title text-4xl font-bold text-[var(--text-primary)]">
                    "Intelligent Utility-Based Information Retrieval"
                </h1>

                <p class="hero-subtitle text-xl text-[var(--accent)]">
                    "Using TF-IDF and BM25 Algorithms"
                </p>

                <p class="hero-description text-[var(--text-muted)] leading-relaxed">
                    "An advanced document retrieval system powered by Natural Language \
                     Processing and Information Retrieval techniques. Upload your documents \
                     and search through them using intelligent ranking algorithms that \
                     understand context and relevance."
                </p>

                <div class="hero-features flex items-center justify-center gap-8 pt-4">
                    {features
                        .into_iter()
                        .map(|(icon, text)| {
                            view! {
                                <div class="feature-item flex items-center gap-2">
                                    <span class="feature-icon text-2xl">{icon}</span>
                                    <span class="feature-text text-sm text-[var(--text-muted)]">
                                        {text}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
