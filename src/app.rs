use leptos::prelude::*;

use crate::components::document_upload::DocumentUpload;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::results_preview::ResultsPreview;
use crate::components::search_section::SearchSection;
use crate::services::navigation_service::{provide_navigation_state, SectionId};
use crate::services::staging_service::provide_staging_state;

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_navigation_state();
    provide_staging_state();

    view! {
        <div class="app min-h-screen bg-[var(--bg-deep)] text-[var(--text-primary)]">
            // Sticky navigation, highlight driven by scroll position
            <Navbar />

            <main class="main-content pt-14">
                <section id=SectionId::Home.as_str() class="section">
                    <Hero />
                </section>

                <section id=SectionId::Upload.as_str() class="section">
                    <DocumentUpload />
                </section>

                <section id=SectionId::Search.as_str() class="section">
                    <SearchSection />
                </section>

                <section id=SectionId::Results.as_str() class="section">
                    <ResultsPreview />
                </section>
            </main>
        </div>
    }
}
