//! Document Upload Component
//!
//! Drag-and-drop and file-picker staging area. Only display names are
//! collected client-side; no content is read or transmitted. Unsupported
//! files are dropped without feedback — the absence of an error surface
//! here is intentional product behavior.

use leptos::ev;
use leptos::prelude::*;

use crate::services::staging_service::use_staging_state;

/// Names carried by a browser file list, in list order.
fn file_names(list: Option<web_sys::FileList>) -> Vec<String> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| file.name())
        .collect()
}

#[component]
pub fn DocumentUpload() -> impl IntoView {
    let staging = use_staging_state();

    // The enter/over handlers must suppress the browser default, or the
    // drop opens the file in a new tab instead of reaching on_drop.
    let on_drag_enter = move |evt: ev::DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        staging.is_dragging.set(true);
    };

    let on_drag_over = move |evt: ev::DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
    };

    let on_drag_leave = move |evt: ev::DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        staging.is_dragging.set(false);
    };

    let on_drop = move |evt: ev::DragEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        staging.is_dragging.set(false);
        let names = file_names(evt.data_transfer().and_then(|transfer| transfer.files()));
        staging.stage_batch(names);
    };

    // The accept attribute on the input is advisory; the staging filter
    // remains the authoritative guard (drag-drop bypasses accept entirely).
    let on_file_input = move |evt: ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&evt);
        staging.stage_batch(file_names(input.files()));
    };

    view! {
        <div class="upload-container flex items-center justify-center min-h-screen px-6">
            <div class="upload-content w-full max-w-2xl space-y-6">
                <h2 class="section-title text-3xl font-bold text-center text-[var(--text-primary)]">
                    "Upload Documents"
                </h2>
                <p class="section-description text-center text-[var(--text-muted)]">
                    "Upload your documents (PDF, DOCX, TXT) to build your searchable document collection"
                </p>

                <div
                    class=move || format!(
                        "upload-area flex flex-col items-center gap-3 p-12 rounded-xl border-2 border-dashed transition-colors {}",
                        if staging.is_dragging.get() {
                            "border-[var(--accent)] bg-[var(--accent)]/10"
                        } else {
                            "border-[var(--border-subtle)] bg-[var(--bg-surface)]"
                        }
                    )
                    on:dragenter=on_drag_enter
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <div class="upload-icon text-4xl">"📁"</div>
                    <p class="upload-text text-[var(--text-primary)]">
                        {move || {
                            if staging.is_dragging.get() {
                                "Drop files here"
                            } else {
                                "Drag and drop files here"
                            }
                        }}
                    </p>
                    <p class="upload-hint text-sm text-[var(--text-muted)]">"or"</p>

                    <label
                        for="file-input"
                        class="upload-button px-6 py-2 rounded-lg bg-[var(--accent)] text-white cursor-pointer hover:opacity-90 transition-opacity"
                    >
                        "Browse Files"
                    </label>
                    <input
                        id="file-input"
                        type="file"
                        multiple=true
                        accept=".pdf,.docx,.txt"
                        class="hidden"
                        on:change=on_file_input
                    />

                    <p class="upload-formats text-xs text-[var(--text-muted)]">
                        "Supported: PDF, DOCX, TXT"
                    </p>
                </div>

                <Show when=move || !staging.staged_files.get().is_empty()>
                    <div class="uploaded-files p-4 rounded-xl bg-[var(--bg-surface)] border border-[var(--border-subtle)]">
                        <h3 class="files-title text-sm font-medium text-[var(--text-primary)] mb-2">
                            {move || format!("Uploaded Files ({})", staging.staged_files.get().len())}
                        </h3>
                        <ul class="files-list space-y-1">
                            {move || {
                                staging
                                    .staged_files
                                    .get()
                                    .into_iter()
                                    .map(|file_name| {
                                        view! {
                                            <li class="file-item flex items-center gap-2 text-sm text-[var(--text-muted)]">
                                                <span class="file-icon">"📄"</span>
                                                <span class="file-name">{file_name}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
