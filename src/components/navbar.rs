//! Navigation Bar Component
//!
//! Sticky navigation that highlights the active section and smooth-scrolls
//! to a section on click. The highlight follows the scroll position; a
//! click sets it optimistically instead of waiting for the animation to
//! land, so the clicked entry lights up immediately.

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::services::navigation_service::{use_navigation_state, NavEvent, SectionId};

/// Top edge of a section element within the document, queried live — the
/// layout layer owns these positions and they are never cached here.
fn section_top(section: SectionId) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(section.as_str())?;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(element.offset_top() as f64)
}

/// Smoothly align a section's top edge with the viewport top. Returns
/// whether the target element exists; a missing target is a no-op.
fn scroll_to_section(section: SectionId) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section.as_str()))
    else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = use_navigation_state();

    // Follow the scroll position for the navbar's lifetime. Registered
    // once here and removed in on_cleanup, so remounting never stacks
    // duplicate listeners.
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(offset) = window.scroll_y() {
            nav.apply(NavEvent::Scroll { offset }, section_top);
        }
    });
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }
    let on_scroll = SendWrapper::new(on_scroll);
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
    });

    // Fire the scroll effect, then assert the target optimistically. Scroll
    // readings during the animation may briefly disagree; the final reading
    // converges on the target. State is untouched when the target is absent.
    let navigate = move |target: SectionId| {
        if scroll_to_section(target) {
            nav.apply(NavEvent::Navigate { target }, section_top);
        }
    };

    view! {
        <nav class="navbar fixed top-0 left-0 right-0 z-50 bg-[var(--bg-surface)] border-b border-[var(--border-subtle)] backdrop-blur-sm">
            <div class="navbar-container max-w-6xl mx-auto flex items-center justify-between px-6 py-3">
                <div
                    class="navbar-brand cursor-pointer"
                    on:click=move |_| navigate(SectionId::Home)
                >
                    <span class="brand-text text-lg font-semibold text-[var(--text-primary)]">
                        "Intelligent Retrieval"
                    </span>
                </div>

                <ul class="navbar-menu flex items-center gap-2">
                    {SectionId::all()
                        .iter()
                        .map(|section| {
                            let section = *section;
                            let is_active = move || nav.active_section.get() == section;
                            view! {
                                <li>
                                    <button
                                        class=move || format!(
                                            "nav-link px-4 py-1.5 text-sm rounded-full transition-colors {}",
                                            if is_active() {
                                                "bg-[var(--accent)] text-white shadow-md"
                                            } else {
                                                "text-[var(--text-muted)] hover:text-[var(--text-primary)] hover:bg-[var(--bg-elevated)]"
                                            }
                                        )
                                        on:click=move |_| navigate(section)
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
