//! Pill-style action controls for the main screen.

use leptos::*;

use crate::types::copy_label;

/// Outbound link, opened in a new browsing context without referrer.
#[component]
pub fn ActionLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a class="pill glow" href=href target="_blank" rel="noreferrer">
            {label}
        </a>
    }
}

/// Copy-to-clipboard trigger. The label flips to "Copied" while the
/// acknowledgment is up.
#[component]
pub fn CopyButton(
    copied: Signal<bool>,
    #[prop(into)] on_copy: Callback<()>,
) -> impl IntoView {
    view! {
        <button class="pill glow" on:click=move |_| on_copy.call(())>
            {move || copy_label(copied.get())}
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="pill-icon">
                <path d="M9 7a2 2 0 012-2h7a2 2 0 012 2v9a2 2 0 01-2 2h-7a2 2 0 01-2-2V7zm-4 4a2 2 0 012-2h1v2H7v7h7v-1h2v1a3 3 0 01-3 3H7a3 3 0 01-3-3v-7z"/>
            </svg>
        </button>
    }
}
