//! Mute toggle, rendered only once the gate has been passed.

use leptos::*;

use crate::types::mute_label;

#[component]
pub fn MuteButton(
    muted: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="mute-button glow"
            on:click=move |_| on_toggle.call(())
            aria-label=move || mute_label(muted.get())
            title=move || mute_label(muted.get())
        >
            <Show
                when=move || muted.get()
                fallback=|| view! {
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="mute-icon">
                        <path d="M3 9v6h4l5 5V4L7 9H3zm10.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.74 2.5-2.26 2.5-4.02zM14 3.23v2.06c3.39.49 6 3.39 6 6.71s-2.61 6.22-6 6.71v2.06c4.45-.52 8-4.28 8-8.77s-3.55-8.25-8-8.77z"/>
                    </svg>
                }
            >
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="mute-icon">
                    <path d="M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.31l2.5 2.5V12zM3 9v6h4l5 5V4L7 9H3zm15.73 11.73L3.27 5.27 4.73 3.8 20.2 19.27 18.73 20.73z"/>
                </svg>
            </Show>
        </button>
    }
}
