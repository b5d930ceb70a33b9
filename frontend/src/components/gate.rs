//! Entry gate screen.
//!
//! The gate exists to collect a user gesture before the soundtrack is
//! allowed to play. The button is clickable before the audio has
//! finished buffering; entering early just starts playback with
//! whatever has loaded.

use leptos::*;

use crate::config::TAGLINE;
use crate::types::entry_label;

#[component]
pub fn GateScreen(
    audio_ready: Signal<bool>,
    #[prop(into)] on_enter: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="screen gate">
            <h1 class="tagline glow">{TAGLINE}</h1>

            <button class="enter-button glow" on:click=move |_| on_enter.call(())>
                <span class="enter-label">
                    {move || entry_label(audio_ready.get())}
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" class="enter-arrow">
                        <path d="M13.5 4.5l6 7.5-6 7.5m-9-15h9"/>
                    </svg>
                </span>
            </button>

            <p class="gate-hint">"(Click above to enter the website)"</p>
        </section>
    }
}
