//! Top-level landing view.
//!
//! Renders one of two mutually exclusive screens (gate vs. main) and
//! mediates every user-triggered side effect: playback start, mute
//! toggling and the clipboard copy. All view state and the audio
//! resource live here and nowhere else.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::{GateScreen, MuteButton, TokenScreen, VideoBackdrop};
use crate::config::{AUDIO_SRC, CONTRACT_ADDRESS, COPIED_RESET_MS};
use crate::services::{copy_text, AudioPlayer};
use crate::types::LandingState;

#[component]
pub fn LandingView() -> impl IntoView {
    let state = create_rw_signal(LandingState::new());

    // Audio is acquired at mount and released on unmount; dropping the
    // handle pauses the element and detaches the readiness listener.
    let audio = store_value(None::<AudioPlayer>);
    match AudioPlayer::preload(AUDIO_SRC, move || state.update(|s| s.mark_audio_ready())) {
        Ok(player) => audio.set_value(Some(player)),
        Err(e) => log::error!("Audio preload failed: {}", e),
    }

    // Pending acknowledgment reset. Replacing the handle cancels the
    // previous timer, so the toast window always measures from the
    // latest successful copy.
    let reset_timer = store_value(None::<Timeout>);

    on_cleanup(move || {
        audio.set_value(None);
        reset_timer.set_value(None);
    });

    // Gate activation: propagate the current mute flag, request
    // playback, then switch screens. An autoplay rejection is logged
    // and never blocks the transition.
    let on_enter = move |_| {
        let player = audio.with_value(|a| a.clone());
        spawn_local(async move {
            if let Some(player) = player {
                player.set_muted(state.with_untracked(|s| s.muted));
                if let Err(e) = player.play().await {
                    log::warn!("Autoplay blocked: {}", e);
                }
            }
            state.update(|s| s.enter());
        });
    };

    // No-op when the audio resource is gone.
    let on_toggle_mute = move |_| {
        if let Some(muted) = audio.with_value(|a| a.as_ref().map(AudioPlayer::toggle_muted)) {
            state.update(|s| s.set_muted(muted));
        }
    };

    let on_copy = move |_| {
        spawn_local(async move {
            match copy_text(CONTRACT_ADDRESS).await {
                Ok(()) => {
                    state.update(|s| s.acknowledge_copy());
                    let timer = Timeout::new(COPIED_RESET_MS, move || {
                        state.update(|s| s.clear_copy());
                    });
                    reset_timer.set_value(Some(timer));
                }
                Err(e) => log::error!("Copy failed: {}", e),
            }
        });
    };

    let started = move || state.with(|s| s.started);

    view! {
        <div class="stage">
            <VideoBackdrop/>

            <Show when=started fallback=|| view! { }>
                <MuteButton
                    muted=Signal::derive(move || state.with(|s| s.muted))
                    on_toggle=on_toggle_mute
                />
            </Show>

            <Show
                when=started
                fallback=move || view! {
                    <GateScreen
                        audio_ready=Signal::derive(move || state.with(|s| s.audio_ready))
                        on_enter=on_enter
                    />
                }
            >
                <TokenScreen
                    copied=Signal::derive(move || state.with(|s| s.copied))
                    on_copy=on_copy
                />
            </Show>

            <div class="vignette"></div>
        </div>
    }
}
