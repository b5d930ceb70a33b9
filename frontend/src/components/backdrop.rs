//! Background layers.
//!
//! A muted, looping, inline-autoplaying video sits at the bottom of the
//! stack with a dark tint above it. Both ignore pointer events; the
//! screens render on top.

use leptos::*;

use crate::config::VIDEO_SRC;

#[component]
pub fn VideoBackdrop() -> impl IntoView {
    view! {
        <video
            class="backdrop-video"
            src=VIDEO_SRC
            autoplay=true
            muted=true
            loop=true
            playsinline=true
        ></video>
        <div class="tint-overlay"></div>
    }
}
