//! Transient acknowledgment banner after a successful copy.

use leptos::*;

#[component]
pub fn CopiedToast(copied: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || copied.get() fallback=|| view! { }>
            <div class="toast glow">"Contract address copied!"</div>
        </Show>
    }
}
