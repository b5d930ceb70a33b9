//! $NYMI - Frontend Rust/Leptos Application
//!
//! A WebAssembly single-page promotional site: an entry gate that
//! unlocks the soundtrack, then the main screen with the token name,
//! social links and a copy-to-clipboard contract address, layered over
//! a looping background video.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LandingView                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  VideoBackdrop (video + tint, lowest layers)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  GateScreen ──enter()──▶ TokenScreen                         │
//! │                          ├── ActionLink ×2                   │
//! │                          ├── CopyButton                      │
//! │                          └── CopiedToast                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MuteButton (overlay, only once started)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - fixed literals (token name, links, asset paths)
//! - [`types`] - view state machine, labels, error types
//! - [`components`] - UI components (screens, widgets, backdrop)
//! - [`services`] - audio resource and clipboard access

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // View state
    LandingState,
    // Labels
    entry_label, mute_label, copy_label,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 $NYMI - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=TOKEN_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=LandingView/>
            </Routes>
        </Router>
    }
}
