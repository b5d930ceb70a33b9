//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **View State** - the landing page state machine
//! - **Labels** - conditional UI strings
//! - **Error Types** - frontend error handling

use std::fmt;

// =============================================================================
// View State
// =============================================================================

/// Transient view state of the landing page.
///
/// Owned by the landing view through a single signal and scoped to its
/// lifetime. Nothing here is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    /// Whether the entry gate has been passed. One-way: there is no
    /// transition back to the gate.
    pub started: bool,
    /// Preload completion flag, monotonic false -> true.
    pub audio_ready: bool,
    /// Mirror of the audio element's mute flag.
    pub muted: bool,
    /// Transient acknowledgment after a successful copy.
    pub copied: bool,
}

impl LandingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass the gate. Idempotent.
    pub fn enter(&mut self) {
        self.started = true;
    }

    /// Record that enough audio has buffered to play through.
    pub fn mark_audio_ready(&mut self) {
        self.audio_ready = true;
    }

    /// Mirror the audio element's mute flag.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Show the copy acknowledgment.
    pub fn acknowledge_copy(&mut self) {
        self.copied = true;
    }

    /// Hide the copy acknowledgment.
    pub fn clear_copy(&mut self) {
        self.copied = false;
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Entry button label.
///
/// The gate is clickable either way; only the label tracks readiness.
pub fn entry_label(audio_ready: bool) -> &'static str {
    if audio_ready {
        "Enter"
    } else {
        "Loading audio…"
    }
}

/// Accessible label / tooltip for the mute toggle.
pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "Unmute"
    } else {
        "Mute"
    }
}

/// Copy button label while the acknowledgment is up.
pub fn copy_label(copied: bool) -> &'static str {
    if copied {
        "Copied"
    } else {
        "Copy CA"
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Both kinds are recoverable: they are logged and the effect they
/// guarded simply does not happen.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The environment refused to start audio playback.
    Playback(String),
    /// Clipboard access was denied or is unavailable.
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Playback(msg) => write!(f, "Playback error: {}", msg),
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_is_one_way() {
        let mut state = LandingState::new();
        assert!(!state.started);

        state.enter();
        assert!(state.started);

        // No subsequent action brings the gate back.
        state.enter();
        state.mark_audio_ready();
        state.set_muted(true);
        state.acknowledge_copy();
        state.clear_copy();
        assert!(state.started);
    }

    #[test]
    fn test_audio_ready_is_monotonic() {
        let mut state = LandingState::new();
        assert_eq!(entry_label(state.audio_ready), "Loading audio…");

        state.mark_audio_ready();
        assert!(state.audio_ready);
        assert_eq!(entry_label(state.audio_ready), "Enter");

        // Firing twice changes nothing.
        state.mark_audio_ready();
        assert!(state.audio_ready);
    }

    #[test]
    fn test_mute_toggle_symmetry() {
        let mut state = LandingState::new();
        let original = state.muted;

        state.set_muted(!state.muted);
        assert_eq!(state.muted, !original);
        assert_eq!(mute_label(state.muted), "Unmute");

        state.set_muted(!state.muted);
        assert_eq!(state.muted, original);
        assert_eq!(mute_label(state.muted), "Mute");
    }

    #[test]
    fn test_copy_acknowledgment_lifecycle() {
        let mut state = LandingState::new();
        assert_eq!(copy_label(state.copied), "Copy CA");

        state.acknowledge_copy();
        assert!(state.copied);
        assert_eq!(copy_label(state.copied), "Copied");

        state.clear_copy();
        assert!(!state.copied);
        assert_eq!(copy_label(state.copied), "Copy CA");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Playback("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "Playback error: NotAllowedError");

        let err = AppError::Clipboard("denied".to_string());
        assert_eq!(err.to_string(), "Clipboard error: denied");
    }
}
