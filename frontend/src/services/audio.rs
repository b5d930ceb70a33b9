//! Looping soundtrack resource.
//!
//! Wraps the DOM audio element as an owned resource: acquired when the
//! landing view mounts, released when it unmounts. Release runs in
//! `Drop`, so every exit path pauses the element and detaches the
//! readiness listener.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, HtmlAudioElement};

use crate::services::js_error_message;
use crate::types::{AppError, AppResult};

/// Fires once the browser has buffered enough to play without stalling.
const READY_EVENT: &str = "canplaythrough";

/// Handle to the looping soundtrack.
///
/// Clones share the same underlying element; the element is paused and
/// the readiness listener removed when the last clone is dropped.
#[derive(Clone)]
pub struct AudioPlayer {
    inner: Rc<Inner>,
}

struct Inner {
    element: HtmlAudioElement,
    ready_listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AudioPlayer {
    /// Construct the track, register a one-shot readiness subscription
    /// and start buffering.
    ///
    /// `on_ready` is delivered at most once. The browser removes the
    /// listener after first delivery; `Drop` removes it regardless, so
    /// a never-fired callback cannot outlive the handle.
    pub fn preload(src: &str, on_ready: impl FnMut() + 'static) -> AppResult<Self> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|e| AppError::Playback(js_error_message(&e)))?;
        element.set_loop(true);

        let listener = Closure::wrap(Box::new(on_ready) as Box<dyn FnMut()>);
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        element
            .add_event_listener_with_callback_and_add_event_listener_options(
                READY_EVENT,
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| AppError::Playback(js_error_message(&e)))?;
        element.load();

        Ok(Self {
            inner: Rc::new(Inner {
                element,
                ready_listener: RefCell::new(Some(listener)),
            }),
        })
    }

    /// Request playback.
    ///
    /// Resolves once the browser accepts the request; rejects under its
    /// autoplay policy (or on a codec problem). Callers treat rejection
    /// as non-fatal.
    pub async fn play(&self) -> AppResult<()> {
        let promise = self
            .inner
            .element
            .play()
            .map_err(|e| AppError::Playback(js_error_message(&e)))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| AppError::Playback(js_error_message(&e)))
    }

    /// Set the element's mute flag.
    pub fn set_muted(&self, muted: bool) {
        self.inner.element.set_muted(muted);
    }

    /// Invert the element's mute flag and return the new value.
    pub fn toggle_muted(&self) -> bool {
        let muted = !self.inner.element.muted();
        self.inner.element.set_muted(muted);
        muted
    }

    /// Current mute flag, read back from the element.
    pub fn is_muted(&self) -> bool {
        self.inner.element.muted()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let _ = self.element.pause();
        if let Some(listener) = self.ready_listener.borrow_mut().take() {
            let _ = self
                .element
                .remove_event_listener_with_callback(READY_EVENT, listener.as_ref().unchecked_ref());
        }
    }
}
