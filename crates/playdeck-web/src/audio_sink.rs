//! Browser audio backend over an `HtmlAudioElement`.

use playdeck_core::{AudioSink, PlaybackError};
use web_sys::HtmlAudioElement;

const VOLUME: f64 = 0.45;

/// One hidden `<audio>` element, looping, at background volume.
pub struct WebAudioSink {
    element: HtmlAudioElement,
}

impl AudioSink for WebAudioSink {
    fn create() -> Option<Self> {
        // Fails outside a document context (workers, some embeds).
        let element = HtmlAudioElement::new().ok()?;
        element.set_loop(true);
        element.set_volume(VOLUME);
        Some(WebAudioSink { element })
    }

    fn set_source(&mut self, path: &str) {
        self.element.set_src(path);
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        match self.element.play() {
            Ok(promise) => {
                // Autoplay policy rejects the promise asynchronously; attach
                // a no-op handler so the rejection never reaches the console.
                // Playback stays paused until the next gesture retries.
                let cb = wasm_bindgen::closure::ScopedClosure::own(
                    |_: wasm_bindgen::JsValue| {},
                );
                let _ = promise.catch(&cb);
                cb.forget();
                Ok(())
            }
            Err(_) => Err(PlaybackError),
        }
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }
}
