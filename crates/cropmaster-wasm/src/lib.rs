//! CropMaster WASM - WebAssembly bindings for the crop page
//!
//! This crate exposes the cropmaster-core geometry and session state to the
//! page script. Transport (upload progress, fetch, download and share
//! fallbacks) and DOM wiring stay in JavaScript.
//!
//! # Module Structure
//!
//! - `overlay` - stateless crop overlay computation
//! - `session` - `JsCropSession`, the owned page state
//! - `api` - API base, upload checks and label helpers
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsCropSession, api_base } from '@cropmaster/wasm';
//!
//! await init();
//! const session = new JsCropSession();
//!
//! zoomSlider.addEventListener('input', () => {
//!   session.set_zoom(parseFloat(zoomSlider.value));
//!   paint(session.overlay());
//! });
//! ```

use wasm_bindgen::prelude::*;

mod api;
mod log;
mod overlay;
mod session;
mod types;

// Re-export public types
pub use api::{
    api_base, check_upload, color_profile_label, format_file_size, predicted_output_filename,
};
pub use overlay::{compute_crop_overlay, target_ratio};
pub use session::JsCropSession;
pub use types::JsCropRectangle;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    log::info(&format!("cropmaster-wasm {} loaded", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
