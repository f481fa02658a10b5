//! Browser console logging.
//!
//! On non-wasm targets these compile to no-ops so unit tests never call into
//! JavaScript imports.

#[cfg(target_arch = "wasm32")]
pub(crate) fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn error(_message: &str) {}
