//! WASM bindings for browser-based style conversion.
//!
//! This module exposes the translation pass to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Translate a flattened Topaz style dump into CSS text.
///
/// Takes the dump as a string and returns the stylesheet; styles outside
/// the recognized vocabulary are dropped, never raised to JavaScript.
#[wasm_bindgen]
pub fn translate_stylesheet(flat: &str) -> String {
    crate::translate(flat)
}
