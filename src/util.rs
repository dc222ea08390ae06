// Small helpers shared across components.

/// Console logging for data-quality defects and interaction traces.
/// Native builds (unit tests) fall back to stderr.
#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    eprintln!("{msg}");
}

pub fn format_latlng(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}
