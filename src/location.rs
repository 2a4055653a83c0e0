//! Continuous device position watching over the browser geolocation API.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Geolocation, Position, PositionError, PositionOptions};

/// Cached readings up to this old are accepted.
pub const MAXIMUM_AGE_MS: u32 = 1000;
/// Each position request may take this long before erroring out.
pub const TIMEOUT_MS: u32 = 5000;

pub type SuccessCallback = Closure<dyn FnMut(Position)>;
pub type ErrorCallback = Closure<dyn FnMut(PositionError)>;

fn geolocation() -> Result<Geolocation, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global `window` exists"))?
        .navigator()
        .geolocation()
}

/// Subscribes to continuous high-accuracy position updates. The returned id
/// must be handed back to [`clear_watch`] on teardown. Retry behavior on
/// errors is the browser's, not ours.
pub fn watch_position(success: &SuccessCallback, error: &ErrorCallback) -> Result<i32, JsValue> {
    let opts = PositionOptions::new();
    opts.set_enable_high_accuracy(true);
    opts.set_maximum_age(MAXIMUM_AGE_MS);
    opts.set_timeout(TIMEOUT_MS);
    geolocation()?.watch_position_with_error_callback_and_options(
        success.as_ref().unchecked_ref(),
        Some(error.as_ref().unchecked_ref()),
        &opts,
    )
}

pub fn clear_watch(id: i32) {
    if let Ok(geo) = geolocation() {
        geo.clear_watch(id);
    }
}
