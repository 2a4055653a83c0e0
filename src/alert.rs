//! Warning popups via the SweetAlert2 global loaded from `index.html`.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Swal, js_name = fire)]
    fn swal_fire(options: &JsValue);
}

/// Fire-and-forget warning dialog with a single acknowledgement button.
pub fn show_warning(message: &str, confirm_label: &str) {
    let opts = Object::new();
    let _ = Reflect::set(&opts, &JsValue::from_str("icon"), &JsValue::from_str("warning"));
    let _ = Reflect::set(&opts, &JsValue::from_str("title"), &JsValue::from_str(message));
    let _ = Reflect::set(
        &opts,
        &JsValue::from_str("confirmButtonText"),
        &JsValue::from_str(confirm_label),
    );
    swal_fire(&opts.into());
}
