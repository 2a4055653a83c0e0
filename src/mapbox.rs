//! Bindings to the Mapbox GL JS global loaded from `index.html`.
//!
//! Only the surface this app needs: map construction/teardown, the
//! navigation control, markers, and the process-wide access token.

use std::sync::Once;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use crate::util::cerror;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = addControl)]
    pub fn add_control(this: &Map, control: &NavigationControl, position: &str);

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, lng_lat: &JsValue);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new() -> NavigationControl;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue);

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = getElement)]
    pub fn get_element(this: &Marker) -> HtmlElement;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);
}

static ACCESS_TOKEN_INIT: Once = Once::new();

/// Sets `mapboxgl.accessToken` once for the process lifetime. Credentials
/// are immutable afterwards; there is no teardown.
pub fn ensure_access_token() {
    ACCESS_TOKEN_INIT.call_once(|| {
        let token = option_env!("MAPBOX_TOKEN").unwrap_or_default();
        let Some(window) = web_sys::window() else {
            return;
        };
        match Reflect::get(&window, &JsValue::from_str("mapboxgl")) {
            Ok(mapboxgl) if !mapboxgl.is_undefined() => {
                let _ = Reflect::set(
                    &mapboxgl,
                    &JsValue::from_str("accessToken"),
                    &JsValue::from_str(token),
                );
            }
            _ => cerror("mapboxgl global not loaded; check index.html"),
        }
    });
}

/// `[lng, lat]` array in Mapbox argument order.
pub fn lng_lat(lng: f64, lat: f64) -> JsValue {
    Array::of2(&JsValue::from_f64(lng), &JsValue::from_f64(lat)).into()
}

pub fn map_options(container: &HtmlElement, style: &str, center: [f64; 2], zoom: f64) -> JsValue {
    let opts = Object::new();
    set(&opts, "container", container.clone().into());
    set(&opts, "style", JsValue::from_str(style));
    set(&opts, "center", lng_lat(center[0], center[1]));
    set(&opts, "zoom", JsValue::from_f64(zoom));
    set(&opts, "attributionControl", JsValue::from_bool(false));
    opts.into()
}

pub fn marker_options(color: &str) -> JsValue {
    let opts = Object::new();
    set(&opts, "color", JsValue::from_str(color));
    opts.into()
}

pub fn default_marker_options() -> JsValue {
    Object::new().into()
}

fn set(target: &Object, key: &str, value: JsValue) {
    // Reflect::set on a plain fresh object cannot fail.
    let _ = Reflect::set(target, &JsValue::from_str(key), &value);
}
