//! Map view: owns the Mapbox map, the user marker, and one marker per coin.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::alert::show_warning;
use crate::geo::{first_coin_in_range, is_within_range};
use crate::location;
use crate::mapbox::{self, Map, Marker, NavigationControl};
use crate::model::{COINS, Coin, DEFAULT_CENTER, DEFAULT_ZOOM, GeoPosition, MAP_STYLE};
use crate::util::cerror;

#[derive(Properties, PartialEq, Clone)]
pub struct CoinMapProps {
    /// Invoked with the selected coin once the user is within range of it.
    pub on_enter_ar: Callback<Coin>,
}

#[function_component(CoinMap)]
pub fn coin_map(props: &CoinMapProps) -> Html {
    let container_ref = use_node_ref();
    let map_ref = use_mut_ref(|| None::<Map>);
    let user_marker_ref = use_mut_ref(|| None::<Marker>);
    // Latest fix, shared between the watch callback and the click handlers.
    // Handlers read it at click time, so they never act on a mount-time
    // snapshot.
    let user_location = use_mut_ref(|| None::<GeoPosition>);

    // Map + markers, created once per mount, torn down on unmount.
    {
        let container_ref = container_ref.clone();
        let map_ref = map_ref.clone();
        let user_marker_ref = user_marker_ref.clone();
        let user_location = user_location.clone();
        let on_enter_ar = props.on_enter_ar.clone();

        use_effect_with((), move |_| {
            mapbox::ensure_access_token();

            let container: HtmlElement = container_ref
                .cast::<HtmlElement>()
                .expect("container_ref not attached to an element");
            let map = Map::new(&mapbox::map_options(
                &container,
                MAP_STYLE,
                DEFAULT_CENTER,
                DEFAULT_ZOOM,
            ));
            map.add_control(&NavigationControl::new(), "top-left");

            // User marker at the default center until the first fix moves it.
            let user_marker = Marker::new(&mapbox::marker_options("blue"));
            user_marker.set_lng_lat(&mapbox::lng_lat(DEFAULT_CENTER[0], DEFAULT_CENTER[1]));
            user_marker.add_to(&map);

            let mut coin_markers = Vec::with_capacity(COINS.len());
            let mut click_cbs = Vec::with_capacity(COINS.len());
            for coin in COINS {
                let marker = Marker::new(&mapbox::default_marker_options());
                marker.set_lng_lat(&mapbox::lng_lat(coin.lng, coin.lat));
                marker.add_to(&map);

                let el = marker.get_element();
                let style = el.style();
                let _ = style.set_property("font-size", "24px");
                let _ = style.set_property("cursor", "pointer");
                el.set_inner_html("🪙");

                let click_cb = {
                    let user_location = user_location.clone();
                    let on_enter_ar = on_enter_ar.clone();
                    let coin = *coin;
                    Closure::wrap(Box::new(move || {
                        // No fix yet: ignore the tap silently.
                        let Some(here) = *user_location.borrow() else {
                            return;
                        };
                        if is_within_range(&here, &coin.position()) {
                            on_enter_ar.emit(coin);
                        } else {
                            show_warning("📍 You are too far from the coin.", "Got it");
                        }
                    }) as Box<dyn FnMut()>)
                };
                el.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
                    .expect("attach coin marker click listener");
                click_cbs.push(click_cb);
                coin_markers.push(marker);
            }

            *map_ref.borrow_mut() = Some(map);
            *user_marker_ref.borrow_mut() = Some(user_marker);

            move || {
                for marker in coin_markers {
                    marker.remove();
                }
                // Emptying the cells guarantees no marker or camera mutation
                // after teardown, even if a stray callback fires.
                if let Some(marker) = user_marker_ref.borrow_mut().take() {
                    marker.remove();
                }
                if let Some(map) = map_ref.borrow_mut().take() {
                    map.remove();
                }
                drop(click_cbs);
            }
        });
    }

    // Position watch: writes the shared fix and follows the user with the
    // marker and camera.
    {
        let map_ref = map_ref.clone();
        let user_marker_ref = user_marker_ref.clone();
        let user_location = user_location.clone();

        use_effect_with((), move |_| {
            let success_cb: location::SuccessCallback = Closure::wrap(Box::new(
                move |pos: web_sys::Position| {
                    let coords = pos.coords();
                    let fix = GeoPosition {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    };
                    *user_location.borrow_mut() = Some(fix);
                    if let Some(marker) = &*user_marker_ref.borrow() {
                        marker.set_lng_lat(&mapbox::lng_lat(fix.longitude, fix.latitude));
                    }
                    if let Some(map) = &*map_ref.borrow() {
                        map.set_center(&mapbox::lng_lat(fix.longitude, fix.latitude));
                    }
                },
            ) as Box<dyn FnMut(_)>);
            let error_cb: location::ErrorCallback = Closure::wrap(Box::new(
                move |err: web_sys::PositionError| {
                    cerror(&format!("location error ({}): {}", err.code(), err.message()));
                },
            ) as Box<dyn FnMut(_)>);

            let watch_id = match location::watch_position(&success_cb, &error_cb) {
                Ok(id) => Some(id),
                Err(err) => {
                    cerror(&format!("geolocation unavailable: {err:?}"));
                    None
                }
            };

            move || {
                if let Some(id) = watch_id {
                    location::clear_watch(id);
                }
                drop(success_cb);
                drop(error_cb);
            }
        });
    }

    let on_ar_click = {
        let user_location = user_location.clone();
        let on_enter_ar = props.on_enter_ar.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(here) = *user_location.borrow() else {
                show_warning("📍 Location not available.", "OK");
                return;
            };
            match first_coin_in_range(&here, COINS) {
                Some(coin) => on_enter_ar.emit(*coin),
                None => show_warning("📍 You are too far from any coin.", "Got it"),
            }
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh;">
            <div ref={container_ref} id="coin-map" style="width:100%; height:100%;"></div>
            <button
                onclick={on_ar_click}
                style="position:absolute; bottom:32px; left:50%; transform:translateX(-50%); padding:12px 20px; background:#2563eb; color:#fff; border:none; border-radius:8px; font-weight:700; font-size:18px; z-index:10; box-shadow:0 2px 8px rgba(0,0,0,0.3); cursor:pointer;"
            >
                { "🎯 Enter AR View" }
            </button>
        </div>
    }
}
