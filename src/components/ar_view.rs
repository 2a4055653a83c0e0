//! Placeholder AR overlay shown once a coin has been selected. The actual
//! AR rendering lives in the hosting page; we hand the coin over and show a
//! minimal status panel with a way back to the map.

use yew::prelude::*;

use crate::model::Coin;
use crate::util::cerror;

/// Hands the selected coin to the hosting page's AR runtime, if one is
/// loaded. Missing hook is not an error; the overlay still renders.
pub fn start_ar_session(coin: &Coin) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match serde_json::to_string(coin) {
        Ok(json) => {
            let function = js_sys::Function::new_no_args(&format!(
                "if (window.startArSession) window.startArSession({json});"
            ));
            let _ = function.call0(&window.into());
        }
        Err(err) => cerror(&format!("failed to serialize coin {}: {err}", coin.id)),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ArViewProps {
    pub coin: Coin,
    pub to_map: Callback<()>,
}

#[function_component(ArView)]
pub fn ar_view(props: &ArViewProps) -> Html {
    let back = {
        let cb = props.to_map.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let coin = props.coin;

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0e1116; color:#e6edf3; display:flex; align-items:center; justify-content:center;">
            <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px 32px; text-align:center; min-width:320px;">
                <h2 style="margin:0 0 12px 0;">{ format!("🪙 Coin #{}", coin.id) }</h2>
                <p style="margin:4px 0;">{ format!("{:.6}, {:.6}", coin.lat, coin.lng) }</p>
                <p style="margin:4px 0; opacity:0.7;">{ "AR session running…" }</p>
                <div style="margin-top:16px;">
                    <button onclick={back}>{ "Back to Map" }</button>
                </div>
            </div>
        </div>
    }
}
