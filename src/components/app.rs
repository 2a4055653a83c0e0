use yew::prelude::*;

use super::ar_view::{ArView, start_ar_session};
use super::coin_map::CoinMap;
use crate::model::Coin;
use crate::util::clog;

#[derive(PartialEq, Clone)]
enum View {
    Map,
    Ar(Coin),
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Map);

    let on_enter_ar = {
        let view = view.clone();
        Callback::from(move |coin: Coin| {
            clog(&format!("entering AR for coin {}", coin.id));
            start_ar_session(&coin);
            view.set(View::Ar(coin));
        })
    };
    let to_map = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Map))
    };

    html! {
        <div id="root">
            {
                match (*view).clone() {
                    View::Map => html! { <CoinMap on_enter_ar={on_enter_ar.clone()} /> },
                    View::Ar(coin) => html! { <ArView coin={coin} to_map={to_map.clone()} /> },
                }
            }
        </div>
    }
}
