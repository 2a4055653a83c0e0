mod alert;
mod components;
mod geo;
mod location;
mod mapbox;
mod model;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
