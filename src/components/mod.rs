pub mod app;
pub mod ar_view;
pub mod coin_map;
