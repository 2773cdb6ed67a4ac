pub mod api;
pub mod app;
pub mod config;

pub mod components {
    pub mod admin_panel;
    pub mod business_detail;
    pub mod map_view;
    pub mod nav_bar;
    pub mod pending_business_card;
    pub mod reviews_list;
    pub mod star_rating;
}

pub mod models {
    pub mod business;
    pub mod moderation;
    pub mod review;
}

pub mod utils {
    pub mod html;
    pub mod panic_hook;
    pub mod query;
    pub mod request_sequencer;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
