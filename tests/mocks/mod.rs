#![allow(dead_code)]

pub mod fetch_mock;
pub mod leaflet_mock;

use std::time::Duration;
use gloo_timers::future::sleep;
use wasm_bindgen::JsCast;

/// Creates a container attached to the document body so delegated events reach it.
pub fn create_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.dyn_into::<web_sys::HtmlElement>().unwrap()
}

pub fn remove_container(container: &web_sys::HtmlElement) {
    container.remove();
}

pub fn text_of(container: &web_sys::HtmlElement, selector: &str) -> String {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .text_content()
        .unwrap_or_default()
}

pub fn count_of(container: &web_sys::HtmlElement, selector: &str) -> u32 {
    container.query_selector_all(selector).unwrap().length()
}

pub fn has_class(container: &web_sys::HtmlElement, selector: &str, class: &str) -> bool {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .class_list()
        .contains(class)
}

pub fn click(container: &web_sys::HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Polls `condition` every 50ms for up to two seconds.
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..40 {
        if condition() {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    condition()
}
