use leptos::*;
use leptos::logging::{error, log};
use wasm_bindgen::prelude::*;
use gloo_utils::format::JsValueSerdeExt;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::models::business::Business;
use crate::utils::html::escape_html;

pub const MAP_ZOOM: u8 = 15;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// A single marker to centre the map on.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPin {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub subtitle: String,
}

impl MapPin {
    pub fn for_business(business: &Business) -> Option<Self> {
        let (latitude, longitude) = business.coordinates()?;
        Some(Self {
            latitude,
            longitude,
            title: business.name.clone(),
            subtitle: business.location.clone(),
        })
    }

    pub fn popup_html(&self) -> String {
        format!("<b>{}</b><br>{}", escape_html(&self.title), escape_html(&self.subtitle))
    }

    fn lat_lng(&self) -> JsValue {
        js_sys::Array::of2(&self.latitude.into(), &self.longitude.into()).into()
    }
}

// Leaflet is loaded by the page as the global `L`.
#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &web_sys::HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    type LeafletTileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> LeafletTileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &LeafletTileLayer, map: &LeafletMap) -> LeafletTileLayer;

    type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &JsValue) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &LeafletMarker, map: &LeafletMap) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &LeafletMarker, html: &str) -> LeafletMarker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &LeafletMarker) -> LeafletMarker;
}

#[derive(Serialize)]
struct TileLayerOptions {
    attribution: &'static str,
}

fn draw_map(container: &web_sys::HtmlElement, pin: &MapPin) -> Result<LeafletMap, JsValue> {
    let center = pin.lat_lng();
    let map = leaflet_map(container)?;
    map.set_view(&center, MAP_ZOOM);

    let options = JsValue::from_serde(&TileLayerOptions {
        attribution: TILE_ATTRIBUTION,
    })
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    tile_layer(TILE_URL, &options).add_layer_to(&map);

    marker(&center)
        .add_marker_to(&map)
        .bind_popup(&pin.popup_html())
        .open_popup();
    Ok(map)
}

/// Owns the page's one Leaflet map. Drawing a new pin removes the previous map
/// first.
#[derive(Clone, Default)]
struct MapSlot(Rc<RefCell<Option<LeafletMap>>>);

impl MapSlot {
    fn clear(&self) {
        if let Some(map) = self.0.borrow_mut().take() {
            map.remove();
            log!("[MAP] Removed map instance");
        }
    }

    fn show(&self, container: &web_sys::HtmlElement, pin: &MapPin) {
        self.clear();
        match draw_map(container, pin) {
            Ok(map) => {
                log!("[MAP] Showing {} at {}, {}", pin.title, pin.latitude, pin.longitude);
                *self.0.borrow_mut() = Some(map);
            }
            Err(err) => error!("[MAP] Could not create map: {:?}", err),
        }
    }
}

/// The `#map` area of the detail page: a Leaflet map when there is a pin,
/// otherwise the fallback message (if any).
#[component]
pub fn MapView(
    #[prop(into)] pin: Signal<Option<MapPin>>,
    #[prop(into)] fallback: Signal<Option<String>>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let slot = MapSlot::default();

    {
        let slot = slot.clone();
        create_effect(move |_| {
            let pin = pin.get();
            let Some(container) = container.get() else {
                return;
            };
            match pin {
                Some(pin) => slot.show(&container, &pin),
                None => slot.clear(),
            }
        });
    }
    on_cleanup(move || slot.clear());

    view! {
        <div
            id="map"
            class="rounded-lg"
            style:height=move || if pin.with(Option::is_some) { "400px" } else { "auto" }
            node_ref=container
        >
            { move || fallback.get().map(|message| view! {
                <p class="map-fallback text-gray-600">{ message }</p>
            }) }
        </div>
    }
}
