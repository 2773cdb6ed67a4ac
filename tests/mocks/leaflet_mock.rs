use wasm_bindgen::prelude::*;

/// This module provides a stand-in for the Leaflet global `L` that counts
/// map instances, so the single-map invariant can be checked.

#[wasm_bindgen(inline_js = r#"
export function setup_leaflet_mock() {
    const state = { live: 0, created: 0, popups: [] };
    window.__townlinkLeafletMock = state;

    function layer() {
        return {
            addTo: function(map) { return this; },
            bindPopup: function(html) { state.popups.push(html); return this; },
            openPopup: function() { return this; },
        };
    }

    window.L = {
        map: function(container) {
            state.live += 1;
            state.created += 1;
            let removed = false;
            console.log("[MOCK LEAFLET] map created, live:", state.live);
            return {
                setView: function(center, zoom) { this.center = center; this.zoom = zoom; return this; },
                remove: function() {
                    if (!removed) {
                        removed = true;
                        state.live -= 1;
                    }
                    console.log("[MOCK LEAFLET] map removed, live:", state.live);
                },
            };
        },
        tileLayer: function(url, options) { return layer(); },
        marker: function(latLng) { return layer(); },
    };
    return true;
}

export function live_map_count() {
    return window.__townlinkLeafletMock.live;
}

export function created_map_count() {
    return window.__townlinkLeafletMock.created;
}

export function last_popup() {
    const popups = window.__townlinkLeafletMock.popups;
    return popups.length ? popups[popups.length - 1] : "";
}
"#)]
extern "C" {
    /// Installs a fresh Leaflet mock as `window.L`
    pub fn setup_leaflet_mock() -> bool;

    pub fn live_map_count() -> u32;

    pub fn created_map_count() -> u32;

    pub fn last_popup() -> String;
}
