#![cfg(all(target_arch = "wasm32", feature = "wasm-test"))]

use wasm_bindgen_test::*;
use leptos::*;
use townlink::components::map_view::{MapPin, MapView};

mod mocks;
use mocks::leaflet_mock::*;
use mocks::{create_container, remove_container, wait_until};

wasm_bindgen_test_configure!(run_in_browser);

fn pin(title: &str, latitude: f64) -> MapPin {
    MapPin {
        latitude,
        longitude: -70.0,
        title: title.to_string(),
        subtitle: "Main St".to_string(),
    }
}

#[wasm_bindgen_test]
async fn only_one_map_exists_across_redraws_and_unmount() {
    assert!(setup_leaflet_mock(), "Failed to setup Leaflet mock");
    let container = create_container("map-lifecycle");

    let current_pin = create_rw_signal(Some(pin("First", 40.0)));
    let visible = create_rw_signal(true);

    mount_to(container.clone(), move || {
        view! {
            <Show when=move || visible.get()>
                <MapView pin=current_pin fallback=Signal::derive(|| None::<String>) />
            </Show>
        }
    });

    assert!(wait_until(|| created_map_count() == 1).await, "map was not created");
    assert_eq!(live_map_count(), 1);

    // Redraw: the previous map is removed before the new one exists
    current_pin.set(Some(pin("<Second & Co>", 41.0)));
    assert!(wait_until(|| created_map_count() == 2).await, "map was not redrawn");
    assert_eq!(live_map_count(), 1);
    assert_eq!(last_popup(), "<b>&lt;Second &amp; Co&gt;</b><br>Main St");

    // Clearing the pin removes the map
    current_pin.set(None);
    assert!(wait_until(|| live_map_count() == 0).await, "map was not removed");

    // Unmounting with a live map removes it too
    current_pin.set(Some(pin("Third", 42.0)));
    assert!(wait_until(|| live_map_count() == 1).await);
    visible.set(false);
    assert!(wait_until(|| live_map_count() == 0).await, "map outlived its component");

    remove_container(&container);
}
