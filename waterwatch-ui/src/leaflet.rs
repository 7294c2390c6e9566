//! Leaflet Bridge
//!
//! Minimal `wasm-bindgen` bindings to the global `L` object loaded by
//! `index.html`, and a function that puts a [`MapLayer`] on a container.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use waterwatch::views::{CircleMarker, MapLayer};

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map) -> Map;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map) -> Map;

    /// Any `L.Layer` (tile layer, circle marker)
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    fn circle_marker(latlng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str) -> Layer;
}

/// Create a Leaflet map in `element` with the tile layer and every marker
pub fn mount(element: &HtmlElement, layer: &MapLayer) -> Result<Map, String> {
    let map_options = options(&[
        ("center", lat_lng(layer.center)),
        ("zoom", JsValue::from(f64::from(layer.zoom))),
    ])?;
    let map = create_map(element, &map_options).map_err(describe)?;

    let tile_options = options(&[("attribution", JsValue::from_str(&layer.attribution))])?;
    tile_layer(&layer.tile_url, &tile_options)
        .map_err(describe)?
        .add_to(&map);

    for pair in &layer.markers {
        let point = add_circle(&map, &pair.point)?;
        if let Some(popup) = &pair.point.popup {
            point.bind_popup(&popup.to_html());
        }
        add_circle(&map, &pair.zone)?;
    }

    Ok(map)
}

fn add_circle(map: &Map, marker: &CircleMarker) -> Result<Layer, String> {
    let marker_options = options(&[
        ("radius", JsValue::from(marker.radius)),
        ("color", JsValue::from_str(marker.color)),
        ("fillColor", JsValue::from_str(marker.fill_color)),
        ("fillOpacity", JsValue::from(marker.fill_opacity)),
    ])?;
    let circle = circle_marker(&lat_lng(marker.center), &marker_options).map_err(describe)?;
    Ok(circle.add_to(map))
}

/// Plain JS object from key/value pairs
fn options(entries: &[(&str, JsValue)]) -> Result<JsValue, String> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from_str(key), value).map_err(describe)?;
    }
    Ok(object.into())
}

/// `[lat, lng]` array
fn lat_lng(center: [f64; 2]) -> JsValue {
    Array::of2(&JsValue::from(center[0]), &JsValue::from(center[1])).into()
}

/// Readable message from a thrown JS value
fn describe(err: JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_options_object() {
        let value = options(&[("zoom", JsValue::from(11.0))]).unwrap();
        let zoom = Reflect::get(&value, &JsValue::from_str("zoom")).unwrap();
        assert_eq!(zoom.as_f64(), Some(11.0));
    }

    #[wasm_bindgen_test]
    fn test_lat_lng_order() {
        let value: Array = lat_lng([28.6139, 77.209]).unchecked_into();
        assert_eq!(value.get(0).as_f64(), Some(28.6139));
        assert_eq!(value.get(1).as_f64(), Some(77.209));
    }

    #[wasm_bindgen_test]
    fn test_describe_error() {
        let err: JsValue = js_sys::Error::new("L is not defined").into();
        assert_eq!(describe(err), "L is not defined");
        assert_eq!(describe(JsValue::from_str("plain")), "plain");
    }
}
