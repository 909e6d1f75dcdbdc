//! Leaflet map showing the two training venues.
//!
//! Geometry and option objects are built in Rust; only the rendering calls
//! go through the `L` global loaded by `index.html`.

use log::{debug, info};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Object, Reflect};
use web_sys::{window, HtmlElement};

use crate::config::{self, Location};

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;
    pub type TileLayer;
    pub type Marker;
    pub type DivIcon;
    pub type Handler;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    fn leaflet_map(container: &HtmlElement, options: &JsValue) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, getter, js_name = scrollWheelZoom)]
    fn scroll_wheel_zoom(this: &LeafletMap) -> Handler;

    #[wasm_bindgen(method)]
    fn on(this: &LeafletMap, event: &str, handler: &web_sys::js_sys::Function) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn enable(this: &Handler) -> Handler;

    #[wasm_bindgen(method)]
    fn disable(this: &Handler) -> Handler;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(position: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    scroll_wheel_zoom: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions {
    max_zoom: u8,
    attribution: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions {
    class_name: &'static str,
    html: &'static str,
    icon_size: [u32; 2],
    icon_anchor: [i32; 2],
    popup_anchor: [i32; 2],
}

const PIN_HTML: &str = r#"<div style="width:40px;height:40px;border-radius:16px;background:#ffd400;border:1px solid rgba(15,17,21,.25);display:grid;place-items:center;font-weight:1000;box-shadow:0 18px 60px rgba(0,0,0,.20);"><span style="font-size:18px;">⚽</span></div>"#;

fn pin_icon_options() -> IconOptions {
    IconOptions {
        class_name: "custom-pin",
        html: PIN_HTML,
        icon_size: [40, 40],
        icon_anchor: [20, 40],
        popup_anchor: [0, -40],
    }
}

/// South-west / north-east corners, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Smallest box holding every location, or `None` for an empty slice.
    pub fn around(locations: &[Location]) -> Option<Self> {
        let first = locations.first()?;
        let start = LatLngBounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(locations[1..].iter().fold(start, |b, loc| LatLngBounds {
            south: b.south.min(loc.lat),
            west: b.west.min(loc.lng),
            north: b.north.max(loc.lat),
            east: b.east.max(loc.lng),
        }))
    }

    /// Grows each side by `ratio` of the box's span, like Leaflet's `pad`.
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north - self.south).abs() * ratio;
        let lng_buffer = (self.east - self.west).abs() * ratio;
        LatLngBounds {
            south: self.south - lat_buffer,
            west: self.west - lng_buffer,
            north: self.north + lat_buffer,
            east: self.east + lng_buffer,
        }
    }

    fn to_js(self) -> Result<JsValue, serde_wasm_bindgen::Error> {
        serde_wasm_bindgen::to_value(&[[self.south, self.west], [self.north, self.east]])
    }
}

pub fn popup_html(location: &Location) -> String {
    format!("<strong>{}</strong><br/>{}", location.name, config::SCHOOL_NAME)
}

fn lat_lng(lat: f64, lng: f64) -> Result<JsValue, serde_wasm_bindgen::Error> {
    serde_wasm_bindgen::to_value(&[lat, lng])
}

pub fn leaflet_available() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("L")).unwrap_or(false))
        .unwrap_or(false)
}

/// A rendered map and the pointer handlers attached to it. Dropping it tears
/// the map down.
pub struct VenueMap {
    map: LeafletMap,
    _on_enter: Closure<dyn Fn()>,
    _on_leave: Closure<dyn Fn()>,
}

impl Drop for VenueMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}

/// Builds the venue map inside `container`. Returns `Ok(None)` when Leaflet
/// did not load.
pub fn init_map(container: &HtmlElement) -> Result<Option<VenueMap>, JsValue> {
    if !leaflet_available() {
        debug!("Leaflet not loaded, skipping map");
        return Ok(None);
    }

    let options = serde_wasm_bindgen::to_value(&MapOptions {
        scroll_wheel_zoom: false,
    })?;
    let (lat, lng) = config::MAP_CENTER;
    let map = leaflet_map(container, &options)?;
    map.set_view(&lat_lng(lat, lng)?, config::MAP_ZOOM);

    let tiles = serde_wasm_bindgen::to_value(&TileOptions {
        max_zoom: config::TILE_MAX_ZOOM,
        attribution: config::TILE_ATTRIBUTION,
    })?;
    tile_layer(config::TILE_URL, &tiles).add_layer_to(&map);

    let icon = div_icon(&serde_wasm_bindgen::to_value(&pin_icon_options())?);
    let marker_options = Object::new();
    Reflect::set(&marker_options, &JsValue::from_str("icon"), &icon)?;
    for location in &config::LOCATIONS {
        marker(&lat_lng(location.lat, location.lng)?, &marker_options)
            .add_marker_to(&map)
            .bind_popup(&popup_html(location));
    }

    if let Some(bounds) = LatLngBounds::around(&config::LOCATIONS) {
        map.fit_bounds(&bounds.pad(config::MAP_BOUNDS_PADDING).to_js()?);
    }

    // Wheel zoom only while the pointer is over the map so page scrolling
    // is never captured.
    let on_enter = {
        let handler = map.scroll_wheel_zoom();
        Closure::<dyn Fn()>::new(move || {
            handler.enable();
        })
    };
    let on_leave = {
        let handler = map.scroll_wheel_zoom();
        Closure::<dyn Fn()>::new(move || {
            handler.disable();
        })
    };
    map.on("mouseover", on_enter.as_ref().unchecked_ref());
    map.on("mouseout", on_leave.as_ref().unchecked_ref());

    info!("map ready with {} venues", config::LOCATIONS.len());
    Ok(Some(VenueMap {
        map,
        _on_enter: on_enter,
        _on_leave: on_leave,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_both_venues() {
        let bounds = LatLngBounds::around(&config::LOCATIONS).unwrap();
        assert_eq!(bounds.south, 51.1050);
        assert_eq!(bounds.north, 51.1600);
        assert_eq!(bounds.west, 71.3900);
        assert_eq!(bounds.east, 71.4700);
    }

    #[test]
    fn padding_grows_each_side_by_span_ratio() {
        let bounds = LatLngBounds {
            south: 0.0,
            west: 10.0,
            north: 4.0,
            east: 18.0,
        }
        .pad(0.25);
        assert_eq!(
            bounds,
            LatLngBounds {
                south: -1.0,
                west: 8.0,
                north: 5.0,
                east: 20.0,
            }
        );
    }

    #[test]
    fn no_locations_no_bounds() {
        assert_eq!(LatLngBounds::around(&[]), None);
    }

    #[test]
    fn popup_names_venue_and_school() {
        let html = popup_html(&config::LOCATIONS[1]);
        assert_eq!(html, "<strong>Школа-лицей №71</strong><br/>ASTANA JAS Football School");
    }

    #[test]
    fn pin_is_anchored_at_bottom_centre() {
        let icon = pin_icon_options();
        assert_eq!(icon.icon_anchor, [icon.icon_size[0] as i32 / 2, icon.icon_size[1] as i32]);
        assert!(icon.html.contains('⚽'));
    }
}
