use log::warn;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::map::init_map;

/// Container for the venue map. Renders an empty box when Leaflet is not on
/// the page.
#[function_component(LocationsMap)]
pub fn locations_map() -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |_| {
                let venue_map = container.cast::<HtmlElement>().and_then(|el| {
                    init_map(&el).unwrap_or_else(|err| {
                        warn!("map init failed: {:?}", err);
                        None
                    })
                });
                move || drop(venue_map)
            },
            (),
        );
    }

    html! {
        <div id="map" class="map" ref={container} aria-label="Карта / Карта площадок"></div>
    }
}
