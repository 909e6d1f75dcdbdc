use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;

/// How `.reveal` elements become visible. Chosen once when the page mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Animate each element the first time it scrolls into view.
    Observe,
    /// No observer available: show everything right away.
    Immediate,
}

impl RevealStrategy {
    pub fn detect() -> Self {
        let supported = window()
            .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false);
        if supported {
            RevealStrategy::Observe
        } else {
            RevealStrategy::Immediate
        }
    }
}

/// Staggered entrance delay for the `index`-th element.
pub fn transition_delay_ms(index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index
        .saturating_mul(config::REVEAL_STAGGER_MS)
        .min(config::REVEAL_MAX_DELAY_MS)
}

/// Live observer plus the closure it calls. Dropping it disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn reveal_elements() -> Result<Vec<Element>, JsValue> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Ok(Vec::new());
    };
    let nodes = document.query_selector_all(config::REVEAL_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn mark_visible(element: &Element) {
    let _ = element.class_list().add_1(config::REVEAL_VISIBLE_CLASS);
}

/// Wires every `.reveal` element on the page according to `strategy`.
pub fn start(strategy: RevealStrategy) -> Result<Option<RevealObserver>, JsValue> {
    let elements = reveal_elements()?;
    info!("reveal: {} elements, strategy {:?}", elements.len(), strategy);
    if elements.is_empty() {
        return Ok(None);
    }

    if strategy == RevealStrategy::Immediate {
        elements.iter().for_each(mark_visible);
        return Ok(None);
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    mark_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

    for (index, element) in elements.iter().enumerate() {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style()
                .set_property("transition-delay", &format!("{}ms", transition_delay_ms(index)))?;
        }
        observer.observe(element);
    }
    debug!("reveal observer attached");

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}
