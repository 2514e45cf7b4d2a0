use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use site_core::{RevealTracker, REVEALED_CLASS, REVEAL_MARKERS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const INDEX_ATTR: &str = "data-reveal-index";

/// Keeps the intersection observer (if any) alive; dropping the handle
/// disconnects it, so pending elements stop being watched at unmount.
pub struct RevealController {
    observer: Option<web::IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>>,
    pub tracker: Rc<RefCell<RevealTracker>>,
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Start watching every marked element. Each one is revealed at most once,
/// the first time a tenth of it crosses into the viewport, and is dropped
/// from observation immediately after. Under reduced motion no observer is
/// created at all and everything is shown in its final state up front.
pub fn arm(document: &web::Document) -> RevealController {
    let selector = REVEAL_MARKERS
        .iter()
        .map(|class| format!(".{class}"))
        .collect::<Vec<_>>()
        .join(", ");
    let targets = dom::query_all(document, &selector);
    let tracker = Rc::new(RefCell::new(RevealTracker::new(targets.len())));

    if prefers_reduced_motion() {
        for index in tracker.borrow_mut().reveal_all() {
            _ = targets[index].class_list().add_1(REVEALED_CLASS);
        }
        log::info!(
            "[reveal] reduced motion, {} elements shown statically",
            targets.len()
        );
        return RevealController {
            observer: None,
            _callback: None,
            tracker,
        };
    }

    for (index, el) in targets.iter().enumerate() {
        _ = el.set_attribute(INDEX_ATTR, &index.to_string());
    }

    let tracker_cb = tracker.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|s| s.parse::<usize>().ok())
                else {
                    continue;
                };
                if tracker_cb.borrow_mut().mark_revealed(index) {
                    _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok();
    match &observer {
        Some(obs) => {
            for target in &targets {
                obs.observe(target);
            }
            log::info!("[reveal] observing {} elements", targets.len());
        }
        None => log::error!("[reveal] observer construction failed"),
    }

    RevealController {
        observer,
        _callback: Some(callback),
        tracker,
    }
}
