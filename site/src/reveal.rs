//! IntersectionObserver wiring for `data-reveal` elements.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio::config::RevealConfig;
use portfolio::reveal::{REVEAL_ATTR, REVEALED_CLASS, RevealLedger, ViewportWatcher};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::browser::describe;

/// A live observer seen through [`ViewportWatcher`].
pub struct ObserverWatcher<'a> {
    observer: &'a IntersectionObserver,
}

impl ViewportWatcher for ObserverWatcher<'_> {
    type Target = Element;

    fn watch(&self, target: &Element) {
        self.observer.observe(target);
    }

    fn unwatch(&self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn reveal(&self, target: &Element) {
        add_revealed_class(target);
    }
}

/// Reveals on the spot; used when no observer can be created.
pub struct ImmediateWatcher;

impl ViewportWatcher for ImmediateWatcher {
    type Target = Element;

    fn watch(&self, _target: &Element) {}

    fn unwatch(&self, _target: &Element) {}

    fn reveal(&self, target: &Element) {
        add_revealed_class(target);
    }
}

fn add_revealed_class(target: &Element) {
    if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
        warn!(error = %describe(&err), "could not mark element revealed");
    }
}

/// Reveal key of an element, empty when the attribute is gone.
pub fn reveal_key(target: &Element) -> String {
    target.get_attribute(REVEAL_ATTR).unwrap_or_default()
}

/// Every element currently carrying a reveal key, in document order.
pub fn reveal_targets() -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(&format!("[{}]", REVEAL_ATTR)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Start watching every reveal target. Returns how many were found.
///
/// Without IntersectionObserver support everything is revealed right away,
/// so no content stays hidden.
pub fn attach(config: &RevealConfig) -> usize {
    let targets = reveal_targets();
    if targets.is_empty() {
        warn!("no reveal targets in the document");
        return 0;
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new()));
    match observe(config, ledger.clone()) {
        Ok(observer) => {
            let watcher = ObserverWatcher {
                observer: &observer,
            };
            for target in &targets {
                watcher.watch(target);
            }
        }
        Err(err) => {
            warn!(error = %describe(&err), "IntersectionObserver unavailable, revealing everything");
            reveal_all(&mut ledger.borrow_mut(), &targets);
        }
    }

    debug!(count = targets.len(), "reveal targets attached");
    targets.len()
}

/// Reveal `targets` right away. Keys already in `ledger` are skipped.
/// Returns how many were revealed by this call.
pub fn reveal_all(ledger: &mut RevealLedger, targets: &[Element]) -> usize {
    targets
        .iter()
        .filter(|target| ledger.handle(&ImmediateWatcher, *target, &reveal_key(target), true))
        .count()
}

fn observe(
    config: &RevealConfig,
    ledger: Rc<RefCell<RevealLedger>>,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let watcher = ObserverWatcher {
                observer: &observer,
            };
            let mut ledger = ledger.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let key = reveal_key(&target);
                ledger.handle(&watcher, &target, &key, entry.is_intersecting());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget(); // Keep the closure alive
    Ok(observer)
}
