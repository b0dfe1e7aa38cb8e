use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::motion::reveal::RevealLatch;

/// True once the element behind `node` has intersected the viewport by at
/// least `threshold` of its area. Stops observing after the first hit.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, threshold): &(NodeRef, f64)| {
                let latch = Rc::new(RefCell::new(RevealLatch::new()));
                let on_intersect = {
                    let visible = visible.clone();
                    Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                        let intersecting = entries.iter().any(|entry| {
                            entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                        });
                        if latch.borrow_mut().observe(intersecting) {
                            visible.set(true);
                            observer.disconnect();
                        }
                    }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                };

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(*threshold));
                let observer =
                    IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init).ok();

                match (&observer, node.cast::<Element>()) {
                    (Some(observer), Some(element)) => observer.observe(&element),
                    // no observer support: just show the content
                    (None, _) => visible.set(true),
                    (Some(_), None) => {}
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_intersect);
                }
            },
            (node, threshold),
        );
    }
    *visible
}
