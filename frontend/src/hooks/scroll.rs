use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::motion::scroll_progress::{ScrollProgressTracker, TrackedRegion};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowScroll {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn read_window_scroll(window: &Window) -> WindowScroll {
    WindowScroll {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        viewport_height: viewport_height(window),
    }
}

/// Listens to window scroll events for the lifetime of the component and
/// runs `on_scroll` once right away. The listener is removed on teardown.
fn subscribe_scroll<F>(on_scroll: F) -> impl FnOnce() + 'static
where
    F: Fn(&Window) + 'static,
{
    let subscription = web_sys::window().map(|window| {
        let handler = {
            let window = window.clone();
            move || on_scroll(&window)
        };
        handler();
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        (window, callback)
    });

    move || {
        if let Some((window, callback)) = subscription {
            let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    }
}

/// Current scroll offset and viewport height, refreshed on every scroll.
#[hook]
pub fn use_window_scroll() -> WindowScroll {
    let scroll = use_state_eq(WindowScroll::default);
    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| subscribe_scroll(move |window| scroll.set(read_window_scroll(window))),
            (),
        );
    }
    *scroll
}

/// Progress (0..=1) of the viewport through the element behind `node`.
/// Recomputed on every scroll with no smoothing; when the element is not
/// taller than the viewport the last value is kept.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let tracker = Rc::new(RefCell::new(ScrollProgressTracker::new()));
                subscribe_scroll(move |window| {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let region = TrackedRegion {
                        top: rect.top(),
                        height: rect.height(),
                        viewport_height: viewport_height(window),
                    };
                    let mut tracker = tracker.borrow_mut();
                    if tracker.update(region) {
                        progress.set(tracker.progress());
                    }
                })
            },
            node,
        );
    }
    *progress
}
