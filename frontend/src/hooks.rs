//! Glue between the browser and [`ScrollTracker`]. These hooks own every
//! listener and observer they register and release them on unmount.

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::scroll_tracker::{Bounds, RevealEntry, ScrollTracker, SECTION_IDS};

pub type TrackerContext = UseReducerHandle<ScrollTracker>;

pub enum TrackerAction {
    /// One scroll sample: the raw offset plus freshly measured boundaries in
    /// section order.
    Scrolled {
        offset: f64,
        bounds: Vec<Option<Bounds>>,
    },
}

impl Reducible for ScrollTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TrackerAction::Scrolled { offset, bounds } => {
                let mut next = (*self).clone();
                next.measure(bounds);
                next.on_scroll(offset);
                if next.active_id() != self.active_id() {
                    debug!("Active section: {} -> {}", self.active_id(), next.active_id());
                }
                Rc::new(next)
            }
        }
    }
}

/// Observer thresholds for an element revealed at `threshold`: every tenth
/// plus the threshold itself, ascending and deduplicated.
fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let mut steps: Vec<f64> = (0..=10).map(|step| step as f64 / 10.0).collect();
    let threshold = RevealEntry::new(threshold).threshold();
    if !steps.iter().any(|step| (step - threshold).abs() < f64::EPSILON) {
        steps.push(threshold);
        steps.sort_by(|a, b| a.total_cmp(b));
    }
    steps
}

fn measure_sections(document: &web_sys::Document) -> Vec<Option<Bounds>> {
    SECTION_IDS
        .iter()
        .map(|id| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map(|el| Bounds::new(el.offset_top() as f64, el.offset_height() as f64))
        })
        .collect()
}

fn sample(tracker: &TrackerContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let offset = window.scroll_y().unwrap_or(0.0);
    tracker.dispatch(TrackerAction::Scrolled {
        offset,
        bounds: measure_sections(&document),
    });
}

/// Creates the page's tracker and keeps it in sync with window scrolling
/// for as long as the calling component is mounted.
#[hook]
pub fn use_section_tracking() -> TrackerContext {
    let tracker = use_reducer_eq(ScrollTracker::default);

    {
        let tracker = tracker.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let tracker = tracker.clone();
                        move || sample(&tracker)
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to register scroll listener: {:?}", e);
                    }
                    // Initial sample, the page may load already scrolled.
                    sample(&tracker);

                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    tracker
}

/// Watches `node` and flips to `true` the first time at least `threshold`
/// of it is visible. Never flips back.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);
    let entry = use_mut_ref(|| RevealEntry::new(threshold));

    {
        let revealed = revealed.clone();
        let entry = entry.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = None;
                let mut callback = None;

                if !entry.borrow().has_revealed() {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let on_reveal = revealed.clone();
                        let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                            move |entries: Array, observer: IntersectionObserver| {
                                for item in entries.iter() {
                                    let Ok(item) = item.dyn_into::<IntersectionObserverEntry>() else {
                                        continue;
                                    };
                                    let ratio = item.intersection_ratio();
                                    if ScrollTracker::check_reveal(&mut entry.borrow_mut(), ratio) {
                                        debug!("Revealed element at ratio {:.2}", ratio);
                                        on_reveal.set(true);
                                        observer.disconnect();
                                    }
                                }
                            },
                        );

                        let options = IntersectionObserverInit::new();
                        let thresholds: Array = observer_thresholds(threshold)
                            .into_iter()
                            .map(JsValue::from_f64)
                            .collect();
                        options.set_threshold(&thresholds);
                        match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
                            Ok(obs) => {
                                obs.observe(&element);
                                observer = Some(obs);
                                callback = Some(cb);
                            }
                            Err(e) => {
                                // No observer support: show the content rather than hide it forever.
                                warn!("IntersectionObserver unavailable: {:?}", e);
                                revealed.set(true);
                            }
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            node,
        );
    }

    *revealed
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_samples_past_the_crossing() {
        let steps = observer_thresholds(0.3);
        assert_eq!(steps.len(), 11);
        assert_eq!(steps.first(), Some(&0.0));
        assert_eq!(steps.last(), Some(&1.0));
        assert!(steps.iter().any(|s| (s - 0.3).abs() < 1e-9));
    }

    #[test]
    fn off_grid_threshold_is_inserted_in_order() {
        let steps = observer_thresholds(0.25);
        assert_eq!(steps.len(), 12);
        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(steps.contains(&0.25));

        let clamped = observer_thresholds(4.0);
        assert_eq!(clamped.len(), 11);
    }
}
