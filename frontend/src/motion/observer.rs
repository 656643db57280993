use std::ops::ControlFlow;

use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObserveError {
    #[error("IntersectionObserver is not available in this environment")]
    Unsupported,
    #[error("failed to create IntersectionObserver: {0}")]
    Js(String),
}

/// Receives the visible fraction of an intersecting region.
/// Returning `ControlFlow::Break` stops observation of that region.
pub type VisibilityCallback = Box<dyn FnMut(f64) -> ControlFlow<()>>;

/// Host capability for watching how much of a region is inside the viewport.
///
/// Implementations only report regions that currently intersect the viewport.
/// The returned subscription releases the observation when dropped.
pub trait VisibilityObserver {
    type Target: ?Sized;
    type Subscription;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: VisibilityCallback,
    ) -> Result<Self::Subscription, ObserveError>;
}

/// `VisibilityObserver` over the browser's `IntersectionObserver`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IntersectionVisibility;

pub struct IntersectionSubscription {
    observer: IntersectionObserver,
    // Must outlive the observer registration; freed together with it on drop.
    _on_entries: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

impl VisibilityObserver for IntersectionVisibility {
    type Target = Element;
    type Subscription = IntersectionSubscription;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        mut on_change: VisibilityCallback,
    ) -> Result<IntersectionSubscription, ObserveError> {
        if !intersection_observer_supported() {
            return Err(ObserveError::Unsupported);
        }

        let on_entries = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if on_change(entry.intersection_ratio()).is_break() {
                    observer.unobserve(&entry.target());
                    break;
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let mut options = IntersectionObserverInit::new();
        #[allow(deprecated)]
        options.threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options)
            .map_err(|err| ObserveError::Js(format!("{:?}", err)))?;
        observer.observe(target);

        Ok(IntersectionSubscription {
            observer,
            _on_entries: on_entries,
        })
    }
}
