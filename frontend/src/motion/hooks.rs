use log::debug;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::use_mount;

use super::counter::{IntervalTicker, RampConfig, RampDriver};
use super::observer::IntersectionVisibility;
use super::reveal::{RevealConfig, RevealWatch};

/// Returns a ref to attach to a region and whether that region has been seen.
///
/// The flag flips once, the first time at least `threshold` of the region is
/// visible, and the observer is released right after. Unmounting releases it
/// too. Regions that cannot be observed are shown straight away.
#[hook]
pub fn use_on_screen(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let entered = use_state_eq(|| false);

    {
        let node = node.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |config: &RevealConfig| {
                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let entered = entered.clone();
                        Some(RevealWatch::start(&IntersectionVisibility, &element, *config, move || {
                            entered.set(true)
                        }))
                    }
                    None => {
                        debug!("reveal region has no element attached, showing it");
                        entered.set(true);
                        None
                    }
                };
                move || {
                    if let Some(watch) = watch {
                        debug!(
                            "releasing reveal region in {:?}, seen: {}",
                            watch.phase(),
                            watch.has_entered_view()
                        );
                    }
                }
            },
            RevealConfig::new(threshold),
        );
    }

    (node, *entered)
}

/// Counts from zero to `config.target` once `active` turns true.
#[hook]
pub fn use_counter_ramp(active: bool, config: RampConfig) -> u32 {
    let value = use_state_eq(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |(active, config): &(bool, RampConfig)| {
                let driver = active.then(|| {
                    RampDriver::start(&IntervalTicker, *config, move |next| value.set(next))
                });
                move || drop(driver)
            },
            (active, config),
        );
    }

    *value
}

#[hook]
pub fn use_scroll_to_top() {
    use_mount(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

pub fn scroll_into_view(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        let mut options = ScrollIntoViewOptions::new();
        #[allow(deprecated)]
        options.behavior(ScrollBehavior::Smooth).block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
