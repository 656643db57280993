use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use log::{debug, warn};

use super::observer::{VisibilityCallback, VisibilityObserver};

/// Minimum visible fraction of a region before it counts as seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    threshold: f64,
}

impl RevealConfig {
    pub fn new(threshold: f64) -> Self {
        let clamped = if threshold.is_nan() { 1.0 } else { threshold.clamp(0.0, 1.0) };
        if clamped != threshold {
            warn!("reveal threshold {} outside [0, 1], using {}", threshold, clamped);
        }
        Self { threshold: clamped }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_met_by(&self, fraction: f64) -> bool {
        fraction >= self.threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Observing,
    Revealed,
    TornDown,
}

/// One-shot "has entered view" flag for a single region.
#[derive(Debug)]
pub struct RevealState {
    config: RevealConfig,
    phase: RevealPhase,
    entered: bool,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            phase: RevealPhase::Unobserved,
            entered: false,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn has_entered_view(&self) -> bool {
        self.entered
    }

    /// Whether observation for this region is over for good.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealed | RevealPhase::TornDown)
    }

    pub fn begin(&mut self) -> bool {
        if self.phase != RevealPhase::Unobserved {
            return false;
        }
        self.phase = RevealPhase::Observing;
        true
    }

    /// Feeds one observed fraction. Returns true only for the call that flips the flag.
    pub fn record(&mut self, fraction: f64) -> bool {
        if self.phase != RevealPhase::Observing || !self.config.is_met_by(fraction) {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        self.entered = true;
        true
    }

    /// Flips without an observation. Used when the host cannot observe at all.
    pub fn reveal_now(&mut self) -> bool {
        if self.is_settled() {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        self.entered = true;
        true
    }

    pub fn tear_down(&mut self) {
        self.phase = RevealPhase::TornDown;
    }
}

/// A running observation of one region. Dropping it tears the state down and
/// releases the observer subscription.
pub struct RevealWatch<S> {
    state: Rc<RefCell<RevealState>>,
    subscription: Option<S>,
}

impl<S> RevealWatch<S> {
    pub fn start<O>(observer: &O, target: &O::Target, config: RevealConfig, on_reveal: impl Fn() + 'static) -> Self
    where
        O: VisibilityObserver<Subscription = S>,
    {
        let state = Rc::new(RefCell::new(RevealState::new(config)));
        state.borrow_mut().begin();
        let on_reveal: Rc<dyn Fn()> = Rc::new(on_reveal);

        let callback: VisibilityCallback = {
            let state = Rc::clone(&state);
            let on_reveal = Rc::clone(&on_reveal);
            Box::new(move |fraction| {
                let flipped = state.borrow_mut().record(fraction);
                if flipped {
                    debug!("region reached {:.2} visible, revealing", fraction);
                    on_reveal();
                }
                if state.borrow().is_settled() {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
        };

        match observer.observe(target, config.threshold(), callback) {
            Ok(subscription) => Self {
                state,
                subscription: Some(subscription),
            },
            Err(err) => {
                warn!("{}; revealing immediately", err);
                let flipped = state.borrow_mut().reveal_now();
                if flipped {
                    on_reveal();
                }
                Self {
                    state,
                    subscription: None,
                }
            }
        }
    }

    pub fn has_entered_view(&self) -> bool {
        self.state.borrow().has_entered_view()
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.borrow().phase()
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some() && self.phase() == RevealPhase::Observing
    }
}

impl<S> Drop for RevealWatch<S> {
    fn drop(&mut self) {
        self.state.borrow_mut().tear_down();
        self.subscription.take();
    }
}

/// How a region moves into place once revealed. Maps onto classes in styles.css.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entrance {
    Rise,
    FromLeft,
    FromRight,
    Zoom,
    Fade,
}

impl Entrance {
    pub fn class(self) -> &'static str {
        match self {
            Entrance::Rise => "reveal-rise",
            Entrance::FromLeft => "reveal-from-left",
            Entrance::FromRight => "reveal-from-right",
            Entrance::Zoom => "reveal-zoom",
            Entrance::Fade => "reveal-fade",
        }
    }
}

pub fn reveal_class(entrance: Entrance, visible: bool) -> String {
    if visible {
        format!("reveal {} is-visible", entrance.class())
    } else {
        format!("reveal {}", entrance.class())
    }
}

/// `transition-delay` for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32, base_ms: u32) -> String {
    format!("transition-delay: {}ms;", base_ms as usize + index * step_ms as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::observer::ObserveError;
    use std::cell::Cell;

    struct Registration {
        threshold: f64,
        callback: VisibilityCallback,
        active: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct FakeObserver {
        unsupported: bool,
        registrations: RefCell<Vec<Registration>>,
    }

    struct FakeSubscription {
        active: Rc<Cell<bool>>,
    }

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.active.set(false);
        }
    }

    impl VisibilityObserver for FakeObserver {
        type Target = ();
        type Subscription = FakeSubscription;

        fn observe(
            &self,
            _target: &(),
            threshold: f64,
            on_change: VisibilityCallback,
        ) -> Result<FakeSubscription, ObserveError> {
            if self.unsupported {
                return Err(ObserveError::Unsupported);
            }
            let active = Rc::new(Cell::new(true));
            self.registrations.borrow_mut().push(Registration {
                threshold,
                callback: on_change,
                active: Rc::clone(&active),
            });
            Ok(FakeSubscription { active })
        }
    }

    impl FakeObserver {
        /// Returns false when the region is no longer observed.
        fn deliver(&self, index: usize, fraction: f64) -> bool {
            let mut registrations = self.registrations.borrow_mut();
            let registration = &mut registrations[index];
            if !registration.active.get() {
                return false;
            }
            if (registration.callback)(fraction).is_break() {
                registration.active.set(false);
            }
            true
        }

        fn is_active(&self, index: usize) -> bool {
            self.registrations.borrow()[index].active.get()
        }
    }

    fn counting() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    #[test]
    fn threshold_is_clamped_into_unit_range() {
        assert_eq!(RevealConfig::new(-0.5).threshold(), 0.0);
        assert_eq!(RevealConfig::new(1.7).threshold(), 1.0);
        assert_eq!(RevealConfig::new(f64::NAN).threshold(), 1.0);
        assert_eq!(RevealConfig::new(0.3).threshold(), 0.3);
    }

    #[test]
    fn state_flips_once_and_never_reverts() {
        let mut state = RevealState::new(RevealConfig::new(0.5));
        assert!(!state.record(0.9), "not observing yet");
        assert!(state.begin());
        assert!(!state.begin());
        assert!(!state.record(0.49));
        assert!(state.record(0.5));
        assert!(!state.record(1.0));
        assert!(!state.record(0.0));
        assert!(state.has_entered_view());
        state.tear_down();
        assert!(state.has_entered_view());
        assert_eq!(state.phase(), RevealPhase::TornDown);
    }

    #[test]
    fn flag_matches_any_fraction_meeting_threshold() {
        let thresholds = [0.0, 0.2, 0.3, 0.5, 1.0];
        let sequences: [&[f64]; 4] = [&[0.1, 0.15], &[0.25, 0.6, 0.1], &[1.0], &[0.0, 0.05]];

        for &t in &thresholds {
            for seq in &sequences {
                let observer = FakeObserver::default();
                let (count, on_reveal) = counting();
                let watch = RevealWatch::start(&observer, &(), RevealConfig::new(t), on_reveal);

                let mut seen_match = false;
                for &f in seq.iter() {
                    observer.deliver(0, f);
                    seen_match |= f >= t;
                    assert_eq!(watch.has_entered_view(), seen_match, "t={} seq={:?}", t, seq);
                }
                assert_eq!(count.get(), u32::from(seen_match));
            }
        }
    }

    #[test]
    fn stops_observing_right_after_the_flip() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting();
        let watch = RevealWatch::start(&observer, &(), RevealConfig::new(0.3), on_reveal);
        assert_eq!(observer.registrations.borrow()[0].threshold, 0.3);

        assert!(observer.deliver(0, 0.1));
        assert!(observer.deliver(0, 0.2));
        assert!(!watch.has_entered_view());
        assert!(observer.deliver(0, 0.35));
        assert!(watch.has_entered_view());
        assert_eq!(count.get(), 1);

        assert!(!observer.is_active(0));
        assert!(!observer.deliver(0, 0.1), "fourth value must not reach the region");
        assert!(watch.has_entered_view());
        assert!(!watch.is_observing());
    }

    #[test]
    fn detaching_before_threshold_cancels_observation() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting();
        let watch = RevealWatch::start(&observer, &(), RevealConfig::new(0.5), on_reveal);

        observer.deliver(0, 0.2);
        assert!(watch.is_observing());
        drop(watch);

        assert!(!observer.is_active(0));
        assert!(!observer.deliver(0, 0.9));
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn missing_capability_reveals_immediately() {
        let observer = FakeObserver {
            unsupported: true,
            ..FakeObserver::default()
        };
        let (count, on_reveal) = counting();
        let watch = RevealWatch::start(&observer, &(), RevealConfig::new(0.9), on_reveal);

        assert!(watch.has_entered_view());
        assert_eq!(watch.phase(), RevealPhase::Revealed);
        assert!(!watch.is_observing());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn remounting_starts_from_a_fresh_state() {
        let observer = FakeObserver::default();
        let (_, on_reveal) = counting();
        let first = RevealWatch::start(&observer, &(), RevealConfig::new(0.2), on_reveal);
        observer.deliver(0, 0.4);
        assert!(first.has_entered_view());
        drop(first);

        let (count, on_reveal) = counting();
        let second = RevealWatch::start(&observer, &(), RevealConfig::new(0.2), on_reveal);
        assert!(!second.has_entered_view());
        assert!(second.is_observing());
        observer.deliver(1, 0.25);
        assert!(second.has_entered_view());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn independent_regions_do_not_affect_each_other() {
        let observer = FakeObserver::default();
        let (a_count, a_reveal) = counting();
        let (b_count, b_reveal) = counting();
        let a = RevealWatch::start(&observer, &(), RevealConfig::new(0.3), a_reveal);
        let b = RevealWatch::start(&observer, &(), RevealConfig::new(0.3), b_reveal);

        observer.deliver(1, 0.8);
        assert!(!a.has_entered_view());
        assert!(b.has_entered_view());
        assert_eq!((a_count.get(), b_count.get()), (0, 1));
        assert!(observer.is_active(0));
    }

    #[test]
    fn reveal_classes_and_stagger() {
        assert_eq!(reveal_class(Entrance::Rise, false), "reveal reveal-rise");
        assert_eq!(reveal_class(Entrance::FromLeft, true), "reveal reveal-from-left is-visible");
        assert_eq!(stagger(0, 200, 0), "transition-delay: 0ms;");
        assert_eq!(stagger(3, 150, 200), "transition-delay: 650ms;");
    }
}
