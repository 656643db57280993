use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use log::debug;

/// Timing for a counter that climbs from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampConfig {
    pub target: u32,
    pub duration_ms: u32,
    pub tick_interval_ms: u32,
}

impl RampConfig {
    pub const fn new(target: u32, duration_ms: u32, tick_interval_ms: u32) -> Self {
        Self { target, duration_ms, tick_interval_ms }
    }

    /// Amount added per tick. `None` when the ramp should finish on its first tick.
    pub fn increment(&self) -> Option<f64> {
        if self.duration_ms == 0 || self.tick_interval_ms == 0 {
            return None;
        }
        let ticks = self.duration_ms as f64 / self.tick_interval_ms as f64;
        Some(self.target as f64 / ticks)
    }

    pub fn max_ticks(&self) -> u32 {
        if self.tick_interval_ms == 0 {
            return 1;
        }
        self.duration_ms.div_ceil(self.tick_interval_ms).max(1)
    }
}

#[derive(Debug, Clone)]
pub struct CounterRamp {
    config: RampConfig,
    accumulated: f64,
    current: u32,
    finished: bool,
}

impl CounterRamp {
    pub fn new(config: RampConfig) -> Self {
        Self {
            config,
            accumulated: 0.0,
            current: 0,
            finished: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one tick and returns the value to display, or `None` once done.
    pub fn tick(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        let target = self.config.target as f64;
        match self.config.increment() {
            Some(step) if step.is_finite() => self.accumulated += step,
            _ => self.accumulated = target,
        }
        if self.accumulated >= target {
            self.accumulated = target;
            self.finished = true;
        }
        self.current = (self.accumulated.ceil() as u32).min(self.config.target);
        Some(self.current)
    }
}

/// Host capability for calling back on a fixed period.
/// The returned handle stops the ticks when dropped.
pub trait Ticker {
    type Handle;

    fn every(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// `Ticker` over the browser's `setInterval`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Interval;

    fn every(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(interval_ms, on_tick)
    }
}

/// A ramp being driven by a ticker. The ticker handle is released when the
/// ramp finishes or when the driver is dropped, whichever comes first, and no
/// value reaches the sink after that.
pub struct RampDriver<H> {
    handle: Rc<RefCell<Option<H>>>,
}

impl<H: 'static> RampDriver<H> {
    pub fn start<T>(ticker: &T, config: RampConfig, sink: impl Fn(u32) + 'static) -> Self
    where
        T: Ticker<Handle = H>,
    {
        debug!(
            "counter ramp to {} in at most {} ticks",
            config.target,
            config.max_ticks()
        );
        let handle: Rc<RefCell<Option<H>>> = Rc::new(RefCell::new(None));
        let slot: Weak<RefCell<Option<H>>> = Rc::downgrade(&handle);
        let mut ramp = CounterRamp::new(config);

        let on_tick = Box::new(move || {
            // Driver gone: a stray tick must not reach the sink
            let Some(slot) = slot.upgrade() else {
                return;
            };
            if let Some(next) = ramp.tick() {
                sink(next);
            }
            if ramp.is_finished() {
                let finished = slot.borrow_mut().take();
                if finished.is_some() {
                    debug!("counter reached {}, stopping", ramp.current());
                }
                drop(finished);
            }
        });

        *handle.borrow_mut() = Some(ticker.every(config.tick_interval_ms, on_tick));
        Self { handle }
    }
}

impl<H> Drop for RampDriver<H> {
    fn drop(&mut self) {
        let handle = self.handle.borrow_mut().take();
        drop(handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn run(config: RampConfig) -> Vec<u32> {
        let mut ramp = CounterRamp::new(config);
        let mut values = Vec::new();
        while let Some(value) = ramp.tick() {
            values.push(value);
            assert!(values.len() <= 10_000, "ramp never finished");
        }
        values
    }

    #[test]
    fn demo_ramp_lands_exactly_on_target() {
        let config = RampConfig::new(500, 2000, 16);
        let values = run(config);

        assert_eq!(values.last().copied(), Some(500));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(values.len() as u32 <= config.max_ticks());
        assert_eq!(config.max_ticks(), 125);
    }

    #[test]
    fn uneven_increment_rounds_up_and_snaps() {
        let values = run(RampConfig::new(7, 100, 30));

        assert_eq!(values.last().copied(), Some(7));
        assert!(values.iter().all(|&v| v <= 7));
        assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
        // 7 / (100 / 30) = 2.1 per tick; first tick shows ceil(2.1)
        assert_eq!(values[0], 3);
    }

    #[test]
    fn finished_ramp_stays_frozen() {
        let mut ramp = CounterRamp::new(RampConfig::new(10, 20, 10));
        assert_eq!(ramp.tick(), Some(5));
        assert_eq!(ramp.tick(), Some(10));
        assert!(ramp.is_finished());
        assert_eq!(ramp.tick(), None);
        assert_eq!(ramp.current(), 10);
    }

    #[test]
    fn degenerate_timings_finish_on_first_tick() {
        assert_eq!(run(RampConfig::new(42, 0, 16)), vec![42]);
        assert_eq!(run(RampConfig::new(42, 2000, 0)), vec![42]);
        assert_eq!(run(RampConfig::new(0, 2000, 16)), vec![0]);
    }

    #[derive(Default)]
    struct FakeTicker {
        on_tick: RefCell<Option<Box<dyn FnMut()>>>,
        released: Rc<Cell<bool>>,
    }

    struct FakeHandle {
        released: Rc<Cell<bool>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.released.set(true);
        }
    }

    impl Ticker for FakeTicker {
        type Handle = FakeHandle;

        fn every(&self, _interval_ms: u32, on_tick: Box<dyn FnMut()>) -> FakeHandle {
            *self.on_tick.borrow_mut() = Some(on_tick);
            FakeHandle {
                released: Rc::clone(&self.released),
            }
        }
    }

    impl FakeTicker {
        /// Fires the stored callback even after its handle is gone, like a
        /// host that delivers one last queued tick.
        fn fire(&self) {
            let taken = self.on_tick.borrow_mut().take();
            if let Some(mut on_tick) = taken {
                on_tick();
                *self.on_tick.borrow_mut() = Some(on_tick);
            }
        }
    }

    fn recording_sink() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |value: u32| seen.borrow_mut().push(value)
        };
        (seen, sink)
    }

    #[test]
    fn dropping_driver_mid_ramp_stops_all_updates() {
        let ticker = FakeTicker::default();
        let (seen, sink) = recording_sink();
        let driver = RampDriver::start(&ticker, RampConfig::new(100, 1000, 100), sink);

        ticker.fire();
        ticker.fire();
        ticker.fire();
        assert_eq!(*seen.borrow(), vec![10, 20, 30]);
        assert!(!ticker.released.get());

        drop(driver);
        assert!(ticker.released.get());

        ticker.fire();
        ticker.fire();
        assert_eq!(*seen.borrow(), vec![10, 20, 30]);
    }

    #[test]
    fn ticker_is_released_when_ramp_finishes() {
        let ticker = FakeTicker::default();
        let (seen, sink) = recording_sink();
        let _driver = RampDriver::start(&ticker, RampConfig::new(10, 20, 10), sink);

        ticker.fire();
        assert!(!ticker.released.get());
        ticker.fire();
        assert!(ticker.released.get());
        assert_eq!(*seen.borrow(), vec![5, 10]);

        ticker.fire();
        assert_eq!(*seen.borrow(), vec![5, 10]);
    }
}
