//! Count-up number effect.
//!
//! [`CountUp`] is the pure state machine: feed it frame timestamps and it
//! yields the value to display. [`CountUpAnimation`] binds it to a
//! [`FrameScheduler`] so each frame schedules the next, and releases any
//! pending frame on reset or drop.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::frame::FrameScheduler;

pub const DEFAULT_DURATION_MS: u32 = 1500;

/// Exponential ease-out, `1 - 2^(-10p)`, pinned to exactly 1 at the end.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More frames are needed.
    Running(u32),
    /// The target has been reached.
    Finished(u32),
}

impl Step {
    pub fn value(self) -> u32 {
        match self {
            Step::Running(v) | Step::Finished(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    current: u32,
    target: u32,
    start: Option<f64>,
    duration_ms: u32,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            current: 0,
            target,
            start: None,
            duration_ms: duration_ms.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.start = None;
    }

    /// Advance to the frame at `now` (milliseconds). The first call after a
    /// reset marks the start of the animation.
    pub fn step(&mut self, now: f64) -> Step {
        let start = *self.start.get_or_insert(now);
        let progress = ((now - start) / f64::from(self.duration_ms)).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.current = self.target;
            return Step::Finished(self.target);
        }
        let eased = (ease_out_expo(progress) * f64::from(self.target)).round() as u32;
        // rounding may land on the target early, never past it
        self.current = eased.clamp(self.current, self.target);
        Step::Running(self.current)
    }
}

struct Driver<S: FrameScheduler> {
    counter: CountUp,
    triggered: bool,
    pending: Option<S::Handle>,
    scheduler: S,
    on_value: Rc<dyn Fn(u32)>,
}

impl<S: FrameScheduler> Driver<S> {
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for Driver<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// A [`CountUp`] driven by animation frames and started by an edge trigger.
pub struct CountUpAnimation<S: FrameScheduler> {
    driver: Rc<RefCell<Driver<S>>>,
}

impl<S: FrameScheduler + 'static> CountUpAnimation<S> {
    pub fn new(
        target: u32,
        duration_ms: u32,
        scheduler: S,
        on_value: impl Fn(u32) + 'static,
    ) -> Self {
        Self {
            driver: Rc::new(RefCell::new(Driver {
                counter: CountUp::new(target, duration_ms),
                triggered: false,
                pending: None,
                scheduler,
                on_value: Rc::new(on_value),
            })),
        }
    }

    pub fn value(&self) -> u32 {
        self.driver.borrow().counter.current()
    }

    pub fn is_running(&self) -> bool {
        self.driver.borrow().pending.is_some()
    }

    /// Only a false to true transition starts (or restarts) the animation.
    /// Going back to false stops it where it is.
    pub fn set_trigger(&self, triggered: bool) {
        let sink = {
            let mut driver = self.driver.borrow_mut();
            if driver.triggered == triggered {
                return;
            }
            driver.triggered = triggered;
            driver.cancel_pending();
            if !triggered {
                return;
            }
            driver.counter.reset();
            Rc::clone(&driver.on_value)
        };
        sink(0);
        schedule(&self.driver);
    }

    /// Release the pending frame, if any. Dropping the animation does the same.
    pub fn cancel(&self) {
        self.driver.borrow_mut().cancel_pending();
    }
}

fn schedule<S: FrameScheduler + 'static>(driver: &Rc<RefCell<Driver<S>>>) {
    let weak: Weak<RefCell<Driver<S>>> = Rc::downgrade(driver);
    let handle = driver
        .borrow()
        .scheduler
        .request_frame(Box::new(move |now| {
            if let Some(driver) = weak.upgrade() {
                on_frame(&driver, now);
            }
        }));
    driver.borrow_mut().pending = handle;
}

fn on_frame<S: FrameScheduler + 'static>(driver: &Rc<RefCell<Driver<S>>>, now: f64) {
    let (step, sink) = {
        let mut d = driver.borrow_mut();
        d.pending = None;
        if !d.triggered {
            return;
        }
        (d.counter.step(now), Rc::clone(&d.on_value))
    };
    sink(step.value());
    if let Step::Running(_) = step {
        schedule(driver);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::frame::manual::ManualScheduler;

    fn recorded(
        target: u32,
        duration_ms: u32,
    ) -> (CountUpAnimation<ManualScheduler>, ManualScheduler, Rc<RefCell<Vec<u32>>>) {
        let scheduler = ManualScheduler::default();
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        let anim = CountUpAnimation::new(target, duration_ms, scheduler.clone(), move |v| {
            sink.borrow_mut().push(v)
        });
        (anim, scheduler, values)
    }

    fn run_to_end(scheduler: &ManualScheduler, frame_ms: f64) {
        let mut now = 1000.0;
        while scheduler.run_frame(now) > 0 {
            now += frame_ms;
        }
    }

    #[test]
    fn test_ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!(ease_out_expo(0.5) > 0.5);
        assert!(ease_out_expo(0.99) < 1.0);
    }

    #[test]
    fn test_step_reaches_exact_target() {
        for target in [0, 1, 5, 8, 99, 1000, 123_457] {
            let mut counter = CountUp::new(target, DEFAULT_DURATION_MS);
            let mut now = 0.0;
            let mut last = counter.step(now);
            while let Step::Running(_) = last {
                now += 7.0;
                last = counter.step(now);
            }
            assert_eq!(last, Step::Finished(target));
            assert_eq!(counter.current(), target);
        }
    }

    #[test]
    fn test_first_step_starts_at_zero() {
        let mut counter = CountUp::new(8, 1500);
        assert_eq!(counter.step(42.0), Step::Running(0));
    }

    #[test]
    fn test_values_non_decreasing_and_bounded() {
        for target in [1, 3, 8, 50, 10_000] {
            let (anim, scheduler, values) = recorded(target, 1500);
            anim.set_trigger(true);
            run_to_end(&scheduler, 16.7);

            let values = values.borrow();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
            assert!(values.iter().all(|v| *v <= target));
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn test_clock_going_backwards_never_decreases() {
        let mut counter = CountUp::new(100, 1000);
        counter.step(0.0);
        let high = counter.step(500.0).value();
        assert_eq!(counter.step(100.0).value(), high);
    }

    #[test]
    fn test_nothing_runs_until_triggered() {
        let (anim, scheduler, values) = recorded(8, 1500);
        assert_eq!(scheduler.pending(), 0);
        anim.set_trigger(false);
        assert_eq!(scheduler.pending(), 0);
        assert!(values.borrow().is_empty());
    }

    #[test]
    fn test_trigger_is_edge_sensitive() {
        let (anim, scheduler, _) = recorded(8, 1500);
        anim.set_trigger(true);
        anim.set_trigger(true);
        assert_eq!(scheduler.requested(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_stops_requesting_after_target() {
        let (anim, scheduler, _) = recorded(5, 100);
        anim.set_trigger(true);
        run_to_end(&scheduler, 16.0);
        assert!(!anim.is_running());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(anim.value(), 5);
    }

    #[test]
    fn test_reset_cancels_pending_frame() {
        let (anim, scheduler, values) = recorded(100, 1500);
        anim.set_trigger(true);
        scheduler.run_frame(0.0);
        scheduler.run_frame(300.0);
        let held = anim.value();

        anim.set_trigger(false);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 1);
        scheduler.run_frame(600.0);
        assert_eq!(anim.value(), held);
        assert_eq!(*values.borrow().last().unwrap(), held);
    }

    #[test]
    fn test_retrigger_restarts_from_zero() {
        let (anim, scheduler, values) = recorded(10, 200);
        anim.set_trigger(true);
        run_to_end(&scheduler, 50.0);
        assert_eq!(anim.value(), 10);

        anim.set_trigger(false);
        values.borrow_mut().clear();
        anim.set_trigger(true);
        assert_eq!(anim.value(), 0);
        run_to_end(&scheduler, 50.0);

        let values = values.borrow();
        assert_eq!(values[0], 0);
        assert_eq!(*values.last().unwrap(), 10);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let (anim, scheduler, values) = recorded(100, 1500);
        anim.set_trigger(true);
        scheduler.run_frame(0.0);
        let seen = values.borrow().len();

        drop(anim);
        assert_eq!(scheduler.pending(), 0);
        scheduler.run_frame(100.0);
        assert_eq!(values.borrow().len(), seen);
    }
}
