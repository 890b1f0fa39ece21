//! Boolean "scrolled past N" state, sampled at most once per frame.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{frame::FrameScheduler, viewport::Viewport};

pub const DEFAULT_THRESHOLD: f64 = 300.0;

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

struct Toggle<S: FrameScheduler, V> {
    threshold: f64,
    visible: bool,
    pending: Option<S::Handle>,
    recomputations: usize,
    scheduler: S,
    viewport: V,
    on_change: Rc<dyn Fn(bool)>,
}

impl<S: FrameScheduler, V> Drop for Toggle<S, V> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }
}

/// Scroll-threshold flag driving the back-to-top control and the header
/// background.
///
/// Scroll events only request a frame; the offset is read inside the frame
/// callback, so any number of events between two frames costs one update.
pub struct ScrollThresholdToggle<S: FrameScheduler, V> {
    toggle: Rc<RefCell<Toggle<S, V>>>,
}

impl<S, V> ScrollThresholdToggle<S, V>
where
    S: FrameScheduler + 'static,
    V: Viewport + 'static,
{
    pub fn new(
        threshold: f64,
        scheduler: S,
        viewport: V,
        on_change: impl Fn(bool) + 'static,
    ) -> Self {
        Self {
            toggle: Rc::new(RefCell::new(Toggle {
                threshold,
                visible: false,
                pending: None,
                recomputations: 0,
                scheduler,
                viewport,
                on_change: Rc::new(on_change),
            })),
        }
    }

    /// Sample right away, for pages restored or linked mid-scroll.
    pub fn mount(&self) {
        let sink = {
            let mut toggle = self.toggle.borrow_mut();
            recompute(&mut toggle);
            Rc::clone(&toggle.on_change)
        };
        sink(self.is_visible());
    }

    pub fn on_scroll(&self) {
        if self.toggle.borrow().pending.is_some() {
            return;
        }
        let weak: Weak<RefCell<Toggle<S, V>>> = Rc::downgrade(&self.toggle);
        let handle = self
            .toggle
            .borrow()
            .scheduler
            .request_frame(Box::new(move |_| {
                if let Some(toggle) = weak.upgrade() {
                    on_frame(&toggle);
                }
            }));
        self.toggle.borrow_mut().pending = handle;
    }

    pub fn is_visible(&self) -> bool {
        self.toggle.borrow().visible
    }

    pub fn threshold(&self) -> f64 {
        self.toggle.borrow().threshold
    }

    /// Number of times the offset has been sampled.
    pub fn recomputations(&self) -> usize {
        self.toggle.borrow().recomputations
    }
}

fn recompute<S: FrameScheduler, V: Viewport>(toggle: &mut Toggle<S, V>) -> bool {
    let offset = toggle.viewport.scroll_offset();
    let visible = is_past_threshold(offset, toggle.threshold);
    toggle.recomputations += 1;
    let changed = visible != toggle.visible;
    toggle.visible = visible;
    changed
}

fn on_frame<S: FrameScheduler, V: Viewport>(toggle: &Rc<RefCell<Toggle<S, V>>>) {
    let (changed, visible, sink) = {
        let mut t = toggle.borrow_mut();
        t.pending = None;
        let changed = recompute(&mut t);
        (changed, t.visible, Rc::clone(&t.on_change))
    };
    if changed {
        sink(visible);
    }
}
