/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Something that can run a callback on the next rendered frame.
///
/// Browser builds wrap `requestAnimationFrame`; tests drive frames by hand so
/// animations can be single-stepped without wall-clock timing.
pub trait FrameScheduler {
    type Handle;

    /// Queue `callback` for the next frame. `None` means the request could not
    /// be made and the callback will never run.
    fn request_frame(&self, callback: FrameCallback) -> Option<Self::Handle>;

    fn cancel_frame(&self, handle: Self::Handle);
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserFrames;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{request_animation_frame_with_handle, window, AnimationFrameRequestHandle};

    use super::{FrameCallback, FrameScheduler};

    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserFrames;

    fn now() -> f64 {
        window()
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    impl FrameScheduler for BrowserFrames {
        type Handle = AnimationFrameRequestHandle;

        fn request_frame(&self, callback: FrameCallback) -> Option<Self::Handle> {
            match request_animation_frame_with_handle(move || callback(now())) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    log::warn!("requestAnimationFrame failed: {err:?}");
                    None
                }
            }
        }

        fn cancel_frame(&self, handle: Self::Handle) {
            handle.cancel();
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::{cell::RefCell, rc::Rc};

    use super::{FrameCallback, FrameScheduler};

    #[derive(Default)]
    struct Queue {
        next_id: u64,
        queued: Vec<(u64, FrameCallback)>,
        requested: usize,
        cancelled: usize,
    }

    /// Frame scheduler whose frames only run when the test says so.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().queued.len()
        }

        pub fn requested(&self) -> usize {
            self.queue.borrow().requested
        }

        pub fn cancelled(&self) -> usize {
            self.queue.borrow().cancelled
        }

        /// Run every callback queued before this frame. Callbacks requested while
        /// the frame runs wait for the next one, as in a browser.
        pub fn run_frame(&self, now: f64) -> usize {
            let batch = std::mem::take(&mut self.queue.borrow_mut().queued);
            let count = batch.len();
            for (_, callback) in batch {
                callback(now);
            }
            count
        }
    }

    impl FrameScheduler for ManualScheduler {
        type Handle = u64;

        fn request_frame(&self, callback: FrameCallback) -> Option<u64> {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            queue.requested += 1;
            queue.queued.push((id, callback));
            Some(id)
        }

        fn cancel_frame(&self, handle: u64) {
            let mut queue = self.queue.borrow_mut();
            let before = queue.queued.len();
            queue.queued.retain(|(id, _)| *id != handle);
            if queue.queued.len() != before {
                queue.cancelled += 1;
            }
        }
    }

    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn test_requests_run_on_next_frame_only() {
            let scheduler = ManualScheduler::default();
            let hits = Rc::new(Cell::new(0));

            let inner = scheduler.clone();
            let outer_hits = Rc::clone(&hits);
            scheduler.request_frame(Box::new(move |_| {
                outer_hits.set(outer_hits.get() + 1);
                let nested_hits = Rc::clone(&outer_hits);
                inner.request_frame(Box::new(move |_| nested_hits.set(nested_hits.get() + 10)));
            }));

            assert_eq!(scheduler.run_frame(0.0), 1);
            assert_eq!(hits.get(), 1);
            assert_eq!(scheduler.pending(), 1);
            assert_eq!(scheduler.run_frame(16.0), 1);
            assert_eq!(hits.get(), 11);
        }

        #[test]
        fn test_cancelled_request_never_runs() {
            let scheduler = ManualScheduler::default();
            let ran = Rc::new(Cell::new(false));
            let flag = Rc::clone(&ran);
            let handle = scheduler
                .request_frame(Box::new(move |_| flag.set(true)))
                .unwrap();
            scheduler.cancel_frame(handle);

            assert_eq!(scheduler.run_frame(0.0), 0);
            assert!(!ran.get());
            assert_eq!(scheduler.cancelled(), 1);
        }
    }
}
