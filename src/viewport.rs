pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    /// Animated scrolling unless the user asked for reduced motion.
    pub fn respecting(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self::Instant
        } else {
            Self::Smooth
        }
    }
}

/// Read access to the scroll position plus the one mutation the page performs.
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn prefers_reduced_motion(&self) -> bool;

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// Back-to-top action: jump or glide to offset 0 depending on motion preference.
pub fn scroll_to_top<V: Viewport + ?Sized>(viewport: &V) -> ScrollBehavior {
    let behavior = ScrollBehavior::respecting(viewport.prefers_reduced_motion());
    viewport.scroll_to(0.0, behavior);
    behavior
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserViewport;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{document, window};
    use web_sys::{ScrollIntoViewOptions, ScrollToOptions};

    use super::{ScrollBehavior, Viewport, REDUCED_MOTION_QUERY};

    impl From<ScrollBehavior> for web_sys::ScrollBehavior {
        fn from(value: ScrollBehavior) -> Self {
            match value {
                ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
                ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            }
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserViewport;

    impl BrowserViewport {
        /// Bring `#{id}` into view. Returns false when no such element exists.
        pub fn scroll_to_section(&self, id: &str) -> bool {
            let Some(target) = document().get_element_by_id(id) else {
                return false;
            };
            let behavior = ScrollBehavior::respecting(self.prefers_reduced_motion());
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(behavior.into());
            target.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
    }

    impl Viewport for BrowserViewport {
        fn scroll_offset(&self) -> f64 {
            let win = window();
            match win.scroll_y() {
                Ok(y) if y > 0.0 => y,
                _ => document()
                    .document_element()
                    .map(|root| f64::from(root.scroll_top()))
                    .unwrap_or(0.0),
            }
        }

        fn prefers_reduced_motion(&self) -> bool {
            window()
                .match_media(REDUCED_MOTION_QUERY)
                .ok()
                .flatten()
                .map(|mq| mq.matches())
                .unwrap_or(false)
        }

        fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(behavior.into());
            window().scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(test)]
pub(crate) mod simulated {
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
    };

    use super::{ScrollBehavior, Viewport};

    #[derive(Default)]
    struct State {
        offset: Cell<f64>,
        reduced_motion: Cell<bool>,
        scrolls: RefCell<Vec<(f64, ScrollBehavior)>>,
    }

    /// In-memory viewport; clones share the same state.
    #[derive(Clone, Default)]
    pub struct SimulatedViewport {
        state: Rc<State>,
    }

    impl SimulatedViewport {
        pub fn at(offset: f64) -> Self {
            let viewport = Self::default();
            viewport.set_offset(offset);
            viewport
        }

        pub fn set_offset(&self, offset: f64) {
            self.state.offset.set(offset);
        }

        pub fn set_reduced_motion(&self, reduced: bool) {
            self.state.reduced_motion.set(reduced);
        }

        pub fn scrolls(&self) -> Vec<(f64, ScrollBehavior)> {
            self.state.scrolls.borrow().clone()
        }
    }

    impl Viewport for SimulatedViewport {
        fn scroll_offset(&self) -> f64 {
            self.state.offset.get()
        }

        fn prefers_reduced_motion(&self) -> bool {
            self.state.reduced_motion.get()
        }

        fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
            self.state.scrolls.borrow_mut().push((top, behavior));
            // instant jumps land immediately; smooth scrolls are left in flight
            if behavior == ScrollBehavior::Instant {
                self.state.offset.set(top);
            }
        }
    }
}
