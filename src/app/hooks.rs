//! Reactive bindings between the scroll engines and the browser.
//!
//! Everything that touches `window` lives behind `hydrate`; on the server the
//! hooks hand back their initial state and do nothing else.

use leptos::{html::ElementType, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsCast;

use crate::{
    active_section::ActiveSectionTracker,
    preference::DarkMode,
    visibility::{RootMargin, VisibilityTrigger},
};
#[cfg(feature = "hydrate")]
use crate::{
    active_section::SectionEntry,
    count_up::CountUpAnimation,
    frame::BrowserFrames,
    preference::LocalStorage,
    scroll_threshold::ScrollThresholdToggle,
    viewport::{self, BrowserViewport},
};

/// Fire-once "has been on screen" flag for `target`.
pub fn use_in_view<E>(target: NodeRef<E>, margin: RootMargin) -> Signal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
    web_sys::Element: From<E::Output>,
{
    let (in_view, set_in_view) = signal(false);

    let trigger = StoredValue::new(VisibilityTrigger::once());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries.iter().any(|e| e.is_intersecting());
            if trigger.try_update_value(|t| t.observe(hit)).unwrap_or(hit) {
                set_in_view.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(margin.to_string()),
    );

    Effect::new(move |_| {
        if in_view.get() && trigger.with_value(VisibilityTrigger::is_settled) {
            // latched, the observer has nothing left to report
            stop();
        }
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let supported = js_sys::Reflect::has(&window(), &"IntersectionObserver".into())
            .unwrap_or(false);
        if !supported {
            log::warn!("IntersectionObserver unavailable, revealing content");
            set_in_view.set(true);
        }
    });

    in_view.into()
}

/// True while the page is scrolled past `threshold`.
pub fn use_scroll_threshold(threshold: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_event_listener, use_window};

        let toggle =
            StoredValue::new_local(None::<ScrollThresholdToggle<BrowserFrames, BrowserViewport>>);
        Effect::new(move |_| {
            let t = ScrollThresholdToggle::new(threshold, BrowserFrames, BrowserViewport, move |v| {
                set_past.set(v)
            });
            t.mount();
            toggle.set_value(Some(t));
        });
        let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| {
            toggle.with_value(|t| {
                if let Some(t) = t {
                    t.on_scroll();
                }
            });
        });
        on_cleanup(move || {
            // dropping the toggle cancels its pending frame
            toggle.try_update_value(|t| t.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (threshold, set_past);

    past
}

/// Counts from 0 to `target` each time `trigger` turns true.
pub fn use_count_up(target: u32, duration_ms: u32, trigger: Signal<bool>) -> ReadSignal<u32> {
    let (count, set_count) = signal(0u32);

    #[cfg(feature = "hydrate")]
    {
        let animation = StoredValue::new_local(CountUpAnimation::new(
            target,
            duration_ms,
            BrowserFrames,
            move |v| set_count.set(v),
        ));
        Effect::new(move |_| {
            let on = trigger.get();
            animation.with_value(|a| a.set_trigger(on));
        });
        on_cleanup(move || {
            animation.try_with_value(|a| a.cancel());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, duration_ms, trigger, set_count);

    count
}

#[cfg(feature = "hydrate")]
mod section_observer {
    use leptos::prelude::document;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::{active_section::SectionEntry, visibility::RootMargin};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// One intersection observer over every element matching a selector.
    /// Disconnects when dropped.
    pub struct SectionObserver {
        observer: IntersectionObserver,
        _callback: Callback,
    }

    impl SectionObserver {
        pub fn observe_all(
            selector: &str,
            margin: &RootMargin,
            mut on_entries: impl FnMut(Vec<SectionEntry>) + 'static,
        ) -> Result<Self, JsValue> {
            let callback: Callback = Closure::new(move |entries: js_sys::Array, _| {
                let entries = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|e| SectionEntry {
                        id: e.target().id(),
                        top: e.bounding_client_rect().top(),
                        is_intersecting: e.is_intersecting(),
                    })
                    .collect::<Vec<_>>();
                on_entries(entries);
            });

            let init = IntersectionObserverInit::new();
            init.set_root_margin(&margin.to_string());
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

            let sections = document().query_selector_all(selector)?;
            for i in 0..sections.length() {
                if let Some(el) = sections.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    observer.observe(&el);
                }
            }
            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SectionObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Tracks the section crossing the viewport midline.
pub fn use_active_section(margin: RootMargin) -> ReadSignal<ActiveSectionTracker> {
    let (active, set_active) = signal(ActiveSectionTracker::new());

    #[cfg(feature = "hydrate")]
    {
        use section_observer::SectionObserver;

        let observer = StoredValue::new_local(None::<SectionObserver>);
        Effect::new(move |_| {
            let on_entries = move |entries: Vec<SectionEntry>| {
                set_active.maybe_update(|tracker| tracker.observe(&entries));
            };
            match SectionObserver::observe_all("section[id]", &margin, on_entries) {
                Ok(obs) => observer.set_value(Some(obs)),
                Err(err) => log::warn!("active section tracking disabled: {err:?}"),
            }
        });
        on_cleanup(move || {
            observer.try_update_value(|o| o.take());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (margin, set_active);

    active
}

/// Dark/light preference and a toggle that applies and persists it.
pub fn use_dark_mode(key: &'static str) -> (ReadSignal<DarkMode>, impl Fn() + Copy + 'static) {
    let (mode, set_mode) = signal(DarkMode::default());
    #[cfg(not(feature = "hydrate"))]
    let _ = key;

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let stored = DarkMode::load(&LocalStorage, key);
            apply_theme(stored);
            set_mode.set(stored);
        },
        true,
    );

    let toggle = move || {
        let next = mode.get_untracked().toggled();
        set_mode.set(next);
        #[cfg(feature = "hydrate")]
        {
            apply_theme(next);
            if let Err(err) = next.save(&LocalStorage, key) {
                log::warn!("{err}");
            }
        }
    };
    (mode, toggle)
}

#[cfg(feature = "hydrate")]
fn apply_theme(mode: DarkMode) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.class_list().toggle_with_force("dark", mode.is_dark()) {
            log::warn!("couldn't apply theme: {err:?}");
        }
    }
}

/// Lock or release page scrolling behind an overlay.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    if let Some(body) = document().body() {
        let overflow = if locked { "hidden" } else { "unset" };
        if let Err(err) = body.style().set_property("overflow", overflow) {
            log::warn!("couldn't set body overflow: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = locked;
}

/// Bring the section behind a `#id` link into view.
pub fn scroll_to_section(href: &str) {
    let id = href.trim_start_matches('#');
    #[cfg(feature = "hydrate")]
    if !BrowserViewport.scroll_to_section(id) {
        log::debug!("no section with id {id}");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    viewport::scroll_to_top(&BrowserViewport);
}
