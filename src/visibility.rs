//! Scroll-triggered visibility.
//!
//! The browser's intersection observer does the actual observing; this module
//! holds the parts worth owning ourselves: root margins, the intersection
//! geometry they imply, and the fire-once latch that reveal animations hang off.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Margin used by section reveal animations.
pub const REVEAL_MARGIN: &str = "-100px";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Overlap test matching `isIntersecting`: touching edges count, so a
    /// zero-height root still reports the element it crosses.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.top <= other.bottom()
            && other.top <= self.bottom()
            && self.left <= other.right()
            && other.left <= self.right()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    /// Absolute length given the viewport extent along the same axis.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(pct) => extent * pct / 100.0,
        }
    }
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl FromStr for MarginLength {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            is_plain_number(n)
                .then(|| n.parse::<f64>().ok())
                .flatten()
                .ok_or_else(|| RootMarginError::InvalidLength(s.to_string()))
        };
        if let Some(n) = s.strip_suffix("px") {
            Ok(Self::Px(parse(n)?))
        } else if let Some(n) = s.strip_suffix('%') {
            Ok(Self::Percent(parse(n)?))
        } else if parse(s)? == 0.0 {
            Ok(Self::Px(0.0))
        } else {
            Err(RootMarginError::MissingUnit(s.to_string()))
        }
    }
}

/// `-?digits(.digits)?`, the subset of CSS numbers `rootMargin` accepts
/// without surprises. Exponents and a leading `+` are rejected.
fn is_plain_number(n: &str) -> bool {
    let unsigned = n.strip_prefix('-').unwrap_or(n);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    match frac {
        Some(frac) => digits(int) && !frac.is_empty() && digits(frac),
        None => !int.is_empty() && digits(int),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootMarginError {
    #[error("root margin is empty")]
    Empty,
    #[error("root margin has {0} components, expected 1 to 4")]
    TooManyComponents(usize),
    #[error("invalid margin length: {0}")]
    InvalidLength(String),
    #[error("margin length needs a px or % unit: {0}")]
    MissingUnit(String),
}

/// CSS-style offsets applied to the viewport before intersecting. Positive
/// values grow the detection area, negative values shrink it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::uniform(MarginLength::Px(0.0))
    }
}

impl RootMargin {
    pub fn uniform(length: MarginLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// Collapses the viewport onto its horizontal midline.
    pub fn centered_line() -> Self {
        Self {
            top: MarginLength::Percent(-50.0),
            right: MarginLength::Px(0.0),
            bottom: MarginLength::Percent(-50.0),
            left: MarginLength::Px(0.0),
        }
    }

    pub fn apply(&self, viewport: Rect) -> Rect {
        let top = viewport.top - self.top.resolve(viewport.height);
        let bottom = viewport.bottom() + self.bottom.resolve(viewport.height);
        let left = viewport.left - self.left.resolve(viewport.width);
        let right = viewport.right() + self.right.resolve(viewport.width);
        Rect {
            top,
            left,
            width: (right - left).max(0.0),
            height: (bottom - top).max(0.0),
        }
    }

    pub fn intersects(&self, target: &Rect, viewport: Rect) -> bool {
        target.intersects(&self.apply(viewport))
    }
}

impl FromStr for RootMargin {
    type Err = RootMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(MarginLength::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match parts.as_slice() {
            [] => return Err(RootMarginError::Empty),
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            more => return Err(RootMarginError::TooManyComponents(more.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Latch for "has this element been seen".
///
/// With `once` set the flag can only go from false to true, a single time.
/// Without it the flag mirrors the latest observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityTrigger {
    once: bool,
    visible: bool,
}

impl VisibilityTrigger {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    pub fn once() -> Self {
        Self::new(true)
    }

    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.once {
            self.visible |= is_intersecting;
        } else {
            self.visible = is_intersecting;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Nothing can change the flag any more, so the observer may stop.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }
}

#[cfg(test)]
pub(crate) mod simulated {
    use std::collections::HashMap;

    use super::{Rect, RootMargin};

    #[derive(Debug, Clone, PartialEq)]
    pub struct Entry {
        pub id: String,
        pub rect: Rect,
        pub is_intersecting: bool,
    }

    /// Reports entries the way an intersection observer does: everything on the
    /// first check, afterwards only targets whose state changed.
    pub struct IntersectionSimulator {
        margin: RootMargin,
        targets: Vec<(String, Rect)>,
        last: HashMap<String, bool>,
    }

    impl IntersectionSimulator {
        pub fn new(margin: RootMargin, targets: Vec<(String, Rect)>) -> Self {
            Self {
                margin,
                targets,
                last: HashMap::new(),
            }
        }

        /// Entries for a viewport scrolled to `offset` with the given size.
        /// Target rects are in document coordinates.
        pub fn scroll_to(&mut self, offset: f64, width: f64, height: f64) -> Vec<Entry> {
            let viewport = Rect::new(offset, 0.0, width, height);
            let mut entries = Vec::new();
            for (id, rect) in &self.targets {
                let hit = self.margin.intersects(rect, viewport);
                if self.last.insert(id.clone(), hit) != Some(hit) {
                    entries.push(Entry {
                        id: id.clone(),
                        rect: Rect::new(rect.top - offset, rect.left, rect.width, rect.height),
                        is_intersecting: hit,
                    });
                }
            }
            entries
        }
    }
}

#[cfg(test)]
mod tests {
    use super::simulated::IntersectionSimulator;
    use super::*;

    #[test]
    fn test_parse_single_component() {
        let margin: RootMargin = "-100px".parse().unwrap();
        assert_eq!(margin, RootMargin::uniform(MarginLength::Px(-100.0)));
    }

    #[test]
    fn test_parse_css_shorthand() {
        let margin: RootMargin = "-50% 0px -50% 0px".parse().unwrap();
        assert_eq!(margin, RootMargin::centered_line());

        let margin: RootMargin = "10px 5%".parse().unwrap();
        assert_eq!(margin.top, MarginLength::Px(10.0));
        assert_eq!(margin.bottom, MarginLength::Px(10.0));
        assert_eq!(margin.left, MarginLength::Percent(5.0));

        let margin: RootMargin = "1px 2px 3px".parse().unwrap();
        assert_eq!(margin.left, MarginLength::Px(2.0));
        assert_eq!(margin.bottom, MarginLength::Px(3.0));
    }

    #[test]
    fn test_parse_bare_zero() {
        let margin: RootMargin = "0".parse().unwrap();
        assert_eq!(margin, RootMargin::default());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<RootMargin>(), Err(RootMarginError::Empty));
        assert_eq!(
            "1px 1px 1px 1px 1px".parse::<RootMargin>(),
            Err(RootMarginError::TooManyComponents(5))
        );
        assert_eq!(
            "12".parse::<RootMargin>(),
            Err(RootMarginError::MissingUnit("12".to_string()))
        );
        assert!(matches!(
            "abcpx".parse::<RootMargin>(),
            Err(RootMarginError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_css_numbers() {
        for input in ["1e3px", "+5%", "px", "-px", "1.px", "0x10px", "inf%", "NaNpx"] {
            assert!(
                matches!(
                    input.parse::<RootMargin>(),
                    Err(RootMarginError::InvalidLength(_))
                ),
                "{input}"
            );
        }
        let margin: RootMargin = ".5px -12.25%".parse().unwrap();
        assert_eq!(margin.top, MarginLength::Px(0.5));
        assert_eq!(margin.left, MarginLength::Percent(-12.25));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let margin = RootMargin::centered_line();
        assert_eq!(margin.to_string(), "-50% 0px -50% 0px");
        assert_eq!(margin.to_string().parse::<RootMargin>().unwrap(), margin);
    }

    #[test]
    fn test_negative_margin_shrinks_viewport() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let shrunk = RootMargin::uniform(MarginLength::Px(-100.0)).apply(viewport);
        assert_eq!(shrunk, Rect::new(100.0, 100.0, 800.0, 600.0));

        // sitting in the outer 100px band only
        let peeking = Rect::new(750.0, 0.0, 1000.0, 400.0);
        assert!(peeking.intersects(&viewport));
        assert!(!RootMargin::uniform(MarginLength::Px(-100.0)).intersects(&peeking, viewport));
    }

    #[test]
    fn test_centered_line_is_midpoint() {
        let viewport = Rect::new(200.0, 0.0, 1000.0, 800.0);
        let line = RootMargin::centered_line().apply(viewport);
        assert_eq!(line.top, 600.0);
        assert_eq!(line.height, 0.0);
        assert!(Rect::new(500.0, 0.0, 1000.0, 200.0).intersects(&line));
        assert!(!Rect::new(601.0, 0.0, 1000.0, 200.0).intersects(&line));
    }

    #[test]
    fn test_once_trigger_never_reverts() {
        let mut trigger = VisibilityTrigger::once();
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(trigger.is_settled());
        for seen in [false, true, false, false] {
            assert!(trigger.observe(seen));
        }
    }

    #[test]
    fn test_repeating_trigger_follows_observations() {
        let mut trigger = VisibilityTrigger::new(false);
        assert!(trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(!trigger.is_settled());
    }

    #[test]
    fn test_reveal_fires_once_during_scroll() {
        let margin: RootMargin = REVEAL_MARGIN.parse().unwrap();
        let section = Rect::new(1500.0, 0.0, 1200.0, 600.0);
        let mut sim = IntersectionSimulator::new(margin, vec![("about".to_string(), section)]);
        let mut trigger = VisibilityTrigger::once();
        let mut flips = 0;
        let mut was = false;

        let offsets = (0..40)
            .map(|i| f64::from(i) * 100.0)
            .chain((0..40).rev().map(|i| f64::from(i) * 100.0));
        for offset in offsets {
            for entry in sim.scroll_to(offset, 1200.0, 800.0) {
                let now = trigger.observe(entry.is_intersecting);
                assert!(!(was && !now), "visibility reverted at {offset}");
                if now && !was {
                    flips += 1;
                }
                was = now;
            }
        }
        assert_eq!(flips, 1);
        assert!(trigger.is_visible());
    }

    #[test]
    fn test_reveal_needs_margin_depth() {
        let margin: RootMargin = REVEAL_MARGIN.parse().unwrap();
        let section = Rect::new(850.0, 0.0, 1200.0, 600.0);
        let mut sim = IntersectionSimulator::new(margin, vec![("about".to_string(), section)]);

        // 50px of the section is on screen, still inside the 100px inset
        let first = sim.scroll_to(100.0, 1200.0, 800.0);
        assert!(!first[0].is_intersecting);

        let second = sim.scroll_to(200.0, 1200.0, 800.0);
        assert!(second[0].is_intersecting);
    }
}
