/// One observation of a page section from an intersection callback batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionEntry {
    pub id: String,
    /// Top edge relative to the viewport; used to break ties.
    pub top: f64,
    pub is_intersecting: bool,
}

/// Tracks which section currently crosses the viewport midline.
///
/// Sections are observed with [`RootMargin::centered_line`], so at most the
/// sections spanning the midline report as intersecting. When a single batch
/// has several, the topmost one wins (ties on position go to the smaller id).
/// A batch with no intersecting entries keeps the previous section active.
///
/// [`RootMargin::centered_line`]: crate::visibility::RootMargin::centered_line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    current: Option<String>,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Whether a `#id` navigation link points at the active section.
    pub fn is_active(&self, href: &str) -> bool {
        self.current
            .as_deref()
            .zip(href.strip_prefix('#'))
            .is_some_and(|(current, id)| current == id)
    }

    /// Apply one callback batch. Returns true when the active section changed.
    pub fn observe<'a, I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = &'a SectionEntry>,
    {
        let winner = entries
            .into_iter()
            .filter(|e| e.is_intersecting)
            .min_by(|a, b| a.top.total_cmp(&b.top).then_with(|| a.id.cmp(&b.id)));
        match winner {
            Some(entry) if self.current.as_deref() != Some(entry.id.as_str()) => {
                self.current = Some(entry.id.clone());
                true
            }
            _ => false,
        }
    }
}
