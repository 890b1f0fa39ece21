use chrono::{DateTime, Datelike};

use crate::{
    count_up::DEFAULT_DURATION_MS,
    preference::DARK_MODE_KEY,
    scroll_threshold::DEFAULT_THRESHOLD,
    visibility::{RootMargin, REVEAL_MARGIN},
};

/// Page-wide tunables, provided once through context at the app root.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub splash_ms: u64,
    pub back_to_top_threshold: f64,
    pub header_scrolled_threshold: f64,
    pub count_up_ms: u32,
    pub reveal_margin: RootMargin,
    pub active_margin: RootMargin,
    pub dark_mode_key: &'static str,
    pub resume_path: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            splash_ms: 3500,
            back_to_top_threshold: DEFAULT_THRESHOLD,
            header_scrolled_threshold: 20.0,
            count_up_ms: DEFAULT_DURATION_MS,
            reveal_margin: REVEAL_MARGIN.parse().unwrap_or_default(),
            active_margin: RootMargin::centered_line(),
            dark_mode_key: DARK_MODE_KEY,
            resume_path: "/HamoudiBenarbaResume.pdf",
        }
    }
}

/// Stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Year shown in the footer. Falls back to the current year if the stamp is
/// unreadable.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or_else(|_| chrono::Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::MarginLength;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.splash_ms, 3500);
        assert_eq!(config.back_to_top_threshold, 300.0);
        assert_eq!(config.count_up_ms, 1500);
        assert_eq!(
            config.reveal_margin,
            RootMargin::uniform(MarginLength::Px(-100.0))
        );
        assert_eq!(config.dark_mode_key, "darkMode");
    }

    #[test]
    fn test_build_year_is_plausible() {
        assert!(build_year() >= 2024);
    }
}
