//! Campaign date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The inclusive date range during which a campaign is shown to customers.
///
/// Dates are calendar days (`YYYY-MM-DD`, no time zone); a campaign is active
/// on every day from `start` through `end`, both ends inclusive. Comparing
/// parsed `NaiveDate`s matches the lexical ordering of well-formed ISO date
/// strings, which is how the window was originally evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWindow {
    /// First day the campaign is active.
    pub start: NaiveDate,
    /// Last day the campaign is active.
    pub end: NaiveDate,
}

impl CampaignWindow {
    /// Create a window.
    ///
    /// Returns `None` if `end` precedes `start`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Whether the campaign is active on the given day.
    #[must_use]
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.start <= today && today <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().expect("valid date")
    }

    #[test]
    fn test_active_inside_window() {
        let window = CampaignWindow::new(day("2026-08-01"), day("2026-08-31")).expect("ordered");
        assert!(window.is_active_on(day("2026-08-15")));
    }

    #[test]
    fn test_boundary_days_inclusive() {
        let window = CampaignWindow::new(day("2026-08-01"), day("2026-08-31")).expect("ordered");
        assert!(window.is_active_on(day("2026-08-01")));
        assert!(window.is_active_on(day("2026-08-31")));
    }

    #[test]
    fn test_inactive_outside_window() {
        let window = CampaignWindow::new(day("2026-08-01"), day("2026-08-31")).expect("ordered");
        assert!(!window.is_active_on(day("2026-07-31")));
        assert!(!window.is_active_on(day("2026-09-01")));
    }

    #[test]
    fn test_single_day_window() {
        let window = CampaignWindow::new(day("2026-08-29"), day("2026-08-29")).expect("ordered");
        assert!(window.is_active_on(day("2026-08-29")));
        assert!(!window.is_active_on(day("2026-08-30")));
    }

    #[test]
    fn test_inverted_window_rejected() {
        assert!(CampaignWindow::new(day("2026-08-31"), day("2026-08-01")).is_none());
    }
}
