//! Global Application State
//!
//! The navigation shell: a single in-memory page token plus the shared
//! refresh clock. Each page owns its fetched data exclusively; nothing
//! else crosses component boundaries.

use leptos::*;

/// The closed set of pages. Selecting one replaces the rendered page
/// container; there is no history stack and no deep link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Forecasting,
    Explainability,
    Map,
    Compare,
    Alerts,
    History,
    Reports,
    Access,
}

impl Page {
    /// Pages shown in the navigation bar (Home is reached via the brand).
    pub const NAV: [Page; 8] = [
        Page::Forecasting,
        Page::Explainability,
        Page::Map,
        Page::Compare,
        Page::Alerts,
        Page::History,
        Page::Reports,
        Page::Access,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Forecasting => "Forecasting",
            Page::Explainability => "Explainability",
            Page::Map => "Geo-Risk Map",
            Page::Compare => "Zone Compare",
            Page::Alerts => "Alerts",
            Page::History => "History",
            Page::Reports => "Reports",
            Page::Access => "Access",
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Currently selected page
    pub page: RwSignal<Page>,
    /// When any page last completed a successful load (epoch millis)
    pub last_refresh: RwSignal<Option<i64>>,
}

impl GlobalState {
    /// Record a completed load for the footer clock.
    pub fn mark_refreshed(&self) {
        self.last_refresh
            .set(Some(chrono::Utc::now().timestamp_millis()));
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        page: create_rw_signal(Page::Home),
        last_refresh: create_rw_signal(None),
    };

    provide_context(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_excludes_home() {
        assert!(!Page::NAV.contains(&Page::Home));
        assert_eq!(Page::NAV.len(), 8);
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<&str> = Page::NAV.iter().map(|p| p.label()).collect();
        labels.push(Page::Home.label());
        let count = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }
}
