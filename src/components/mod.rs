//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod map;
pub mod nav;
pub mod stat_card;

pub use chart::{BarChart, BarItem, LineChart, RadarChart, Series, StackedAreaChart};
pub use loading::{LoadFailed, LoadingScreen};
pub use map::RiskMap;
pub use nav::Nav;
pub use stat_card::StatCard;
