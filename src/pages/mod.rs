//! Pages
//!
//! Top-level page containers, one per navigation token. Each owns its
//! data-fetch lifecycle and view state exclusively.

pub mod access;
pub mod alerts;
pub mod comparison;
pub mod dashboard;
pub mod explainability;
pub mod forecasting;
pub mod history;
pub mod home;
pub mod reports;

pub use access::Access;
pub use alerts::Alerts;
pub use comparison::Compare;
pub use dashboard::Dashboard;
pub use explainability::Explainability;
pub use forecasting::Forecasting;
pub use history::History;
pub use home::Home;
pub use reports::Reports;
