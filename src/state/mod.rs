//! View State
//!
//! Reactive state management: the navigation shell, the per-page remote
//! resource machine, and the historical playback cursor.

pub mod global;
pub mod playback;
pub mod remote;
