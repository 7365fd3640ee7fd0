//! API Layer
//!
//! REST client and the response models it returns.

pub mod client;
pub mod models;

pub use client::*;
