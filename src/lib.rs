//! Core library exports for the SmartFit service.
//!
//! This crate exposes the wardrobe domain, forms, models, repositories,
//! routes and service layers used by the SmartFit web application.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod images;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Fixed key the wardrobe document is persisted under.
pub const WARDROBE_STORAGE_KEY: &str = "smartfit_wardrobe";
