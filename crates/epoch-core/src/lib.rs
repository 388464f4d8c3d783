//! # epoch-core
//!
//! Core types, year codec, and error types for Epoch.
//!
//! This crate provides the foundational types shared across all Epoch crates:
//! - Year labels (`"3000 BCE"`, `"2024 CE"`) and their signed integer form
//! - Time ranges with the `start <= end` invariant
//! - Geographic points clicked on the map
//! - Articles returned by the backend
//! - Opaque marker handles issued by a map surface
//! - Cross-cutting error types

pub mod article;
pub mod errors;
pub mod geo;
pub mod marker;
pub mod range;
pub mod year;

pub use article::Article;
pub use errors::CoreError;
pub use geo::GeoPoint;
pub use marker::MarkerHandle;
pub use range::TimeRange;
pub use year::{Year, format_year, parse_year};
