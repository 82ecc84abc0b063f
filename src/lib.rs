//! cartrack - a paginated REST view over vehicle and accident records
//!
//! Two logical collections back the service: `vehicles` (embedding accident
//! summaries) and `accidents` (flat, independently addressable). The HTTP
//! surface is four routes over the vehicle collection; everything else is
//! the machinery behind them: pagination arithmetic, VIN validation, an
//! exact-match document store seam, and the uniform response envelope.

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod observe;
pub mod pagination;
pub mod store;
pub mod vin;
