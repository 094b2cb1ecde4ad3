//!
//! Common types and utilities shared by the exchange-rate client.
//!
//! This crate aggregates:
//! - `error` — unified error type `FxError` used across the workspace.
//! - `result` — handy `Result<T, FxError>` alias.
//! - `model` — `Quote`, `Average` and `Slippage` payloads served by the rates API.
//! - `format` — display helpers for currency, percentages and timestamps.
//! - `analytics` — spreads, summaries and slippage classification derived from the payloads.
//! - `theme` — provider and verdict colour palette.
#![warn(missing_docs)]
pub mod analytics;
pub mod error;
pub mod format;
pub mod model;
pub mod result;
pub mod theme;

pub use error::FxError;
pub use result::Result;
