//! Payloads served by the rates API.
//!
//! All three resources are read-only snapshots: a fresh value is decoded on every
//! fetch and replaces the previous one wholesale. Prices are BRL per USD.
//!
//! - `Quote` — buy/sell prices of a single provider (`GET /quotes` returns a list).
//! - `Average` — market mean across all active providers (`GET /average`).
//! - `Slippage` — deviation of one provider from the mean, in percent (`GET /slippage`).
use serde::{Deserialize, Serialize};

/// Provider name shown when a payload does not carry one.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// Exchange-rate quote published by a single provider.
///
/// No ordering is assumed between `buy_price` and `sell_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Price paid to buy one USD (USD → BRL).
    pub buy_price: f64,
    /// Price received when selling one USD (BRL → USD).
    pub sell_price: f64,
    /// Upstream source identifier.
    pub source: String,
    /// ISO-8601 time at which the quote was produced.
    pub timestamp: String,
    /// Supplementary provider data, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<QuoteDetails>,
}

/// Optional extras attached to a [`Quote`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteDetails {
    /// Rate without any buy/sell margin.
    #[serde(default)]
    pub mid_market_rate: Option<f64>,
    /// Spread percentage as computed by the provider.
    #[serde(default)]
    pub spread_percentage: Option<f64>,
    /// Currency pair label, e.g. `USD/BRL`.
    #[serde(default)]
    pub currency_pair: Option<String>,
    /// Display name of the provider.
    #[serde(default)]
    pub provider: Option<String>,
    /// Provider-reported quote date.
    #[serde(default)]
    pub date: Option<String>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
}

impl Quote {
    /// Provider name from `additional_info`, if reported.
    pub fn provider(&self) -> Option<&str> {
        self.additional_info
            .as_ref()
            .and_then(|info| info.provider.as_deref())
    }

    /// Provider name for display, falling back to [`UNKNOWN_PROVIDER`].
    pub fn provider_name(&self) -> &str {
        self.provider().unwrap_or(UNKNOWN_PROVIDER)
    }
}

/// Market average across all active providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Average {
    /// Mean buy price.
    pub average_buy_price: f64,
    /// Mean sell price.
    pub average_sell_price: f64,
    /// ISO-8601 time of the calculation.
    pub timestamp: String,
    /// Number of providers that contributed.
    pub sources_count: u32,
    /// How the mean was computed.
    pub additional_info: AverageDetails,
}

/// Calculation metadata attached to an [`Average`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageDetails {
    /// Name of the aggregation, e.g. `mean`.
    #[serde(default)]
    pub calculation_method: String,
    /// Providers that took part in the calculation.
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Percentage deviation of one provider from the market average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slippage {
    /// Buy-side slippage in percent.
    pub buy_price_slippage: f64,
    /// Sell-side slippage in percent.
    pub sell_price_slippage: f64,
    /// Upstream source identifier.
    pub source: String,
    /// ISO-8601 time of the calculation.
    pub timestamp: String,
    /// Raw prices the slippage was computed from.
    pub additional_info: SlippageDetails,
}

/// Prices behind a [`Slippage`] value, displayed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlippageDetails {
    /// Provider buy price.
    pub quote_buy_price: f64,
    /// Provider sell price.
    pub quote_sell_price: f64,
    /// Market average buy price.
    pub average_buy_price: f64,
    /// Market average sell price.
    pub average_sell_price: f64,
    /// Display name of the provider.
    #[serde(default)]
    pub provider: String,
}

impl Slippage {
    /// Provider name for display, falling back to [`UNKNOWN_PROVIDER`].
    pub fn provider_name(&self) -> &str {
        if self.additional_info.provider.is_empty() {
            UNKNOWN_PROVIDER
        } else {
            &self.additional_info.provider
        }
    }
}
