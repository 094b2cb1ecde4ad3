//! Values derived from API payloads at render time.
//!
//! - Spreads are always recomputed from raw buy/sell prices; the provider-reported
//!   `spread_percentage` is supplementary display data only.
//! - Summaries are only defined for non-empty lists and return `None` otherwise.
//! - Slippage verdicts are derived from the sign of the received value; the percentage
//!   itself is never recomputed.
use strum_macros::{Display, EnumString};

use crate::model::{Average, Quote, Slippage};

/// Difference between a buy and a sell price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    /// `buy - sell`, in BRL.
    pub amount: f64,
    /// `amount / buy * 100`.
    pub percentage: f64,
}

impl Spread {
    /// Spread between `buy` and `sell`.
    pub fn of(buy: f64, sell: f64) -> Self {
        let amount = buy - sell;
        Self {
            amount,
            percentage: amount / buy * 100.0,
        }
    }
}

impl Quote {
    /// Spread of this quote, recomputed from its prices.
    pub fn spread(&self) -> Spread {
        Spread::of(self.buy_price, self.sell_price)
    }
}

impl Average {
    /// Spread between the average buy and sell prices.
    pub fn spread(&self) -> Spread {
        Spread::of(self.average_buy_price, self.average_sell_price)
    }
}

/// Best rates across all quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteSummary {
    /// Lowest buy price.
    pub lowest_buy: f64,
    /// Highest sell price.
    pub highest_sell: f64,
    /// Smallest `buy - sell`.
    pub best_spread: f64,
}

impl QuoteSummary {
    /// Summarise `quotes`, or `None` when the list is empty.
    pub fn from_quotes(quotes: &[Quote]) -> Option<Self> {
        let (first, rest) = quotes.split_first()?;
        let seed = Self {
            lowest_buy: first.buy_price,
            highest_sell: first.sell_price,
            best_spread: first.spread().amount,
        };
        Some(rest.iter().fold(seed, |acc, quote| Self {
            lowest_buy: acc.lowest_buy.min(quote.buy_price),
            highest_sell: acc.highest_sell.max(quote.sell_price),
            best_spread: acc.best_spread.min(quote.spread().amount),
        }))
    }
}

/// Which price a slippage value refers to.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Side {
    Buy,
    Sell,
}

/// Whether a slippage value is good for the end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Verdict {
    /// Better than the market average.
    Favorable,
    /// Worse than the market average.
    Unfavorable,
    /// Exactly at the market average.
    Neutral,
}

impl Verdict {
    /// Short explanation shown under the slippage value.
    pub fn description(self) -> &'static str {
        match self {
            Verdict::Favorable => "Better than average",
            Verdict::Unfavorable => "Worse than average",
            Verdict::Neutral => "Same as market average",
        }
    }
}

/// Classify a slippage percentage for the given side.
///
/// Buyers want to pay less than the average, so negative buy slippage is favourable;
/// sellers want to receive more, so positive sell slippage is favourable.
pub fn classify(slippage: f64, side: Side) -> Verdict {
    if slippage == 0.0 {
        return Verdict::Neutral;
    }
    let favorable = match side {
        Side::Buy => slippage < 0.0,
        Side::Sell => slippage > 0.0,
    };
    if favorable {
        Verdict::Favorable
    } else {
        Verdict::Unfavorable
    }
}

/// Position of a slippage value relative to the average, independent of side.
pub fn label(slippage: f64) -> &'static str {
    if slippage == 0.0 {
        "At Average"
    } else if slippage > 0.0 {
        "Above Average"
    } else {
        "Below Average"
    }
}

/// Best provider on one side of the market.
#[derive(Debug, Clone, PartialEq)]
pub struct BestRate {
    /// Display name of the provider.
    pub provider: String,
    /// Its slippage in percent.
    pub slippage: f64,
}

/// Best providers for buying and selling.
#[derive(Debug, Clone, PartialEq)]
pub struct SlippageSummary {
    /// Provider with the lowest buy slippage.
    pub best_buy: BestRate,
    /// Provider with the highest sell slippage.
    pub best_sell: BestRate,
}

impl SlippageSummary {
    /// Pick the best providers, or `None` when the list is empty.
    ///
    /// Ties go to the earliest entry.
    pub fn from_slippages(slippages: &[Slippage]) -> Option<Self> {
        let (first, rest) = slippages.split_first()?;
        let mut best_buy = first;
        let mut best_sell = first;
        for slippage in rest {
            if slippage.buy_price_slippage < best_buy.buy_price_slippage {
                best_buy = slippage;
            }
            if slippage.sell_price_slippage > best_sell.sell_price_slippage {
                best_sell = slippage;
            }
        }
        Some(Self {
            best_buy: BestRate {
                provider: best_buy.provider_name().to_string(),
                slippage: best_buy.buy_price_slippage,
            },
            best_sell: BestRate {
                provider: best_sell.provider_name().to_string(),
                slippage: best_sell.sell_price_slippage,
            },
        })
    }
}
