//! Slippage page: how far each provider sits from the market average.
//!
//! Percentages and the prices behind them are shown exactly as received; only the
//! favourable/unfavourable verdict is derived locally.
use fx_common::analytics::{Side, SlippageSummary, classify, label};
use fx_common::format::{format_currency, format_percentage, format_timestamp};
use fx_common::model::Slippage;
use fx_common::theme::{Palette, provider_palette};

use crate::fetch::{FetchState, PageState};
use crate::view::{self, Screen};

pub const LOADING: &str = "Calculating slippage analysis...";
pub const EMPTY: &str = "No slippage data available";
pub const ERROR_DEFAULT: &str = "Failed to load slippage data";

pub fn render(state: &FetchState<Vec<Slippage>>) -> Screen {
    match state.page_state(Vec::is_empty) {
        PageState::Loading => view::loading(LOADING),
        PageState::Error(message) => view::error_panel(message),
        PageState::Empty => view::empty(EMPTY),
        PageState::Populated(slippages) => populated(slippages),
    }
}

fn populated(slippages: &[Slippage]) -> Screen {
    let mut screen = Screen::new();
    screen
        .heading("Slippage Analysis")
        .text(format!(
            "Percentage difference from market average across {} sources",
            slippages.len()
        ))
        .blank()
        .text("How to Read Slippage")
        .text("  Buy Price: Negative slippage = better rate (pay less BRL per USD)")
        .text("  Sell Price: Positive slippage = better rate (receive more BRL per USD)")
        .blank();

    for slippage in slippages {
        card(&mut screen, slippage);
        screen.blank();
    }

    if let Some(summary) = SlippageSummary::from_slippages(slippages) {
        screen
            .heading("Summary")
            .colored_field(
                Palette::Green,
                "Best Buy Rate",
                format!(
                    "{} ({})",
                    format_percentage(summary.best_buy.slippage),
                    summary.best_buy.provider
                ),
            )
            .colored_field(
                Palette::Blue,
                "Best Sell Rate",
                format!(
                    "{} ({})",
                    format_percentage(summary.best_sell.slippage),
                    summary.best_sell.provider
                ),
            );
    }
    screen
}

fn card(screen: &mut Screen, slippage: &Slippage) {
    let info = &slippage.additional_info;
    let color = provider_palette(Some(info.provider.as_str()));

    screen.card_title(color, slippage.provider_name());
    slippage_row(screen, "Buy Price Slippage", slippage.buy_price_slippage, Side::Buy);
    slippage_row(screen, "Sell Price Slippage", slippage.sell_price_slippage, Side::Sell);
    screen
        .text("  Price Comparison")
        .field("Provider Buy", format_currency(info.quote_buy_price))
        .field("Market Buy", format_currency(info.average_buy_price))
        .field("Provider Sell", format_currency(info.quote_sell_price))
        .field("Market Sell", format_currency(info.average_sell_price))
        .field("Source", &slippage.source)
        .field("Updated", format_timestamp(Some(&slippage.timestamp)));
}

fn slippage_row(screen: &mut Screen, title: &str, value: f64, side: Side) {
    let verdict = classify(value, side);
    screen.colored_field(
        verdict.palette(),
        title,
        format!(
            "{}  {} - {}",
            format_percentage(value),
            label(value),
            verdict.description()
        ),
    );
}
