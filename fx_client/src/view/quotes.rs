//! Quotes page: one card per provider plus a best-rate summary.
use fx_common::analytics::QuoteSummary;
use fx_common::format::{format_currency, format_ratio, format_timestamp};
use fx_common::model::Quote;
use fx_common::theme::{Palette, provider_palette};

use crate::fetch::{FetchState, PageState};
use crate::view::{self, Screen};

pub const LOADING: &str = "Loading quotes from all sources...";
pub const EMPTY: &str = "No quotes available";
pub const ERROR_DEFAULT: &str = "Failed to load quotes";

pub fn render(state: &FetchState<Vec<Quote>>) -> Screen {
    match state.page_state(Vec::is_empty) {
        PageState::Loading => view::loading(LOADING),
        PageState::Error(message) => view::error_panel(message),
        PageState::Empty => view::empty(EMPTY),
        PageState::Populated(quotes) => populated(quotes),
    }
}

fn populated(quotes: &[Quote]) -> Screen {
    let mut screen = Screen::new();
    screen
        .heading("Exchange Rate Quotes")
        .text(format!("Real-time rates from {} sources", quotes.len()))
        .colored(Palette::Green, "[Live Data]")
        .blank();

    for quote in quotes {
        card(&mut screen, quote);
        screen.blank();
    }

    if let Some(summary) = QuoteSummary::from_quotes(quotes) {
        screen
            .heading("Quick Summary")
            .colored_field(
                Palette::Green,
                "Lowest Buy Price",
                format_currency(summary.lowest_buy),
            )
            .colored_field(
                Palette::Blue,
                "Highest Sell Price",
                format_currency(summary.highest_sell),
            )
            .colored_field(
                Palette::Orange,
                "Best Spread",
                format_currency(summary.best_spread),
            );
    }
    screen
}

fn card(screen: &mut Screen, quote: &Quote) {
    let color = provider_palette(quote.provider());
    let spread = quote.spread();
    let info = quote.additional_info.as_ref();

    screen.card_title(color, quote.provider_name());
    if let Some(pair) = info.and_then(|i| i.currency_pair.as_deref()) {
        screen.colored(color, format!("  [{}]", pair));
    }
    screen
        .colored_field(
            Palette::Green,
            "Buy Price (USD → BRL)",
            format_currency(quote.buy_price),
        )
        .colored_field(
            Palette::Blue,
            "Sell Price (BRL → USD)",
            format_currency(quote.sell_price),
        )
        .colored_field(
            Palette::Orange,
            "Spread",
            format!(
                "{} ({})",
                format_currency(spread.amount),
                format_ratio(spread.percentage)
            ),
        );

    if let Some(info) = info {
        if let Some(mid) = info.mid_market_rate {
            screen.field("Mid-Market", format_currency(mid));
        }
        if let Some(reported) = info.spread_percentage {
            screen.field("Spread %", format_ratio(reported));
        }
        if let Some(date) = &info.date {
            screen.field("Date", date);
        }
        if let Some(note) = &info.note {
            screen.field("Note", note);
        }
    }

    screen
        .field("Source", &quote.source)
        .field("Updated", format_timestamp(Some(&quote.timestamp)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_common::model::QuoteDetails;

    fn quote(provider: &str, buy: f64, sell: f64) -> Quote {
        Quote {
            buy_price: buy,
            sell_price: sell,
            source: format!("{}-api", provider.to_lowercase()),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            additional_info: Some(QuoteDetails {
                provider: Some(provider.to_string()),
                currency_pair: Some("USD/BRL".to_string()),
                ..QuoteDetails::default()
            }),
        }
    }

    fn loaded(quotes: Vec<Quote>) -> FetchState<Vec<Quote>> {
        FetchState {
            data: Some(quotes),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn loading_state() {
        let text = render(&FetchState::default()).plain_text();
        assert!(text.contains(LOADING));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let text = render(&loaded(Vec::new())).plain_text();
        assert_eq!(text, EMPTY);
    }

    #[test]
    fn error_state_wins_over_stale_data() {
        let state = FetchState {
            data: Some(vec![quote("Wise", 5.5, 5.2)]),
            loading: false,
            error: Some("HTTP error! status: 503".to_string()),
        };
        let text = render(&state).plain_text();
        assert!(text.contains("HTTP error! status: 503"));
        assert!(!text.contains("Exchange Rate Quotes"));
    }

    #[test]
    fn cards_show_recomputed_spread() {
        let mut wise = quote("Wise", 5.50, 5.20);
        if let Some(info) = wise.additional_info.as_mut() {
            info.spread_percentage = Some(9.99);
            info.mid_market_rate = Some(5.35);
            info.note = Some("Commercial rate".to_string());
        }
        let screen = render(&loaded(vec![wise, quote("Nubank", 5.61, 5.48)]));
        let text = screen.plain_text();

        assert!(text.contains("Real-time rates from 2 sources"));
        assert!(text.contains("R$ 0.3000 (5.45%)"));
        assert!(text.contains("9.99%"));
        assert!(text.contains("R$ 5.3500"));
        assert!(text.contains("Commercial rate"));
        assert!(text.contains("[USD/BRL]"));
        assert!(!text.contains("N/A"));
        assert!(
            screen
                .lines()
                .iter()
                .any(|l| l.text == "Nubank" && l.color == Some(Palette::Purple))
        );
    }

    #[test]
    fn summary_uses_extremes() {
        let quotes = vec![
            quote("Wise", 5.50, 5.20),
            quote("Nubank", 5.45, 5.30),
            quote("Nomad Global", 5.60, 5.55),
        ];
        let text = render(&loaded(quotes)).plain_text();
        assert!(text.contains("Quick Summary"));
        assert!(text.contains(&format!("  {:<24}R$ 5.4500", "Lowest Buy Price:")));
        assert!(text.contains(&format!("  {:<24}R$ 5.5500", "Highest Sell Price:")));
        assert!(text.contains(&format!("  {:<24}R$ 0.0500", "Best Spread:")));
    }

    #[test]
    fn unknown_provider_is_gray() {
        let bare = Quote {
            additional_info: None,
            ..quote("X", 5.0, 4.9)
        };
        let screen = render(&loaded(vec![bare]));
        assert!(
            screen
                .lines()
                .iter()
                .any(|l| l.text == "Unknown" && l.color == Some(Palette::Gray))
        );
    }
}
