//! Average page: market mean across providers.
use fx_common::format::{format_currency, format_ratio, format_timestamp};
use fx_common::model::Average;
use fx_common::theme::Palette;

use crate::fetch::{FetchState, PageState};
use crate::view::{self, Screen};

pub const LOADING: &str = "Loading average rates...";
pub const EMPTY: &str = "No average data available";
pub const ERROR_DEFAULT: &str = "Failed to load average rates";

pub fn render(state: &FetchState<Average>) -> Screen {
    match state.page_state(|_| false) {
        PageState::Loading => view::loading(LOADING),
        PageState::Error(message) => view::error_panel(message),
        PageState::Empty => view::empty(EMPTY),
        PageState::Populated(average) => populated(average),
    }
}

fn populated(average: &Average) -> Screen {
    let spread = average.spread();
    let info = &average.additional_info;
    let mut screen = Screen::new();

    screen
        .heading("Average Exchange Rates")
        .text(format!(
            "Calculated from {} sources",
            average.sources_count
        ));
    if !info.calculation_method.is_empty() {
        screen.colored(Palette::Blue, format!("[{}]", info.calculation_method));
    }
    screen
        .blank()
        .colored_field(
            Palette::Green,
            "Average Buy Price",
            format_currency(average.average_buy_price),
        )
        .colored_field(
            Palette::Blue,
            "Average Sell Price",
            format_currency(average.average_sell_price),
        )
        .colored_field(
            Palette::Orange,
            "Average Spread",
            format!(
                "{} ({})",
                format_currency(spread.amount),
                format_ratio(spread.percentage)
            ),
        );

    if !info.sources.is_empty() {
        screen.blank().heading("Data Sources");
        for source in &info.sources {
            screen.text(format!("  * {}", source));
        }
    }

    screen.blank().text(format!(
        "Last updated: {}",
        format_timestamp(Some(&average.timestamp))
    ));
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_common::model::AverageDetails;

    fn average() -> Average {
        Average {
            average_buy_price: 5.40,
            average_sell_price: 5.30,
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            sources_count: 3,
            additional_info: AverageDetails {
                calculation_method: "mean".to_string(),
                sources: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            },
        }
    }

    #[test]
    fn renders_spread_and_timestamp() {
        let state = FetchState {
            data: Some(average()),
            loading: false,
            error: None,
        };
        let text = render(&state).plain_text();
        assert!(text.contains("Calculated from 3 sources"));
        assert!(text.contains("R$ 5.4000"));
        assert!(text.contains("R$ 0.1000 (1.85%)"));
        assert!(text.contains("  * b"));
        assert!(text.contains("Last updated: "));
        assert!(!text.contains("Last updated: N/A"));
    }

    #[test]
    fn missing_average_shows_empty_state() {
        let state = FetchState::<Average> {
            data: None,
            loading: false,
            error: None,
        };
        assert_eq!(render(&state).plain_text(), EMPTY);
    }

    #[test]
    fn error_panel() {
        let state = FetchState::<Average> {
            data: None,
            loading: false,
            error: Some("Network error: unable to reach the API (refused)".to_string()),
        };
        let text = render(&state).plain_text();
        assert!(text.contains("Error Loading Data"));
        assert!(text.contains("unable to reach the API"));
        assert!(text.contains(view::ERROR_HINT));
    }
}
