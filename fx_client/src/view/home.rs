//! Static landing page.
use fx_common::theme::{Palette, provider_palette};

use crate::view::Screen;

/// Providers introduced on the landing page, with the name their quotes carry.
const PROVIDERS: [(&str, &str); 3] = [
    ("Wise", "Wise"),
    ("Nubank", "Nubank"),
    ("Nomad", "Nomad Global"),
];

pub fn render() -> Screen {
    let mut screen = Screen::new();
    screen
        .heading("Currency Exchange Rates")
        .text("Real-time BRL to USD conversion rates from multiple sources")
        .blank();

    for (title, provider) in PROVIDERS {
        screen
            .card_title(provider_palette(Some(provider)), title)
            .field("Buy", "--")
            .field("Sell", "--")
            .blank();
    }

    screen.colored(
        Palette::Gray,
        "Open the quotes, average or slippage page to load live rates.",
    );
    screen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_providers() {
        let screen = render();
        let text = screen.plain_text();
        assert!(text.contains("Currency Exchange Rates"));
        for (title, _) in PROVIDERS {
            assert!(text.contains(title));
        }
        assert!(
            screen
                .lines()
                .iter()
                .any(|l| l.text == "Nomad" && l.color == Some(Palette::Blue))
        );
    }
}
