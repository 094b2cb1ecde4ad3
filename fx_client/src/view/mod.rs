//! Page renderers.
//!
//! Each page turns its `FetchState` into a `Screen`: a list of lines, some of them tinted
//! with a `Palette` colour. Rendering is pure so pages can be checked as plain text; the
//! `terminal` module decides how colours are printed.
//!
//! - `home` — static landing page.
//! - `quotes` — provider cards, spreads and best-rate summary.
//! - `average` — market average and its spread.
//! - `slippage` — per-provider slippage verdicts and best providers.
use fx_common::theme::Palette;

use crate::shell::Page;

pub mod average;
pub mod home;
pub mod quotes;
pub mod slippage;

/// Hint shown under every error message.
pub const ERROR_HINT: &str = "Make sure your API is running properly";

/// One rendered line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub color: Option<Palette>,
}

/// Rendered page content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    lines: Vec<Line>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an uncoloured line.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line {
            text: text.into(),
            color: None,
        });
        self
    }

    /// Append a line tinted with `color`.
    pub fn colored(&mut self, color: Palette, text: impl Into<String>) -> &mut Self {
        self.lines.push(Line {
            text: text.into(),
            color: Some(color),
        });
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.text("")
    }

    /// Append a heading underlined with `=`.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        self.text(title);
        self.text("=".repeat(title.chars().count()))
    }

    /// Append a card title underlined with `-` in the card's colour.
    pub fn card_title(&mut self, color: Palette, title: &str) -> &mut Self {
        self.colored(color, title);
        self.colored(color, "-".repeat(title.chars().count()))
    }

    /// Append a `label: value` row.
    pub fn field(&mut self, label: &str, value: impl AsRef<str>) -> &mut Self {
        self.text(format!("  {:<24}{}", format!("{}:", label), value.as_ref()))
    }

    /// Append a tinted `label: value` row.
    pub fn colored_field(
        &mut self,
        color: Palette,
        label: &str,
        value: impl AsRef<str>,
    ) -> &mut Self {
        self.colored(
            color,
            format!("  {:<24}{}", format!("{}:", label), value.as_ref()),
        )
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The screen as plain text, one line per row.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Spinner line shown while a page is loading.
pub fn loading(message: &str) -> Screen {
    let mut screen = Screen::new();
    screen.colored(Palette::Blue, format!("... {}", message));
    screen
}

/// Error panel: generic heading, the error message and the static hint.
pub fn error_panel(message: &str) -> Screen {
    let mut screen = Screen::new();
    screen
        .colored(Palette::Red, "Error Loading Data")
        .colored(Palette::Red, message)
        .text(ERROR_HINT);
    screen
}

/// Centered-style empty-state message.
pub fn empty(message: &str) -> Screen {
    let mut screen = Screen::new();
    screen.colored(Palette::Gray, message);
    screen
}

/// Wrap a page body with the application header and the tab bar.
pub fn frame(current: Page, body: &Screen) -> Screen {
    let tabs = Page::all()
        .iter()
        .map(|page| {
            if *page == current {
                format!("<{}>", page.title())
            } else {
                format!("[{}] {}", page.shortcut(), page.title())
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let mut screen = Screen::new();
    screen
        .heading("BRL Quotes")
        .colored(Palette::Blue, tabs)
        .blank();
    screen.lines.extend(body.lines.iter().cloned());
    screen
        .blank()
        .colored(Palette::Gray, "Type a page letter, n/p for next/previous or x to exit, then Enter.");
    screen
}
