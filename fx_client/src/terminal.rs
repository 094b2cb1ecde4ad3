//! Printing screens to the terminal.
//!
//! Interactive mode clears the screen before every draw; `--once` prints without
//! clearing. Colours are applied with `crossterm` unless disabled.
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use fx_common::Result;
use fx_common::theme::Palette;

use crate::view::Screen;

/// Stdout writer for rendered screens.
pub struct Terminal {
    color: bool,
    clear: bool,
}

impl Terminal {
    pub fn new(color: bool, clear: bool) -> Self {
        Self { color, clear }
    }

    pub fn draw(&self, screen: &Screen) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.clear {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        if !self.color {
            writeln!(out, "{}", screen.plain_text())?;
            out.flush()?;
            return Ok(());
        }
        for line in screen.lines() {
            match line.color {
                Some(palette) => writeln!(out, "{}", line.text.as_str().with(color(palette)))?,
                None => writeln!(out, "{}", line.text)?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn color(palette: Palette) -> Color {
    match palette {
        Palette::Green => Color::Green,
        Palette::Purple => Color::Magenta,
        Palette::Blue => Color::Blue,
        Palette::Orange => Color::DarkYellow,
        Palette::Red => Color::Red,
        Palette::Gray => Color::DarkGrey,
    }
}
