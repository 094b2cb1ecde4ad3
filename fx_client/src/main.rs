//! FX Client — a terminal front-end for a USD/BRL exchange-rate API. It shows the
//! quotes of several providers (Wise, Nubank, Nomad), the market average across them
//! and each provider's slippage against that average.
//!
//! The client polls three read-only endpoints (`/quotes`, `/average`, `/slippage`) of
//! the API configured with `--api-url` or `FX_API_URL`. The quotes page refreshes on a
//! timer (60 seconds by default); the average and slippage pages fetch once when they
//! are opened. Pages are switched by typing their letter followed by Enter.
//!
//! Usage example (CLI):
//! ```bash
//! FX_API_URL=http://localhost:3000 fx_client --page quotes
//! fx_client --page slippage --once --no-color
//! ```
#![warn(missing_docs)]
mod api;
mod args;
mod fetch;
mod input;
mod poller;
mod shell;
mod terminal;
mod view;

use std::sync::Arc;

use crate::api::{ApiClient, RatesApi};
use crate::args::{Args, Settings};
use crate::input::InputReader;
use crate::shell::{ActiveView, NavCommand, Navigation, Page, Transition};
use crate::terminal::Terminal;
use clap::Parser;
use crossbeam_channel::{select, unbounded};
use fx_common::FxError;
use fx_common::Result;
use log::info;

/// Shell loop: redraw on data changes, remount on navigation, stop on exit or Ctrl+C.
fn run_interactive(start: Page, api: &Arc<dyn RatesApi>, settings: &Settings, terminal: &Terminal) -> Result<(), FxError> {
    let (command_tx, command_rx) = unbounded::<NavCommand>();
    let (redraw_tx, redraw_rx) = unbounded::<()>();
    {
        let command_tx = command_tx.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            let _ = command_tx.send(NavCommand::Quit);
        })
        .map_err(|e| FxError::Signal(e.to_string()))?;
    }
    InputReader::start(command_tx);

    let mut navigation = Navigation::new(start);
    let mut active = ActiveView::mount(start, api, settings.refresh, redraw_tx.clone());
    terminal.draw(&view::frame(navigation.current(), &active.render()?))?;

    loop {
        select! {
            recv(command_rx) -> msg => {
                let Ok(command) = msg else { break };
                match navigation.apply(command) {
                    Transition::Stay => continue,
                    Transition::Quit => break,
                    Transition::Switch(page) => {
                        active = ActiveView::mount(page, api, settings.refresh, redraw_tx.clone());
                    }
                }
            },
            recv(redraw_rx) -> _ => {},
        }
        terminal.draw(&view::frame(navigation.current(), &active.render()?))?;
    }

    info!("Client stopped.");
    Ok(())
}

fn main() -> Result<(), FxError> {
    init_logger();
    let args = Args::parse();
    let settings = args.settings()?;

    let client = ApiClient::new(&settings.api_url, settings.timeout)?;
    info!("Using rates API at {}", client.base_url());
    let terminal = Terminal::new(!args.no_color, !args.once);

    if args.once {
        return terminal.draw(&shell::render_once(args.page, &client));
    }
    let api: Arc<dyn RatesApi> = Arc::new(client);
    run_interactive(args.page, &api, &settings, &terminal)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
