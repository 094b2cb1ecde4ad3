//! Navigation between pages and ownership of the mounted page.
//!
//! Navigation is a pure state machine over [`Page`]: typed commands are parsed into
//! [`NavCommand`]s and applied to a [`Navigation`], which reports whether another page
//! must be mounted. The mounted page lives in an [`ActiveView`]; it owns the page's
//! fetch controller and its poll subscription, so replacing the view cancels the
//! previous page's refresh timer.
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::ValueEnum;
use crossbeam_channel::Sender;
use fx_common::Result;
use fx_common::model::{Average, Quote, Slippage};
use log::{debug, error, info};
use strum_macros::{Display, EnumString};

use crate::api::RatesApi;
use crate::fetch::{FetchController, FetchState};
use crate::poller::PollSubscription;
use crate::view::{self, Screen};

/// Pages of the application, in tab order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Page {
    Home,
    Quotes,
    Average,
    Slippage,
}

const TAB_ORDER: [Page; 4] = [Page::Home, Page::Quotes, Page::Average, Page::Slippage];

impl Page {
    fn position(self) -> usize {
        TAB_ORDER.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Page {
        TAB_ORDER[(self.position() + 1) % TAB_ORDER.len()]
    }

    pub fn prev(self) -> Page {
        TAB_ORDER[(self.position() + TAB_ORDER.len() - 1) % TAB_ORDER.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Quotes => "Quotes",
            Page::Average => "Average",
            Page::Slippage => "Slippage",
        }
    }

    /// Keyboard shortcut shown in the tab bar.
    pub fn shortcut(self) -> char {
        match self {
            Page::Home => 'h',
            Page::Quotes => 'q',
            Page::Average => 'a',
            Page::Slippage => 's',
        }
    }

    pub fn all() -> &'static [Page] {
        &TAB_ORDER
    }
}

/// User input understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Go(Page),
    Next,
    Prev,
    Quit,
}

impl NavCommand {
    /// Parse one line of input; `None` when it is not a command.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "n" | "next" => Some(NavCommand::Next),
            "p" | "prev" => Some(NavCommand::Prev),
            "x" | "exit" => Some(NavCommand::Quit),
            "h" => Some(NavCommand::Go(Page::Home)),
            "q" => Some(NavCommand::Go(Page::Quotes)),
            "a" => Some(NavCommand::Go(Page::Average)),
            "s" => Some(NavCommand::Go(Page::Slippage)),
            _ => input.parse::<Page>().ok().map(NavCommand::Go),
        }
    }
}

/// Outcome of applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(Page),
    Quit,
}

/// Current page of the shell.
#[derive(Debug)]
pub struct Navigation {
    current: Page,
}

impl Navigation {
    pub fn new(start: Page) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Apply `command`; going to the page already shown is a no-op.
    pub fn apply(&mut self, command: NavCommand) -> Transition {
        let target = match command {
            NavCommand::Quit => return Transition::Quit,
            NavCommand::Go(page) => page,
            NavCommand::Next => self.current.next(),
            NavCommand::Prev => self.current.prev(),
        };
        if target == self.current {
            return Transition::Stay;
        }
        self.current = target;
        Transition::Switch(target)
    }
}

/// A page whose data is loaded by a background subscription.
pub struct Mounted<T> {
    controller: Arc<Mutex<FetchController<T>>>,
    _poll: PollSubscription,
}

impl<T: Send + 'static> Mounted<T> {
    fn mount<F>(
        page: Page,
        error_message: &str,
        interval: Option<Duration>,
        fetch: F,
        redraw: Sender<()>,
    ) -> Self
    where
        F: Fn() -> Result<T> + Send + 'static,
    {
        let controller = Arc::new(Mutex::new(FetchController::new(error_message)));
        let shared = Arc::clone(&controller);
        let poll = PollSubscription::start(page.title(), interval, move || {
            if let Err(e) = refresh(&shared, &fetch, &redraw) {
                error!("{} refresh failed: {}", page.title(), e);
            }
        });
        Self {
            controller,
            _poll: poll,
        }
    }

    fn render(&self, render: fn(&FetchState<T>) -> Screen) -> Result<Screen> {
        let controller = self.controller.lock()?;
        Ok(render(controller.state()))
    }

    #[cfg(test)]
    fn is_settled(&self) -> Result<bool> {
        Ok(!self.controller.lock()?.state().loading)
    }
}

/// One fetch cycle. The lock is released while the request is in flight so the
/// loading state can be drawn.
fn refresh<T>(
    controller: &Mutex<FetchController<T>>,
    fetch: &impl Fn() -> Result<T>,
    redraw: &Sender<()>,
) -> Result<()> {
    controller.lock()?.begin();
    notify(redraw);
    let outcome = fetch();
    controller.lock()?.settle(outcome);
    notify(redraw);
    Ok(())
}

fn notify(redraw: &Sender<()>) {
    if redraw.send(()).is_err() {
        debug!("Redraw receiver dropped");
    }
}

/// Fetch `page` synchronously on the calling thread and render the outcome.
pub fn render_once(page: Page, api: &dyn RatesApi) -> Screen {
    info!("Rendering {} page once", page.title());
    match page {
        Page::Home => view::home::render(),
        Page::Quotes => {
            let mut controller = FetchController::new(view::quotes::ERROR_DEFAULT);
            controller.run(|| api.get_quotes());
            view::quotes::render(controller.state())
        }
        Page::Average => {
            let mut controller = FetchController::new(view::average::ERROR_DEFAULT);
            controller.run(|| api.get_average());
            view::average::render(controller.state())
        }
        Page::Slippage => {
            let mut controller = FetchController::new(view::slippage::ERROR_DEFAULT);
            controller.run(|| api.get_slippage());
            view::slippage::render(controller.state())
        }
    }
}

/// The page currently on screen.
pub enum ActiveView {
    Home,
    Quotes(Mounted<Vec<Quote>>),
    Average(Mounted<Average>),
    Slippage(Mounted<Vec<Slippage>>),
}

impl ActiveView {
    /// Mount `page`: the quotes page refreshes every `refresh`, the others fetch once.
    pub fn mount(
        page: Page,
        api: &Arc<dyn RatesApi>,
        refresh: Duration,
        redraw: Sender<()>,
    ) -> Self {
        info!("Mounting {} page", page.title());
        let api = Arc::clone(api);
        match page {
            Page::Home => ActiveView::Home,
            Page::Quotes => ActiveView::Quotes(Mounted::mount(
                page,
                view::quotes::ERROR_DEFAULT,
                Some(refresh),
                move || api.get_quotes(),
                redraw,
            )),
            Page::Average => ActiveView::Average(Mounted::mount(
                page,
                view::average::ERROR_DEFAULT,
                None,
                move || api.get_average(),
                redraw,
            )),
            Page::Slippage => ActiveView::Slippage(Mounted::mount(
                page,
                view::slippage::ERROR_DEFAULT,
                None,
                move || api.get_slippage(),
                redraw,
            )),
        }
    }

    pub fn render(&self) -> Result<Screen> {
        match self {
            ActiveView::Home => Ok(view::home::render()),
            ActiveView::Quotes(mounted) => mounted.render(view::quotes::render),
            ActiveView::Average(mounted) => mounted.render(view::average::render),
            ActiveView::Slippage(mounted) => mounted.render(view::slippage::render),
        }
    }

    /// Whether the latest fetch has completed (always true for the home page).
    #[cfg(test)]
    pub fn is_settled(&self) -> Result<bool> {
        match self {
            ActiveView::Home => Ok(true),
            ActiveView::Quotes(mounted) => mounted.is_settled(),
            ActiveView::Average(mounted) => mounted.is_settled(),
            ActiveView::Slippage(mounted) => mounted.is_settled(),
        }
    }
}
