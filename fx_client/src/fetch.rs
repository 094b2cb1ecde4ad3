//! Generic data-loading state used by every page.
//!
//! A `FetchController<T>` starts in the loading state with no data and no error. Each
//! fetch first calls `begin` (loading, error cleared) and then `settle` with the outcome:
//! success replaces the data, failure records a message and leaves the previous data in
//! place. Outcomes are applied in completion order; the last one wins.
use std::fmt::Display;

use log::error;

/// Snapshot of a controller: `{data, loading, error}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

/// What a page should show for a given state, in priority order.
#[derive(Debug, PartialEq)]
pub enum PageState<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a T),
}

impl<T> FetchState<T> {
    /// Resolve the page state; `is_empty` decides when present data counts as empty.
    pub fn page_state(&self, is_empty: impl Fn(&T) -> bool) -> PageState<'_, T> {
        if self.loading {
            return PageState::Loading;
        }
        if let Some(error) = &self.error {
            return PageState::Error(error);
        }
        match &self.data {
            Some(data) if !is_empty(data) => PageState::Populated(data),
            _ => PageState::Empty,
        }
    }
}

/// Holds the state of one page's fetches.
#[derive(Debug)]
pub struct FetchController<T> {
    state: FetchState<T>,
    error_message: String,
}

impl<T> FetchController<T> {
    /// New controller; `error_message` is shown when a failure carries no text.
    pub fn new(error_message: &str) -> Self {
        Self {
            state: FetchState::default(),
            error_message: error_message.to_string(),
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Enter the loading state and clear the previous error.
    pub fn begin(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    /// Apply the outcome of a fetch.
    pub fn settle<E: Display>(&mut self, outcome: Result<T, E>) {
        match outcome {
            Ok(data) => {
                self.state.data = Some(data);
                self.state.error = None;
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                let message = e.to_string();
                self.state.error = Some(if message.is_empty() {
                    self.error_message.clone()
                } else {
                    message
                });
            }
        }
        self.state.loading = false;
    }

    /// Run `fetch` to completion: `begin`, call, `settle`.
    pub fn run<E: Display>(&mut self, fetch: impl FnOnce() -> Result<T, E>) {
        self.begin();
        self.settle(fetch());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fx_common::FxError;

    #[test]
    fn starts_loading() {
        let controller = FetchController::<u32>::new("Failed to load data");
        assert_eq!(controller.state(), &FetchState::default());
        assert_eq!(controller.state().page_state(|_| false), PageState::Loading);
    }

    #[test]
    fn success_populates() {
        let mut controller = FetchController::new("Failed to load data");
        controller.run(|| Ok::<_, FxError>(vec![1, 2, 3]));
        assert_eq!(
            controller.state(),
            &FetchState {
                data: Some(vec![1, 2, 3]),
                loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn failure_records_message() {
        let mut controller = FetchController::<Vec<u32>>::new("Failed to load data");
        controller.run(|| {
            Err(FxError::Http {
                status: 500,
                message: Some("boom".to_string()),
            })
        });
        assert_eq!(
            controller.state(),
            &FetchState {
                data: None,
                loading: false,
                error: Some("boom".to_string()),
            }
        );
    }

    #[test]
    fn empty_message_uses_default() {
        let mut controller = FetchController::<u32>::new("Failed to load quotes");
        controller.run(|| Err(String::new()));
        assert_eq!(controller.state().error.as_deref(), Some("Failed to load quotes"));

        controller.run(|| Err(FxError::Http { status: 502, message: None }));
        assert_eq!(controller.state().error.as_deref(), Some("HTTP error! status: 502"));
    }

    #[test]
    fn later_fetch_replaces_previous_state() {
        let mut controller = FetchController::new("Failed to load data");
        controller.run(|| Ok::<_, FxError>(1));
        controller.run(|| Err(FxError::Transport("offline".to_string())));
        assert_eq!(controller.state().data, Some(1));
        assert!(controller.state().error.is_some());

        controller.begin();
        assert!(controller.state().loading);
        assert_eq!(controller.state().error, None);

        controller.settle(Ok::<_, FxError>(2));
        assert_eq!(
            controller.state(),
            &FetchState {
                data: Some(2),
                loading: false,
                error: None,
            }
        );
    }

    #[test]
    fn page_state_priority() {
        let mut state = FetchState {
            data: Some(Vec::<u32>::new()),
            loading: true,
            error: Some("boom".to_string()),
        };
        assert_eq!(state.page_state(Vec::is_empty), PageState::Loading);
        state.loading = false;
        assert_eq!(state.page_state(Vec::is_empty), PageState::Error("boom"));
        state.error = None;
        assert_eq!(state.page_state(Vec::is_empty), PageState::Empty);
        state.data = Some(vec![7]);
        assert_eq!(state.page_state(Vec::is_empty), PageState::Populated(&vec![7]));
    }
}
