//! Background refresh of a mounted page.
//!
//! A `PollSubscription` runs its task once right away on a background thread and then,
//! when an interval is given, on every tick. The timer lives exactly as long as the
//! subscription: dropping it disconnects the stop channel and the thread leaves its
//! loop at the next `select!`. A task already running is allowed to finish.
use crossbeam_channel::{Sender, bounded, select, tick};
use log::{debug, info};
use std::thread;
use std::time::Duration;

/// Handle to a running refresh loop; cancels the loop when dropped.
pub struct PollSubscription {
    name: String,
    _stop_tx: Sender<()>,
}

impl PollSubscription {
    /// Spawn the refresh thread for `name`.
    pub fn start<F>(name: &str, interval: Option<Duration>, task: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let thread_name = name.to_string();

        thread::spawn(move || {
            task();
            let Some(interval) = interval else {
                debug!("{}: single fetch done", thread_name);
                return;
            };
            info!("{}: refreshing every {:?}", thread_name, interval);
            let ticker = tick(interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        debug!("{}: refresh tick", thread_name);
                        task();
                    },
                }
            }
            info!("{}: refresh loop stopping...", thread_name);
        });

        Self {
            name: name.to_string(),
            _stop_tx: stop_tx,
        }
    }
}

impl Drop for PollSubscription {
    fn drop(&mut self) {
        debug!("{}: subscription dropped", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = Arc::clone(&count);
        (count, move || {
            task_count.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn wait_for(count: &AtomicUsize, at_least: usize) {
        for _ in 0..200 {
            if count.load(Ordering::SeqCst) >= at_least {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("task ran {} times, expected {}", count.load(Ordering::SeqCst), at_least);
    }

    #[test]
    fn runs_once_without_interval() {
        let (count, task) = counter();
        let _subscription = PollSubscription::start("once", None, task);
        wait_for(&count, 1);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn repeats_on_interval() {
        let (count, task) = counter();
        let _subscription =
            PollSubscription::start("repeat", Some(Duration::from_millis(10)), task);
        wait_for(&count, 3);
    }

    #[test]
    fn drop_cancels_timer() {
        let (count, task) = counter();
        let subscription =
            PollSubscription::start("cancel", Some(Duration::from_millis(10)), task);
        wait_for(&count, 2);
        drop(subscription);
        thread::sleep(Duration::from_millis(30));
        let after_drop = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(100));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
