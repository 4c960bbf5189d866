//! Keyed one-shot async loading with stale-result suppression.
//!
//! # Design
//! An `AsyncLoader` tracks `{data, loading, error}` for one consumer (a page,
//! a widget). Each time the dependency key changes a new generation starts and
//! the caller receives a `LoadTicket` stamped with it. Settling a ticket only
//! lands if its generation is still current, so a slow earlier load can never
//! overwrite a faster later one. Requests are not aborted at the network
//! layer; their results are dropped.
//!
//! The check-and-update for `begin` and `settle` happens under one lock, and
//! the lock is never held across an await.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

/// Snapshot of a loader's state.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Keep the previous successful `data` visible while a new key loads.
    pub keep_stale_data_on_refetch: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            keep_stale_data_on_refetch: true,
        }
    }
}

/// Proof that a load was started; settle it with [`AsyncLoader::settle`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket that is never settled leaves the loader loading"]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was written to the state.
    Applied,
    /// A newer load started (or the loader closed) first; the result was dropped.
    Discarded,
    /// The key matched the current load, so the producer was not invoked.
    Skipped,
}

struct Control<K> {
    generation: u64,
    key: Option<K>,
    closed: bool,
}

struct Shared<K, T> {
    control: Mutex<Control<K>>,
    state: watch::Sender<LoadState<T>>,
    options: LoaderOptions,
}

/// Cloning yields another handle to the same loader.
pub struct AsyncLoader<K, T> {
    shared: Arc<Shared<K, T>>,
}

impl<K, T> Clone for AsyncLoader<K, T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<K: PartialEq, T: Clone> Default for AsyncLoader<K, T> {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl<K: PartialEq, T: Clone> AsyncLoader<K, T> {
    pub fn new(options: LoaderOptions) -> Self {
        let (state, _) = watch::channel(LoadState::default());
        Self {
            shared: Arc::new(Shared {
                control: Mutex::new(Control {
                    generation: 0,
                    key: None,
                    closed: false,
                }),
                state,
                options,
            }),
        }
    }

    pub fn state(&self) -> LoadState<T> {
        self.shared.state.borrow().clone()
    }

    /// Receive every state transition from now on.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.shared.state.subscribe()
    }

    /// Start a load for `key`.
    ///
    /// Returns `None` when `key` equals the current key or the loader is
    /// closed. Otherwise the state flips to loading, the error clears, and
    /// data is kept or cleared according to the options.
    pub fn begin(&self, key: K) -> Option<LoadTicket> {
        let mut control = self.shared.control.lock();
        if control.closed || control.key.as_ref() == Some(&key) {
            return None;
        }
        control.generation += 1;
        control.key = Some(key);
        let keep_stale = self.shared.options.keep_stale_data_on_refetch;
        self.shared.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
            if !keep_stale {
                state.data = None;
            }
        });
        debug!(generation = control.generation, "load started");
        Some(LoadTicket {
            generation: control.generation,
        })
    }

    /// Record the result of the load identified by `ticket`.
    pub fn settle<E: Display>(&self, ticket: LoadTicket, result: Result<T, E>) -> LoadOutcome {
        let control = self.shared.control.lock();
        if control.closed || ticket.generation != control.generation {
            debug!(
                stale = ticket.generation,
                current = control.generation,
                "discarding superseded load"
            );
            return LoadOutcome::Discarded;
        }
        let next = match result {
            Ok(data) => LoadState {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(err) => LoadState {
                data: None,
                loading: false,
                error: Some(err.to_string()),
            },
        };
        self.shared.state.send_replace(next);
        LoadOutcome::Applied
    }

    /// Run `producer` for `key` if the key changed, and settle its result.
    pub async fn load<F, Fut, E>(&self, key: K, producer: F) -> LoadOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let Some(ticket) = self.begin(key) else {
            return LoadOutcome::Skipped;
        };
        let result = producer().await;
        self.settle(ticket, result)
    }

    /// Tear the loader down. In-flight loads are discarded and later calls
    /// to `begin` return `None`.
    pub fn close(&self) {
        let mut control = self.shared.control.lock();
        control.closed = true;
        control.generation += 1;
    }

    pub fn is_closed(&self) -> bool {
        self.shared.control.lock().closed
    }
}
