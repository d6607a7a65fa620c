//! # Navigator
//!
//! Single owner of "what is on screen now".
//!
//! ```text
//!            navigate(B, p)                       go_back()
//!   ┌──────────┐ ───────────► ┌──────────┐ ──────────────► ┌──────────┐
//!   │ (A, pA)  │              │ (B, pB)  │                 │ (A, pA)  │
//!   └──────────┘              └──────────┘                 └──────────┘
//!   history: [..]             history: [.., (A,pA)]        history: [..]
//! ```
//!
//! Every operation is total. Unknown modules resolve to the route table's
//! fallback, malformed payloads are normalized, and an empty history makes
//! `go_back` a no-op. The only failure is `initialize` with a default module
//! that the table does not know.

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use crate::core::params::{NavigationParams, Payload};
use crate::core::route_table::{DEFAULT_PARAM_KEY, RouteTable, RouteTableEntry};
use crate::core::state::NavigationState;

/// Default bound on the back-navigation stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownDefaultModule(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownDefaultModule(id) => {
                write!(f, "default module '{id}' is not in the route table")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Handle returned by [`Navigator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&NavigationState)>;

pub struct Navigator {
    table: Arc<RouteTable>,
    current: NavigationState,
    history: VecDeque<NavigationState>,
    history_limit: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("current", &self.current)
            .field("history", &self.history.len())
            .field("history_limit", &self.history_limit)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Navigator {
    /// Start on `default_module` with empty params and no history.
    pub fn initialize(table: Arc<RouteTable>, default_module: &str) -> Result<Self, NavError> {
        if !table.contains(default_module) {
            return Err(NavError::UnknownDefaultModule(default_module.to_string()));
        }
        info!(
            "Navigator initialized on '{}' ({} routes)",
            default_module,
            table.len()
        );
        Ok(Self {
            table,
            current: NavigationState::new(default_module),
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    /// Cap the history at `limit` entries (at least one).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.trim_history();
        self
    }

    pub fn current(&self) -> &NavigationState {
        &self.current
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }

    /// Prior states, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &NavigationState> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Move to `module`, pushing the current state onto the history.
    ///
    /// Unknown modules land on the table's fallback with empty params.
    pub fn navigate(&mut self, module: &str, payload: impl Into<Payload>) -> &NavigationState {
        let payload = payload.into();
        let next = match self.table.get(module) {
            Some(entry) => NavigationState {
                module: entry.id.clone(),
                params: normalize(entry, payload),
            },
            None => {
                warn!(
                    "Unknown module '{}', falling back to '{}'",
                    module,
                    self.table.fallback()
                );
                NavigationState::new(self.table.fallback())
            }
        };

        let previous = std::mem::replace(&mut self.current, next);
        self.history.push_back(previous);
        self.trim_history();

        debug!(
            "Navigated to {} (history {}/{})",
            self.current, self.history.len(), self.history_limit
        );
        self.notify();
        &self.current
    }

    /// Return to the previous state. No-op when there is none.
    pub fn go_back(&mut self) -> &NavigationState {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                debug!("Went back to {} (history {})", self.current, self.history.len());
                self.notify();
            }
            None => debug!("go_back with empty history, staying on {}", self.current),
        }
        &self.current
    }

    /// Apply a startup request (`--start` / `--param`) on top of the default
    /// module, so `go_back` returns to it. Params with no module are ignored.
    pub fn open_start(&mut self, module: Option<&str>, params: NavigationParams) -> &NavigationState {
        match module {
            Some(module) => self.navigate(module, params),
            None => {
                if !params.is_empty() {
                    warn!("Start params {} given without a start module, ignoring", params);
                }
                &self.current
            }
        }
    }

    /// Register an observer, called synchronously after every committed change.
    pub fn subscribe(&mut self, observer: impl FnMut(&NavigationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.current);
        }
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.history_limit {
            if let Some(dropped) = self.history.pop_front() {
                debug!("History full, dropping oldest entry {}", dropped);
            }
        }
    }
}

/// Turn whatever the caller passed into the params `entry` understands.
fn normalize(entry: &RouteTableEntry, payload: Payload) -> NavigationParams {
    let key = entry.canonical_key();
    let mut params = match payload {
        Payload::None => return NavigationParams::new(),
        Payload::Bare(value) => {
            debug!("Wrapping bare payload for '{}' under '{}'", entry.id, key);
            NavigationParams::new().with(key, value)
        }
        Payload::Params(params) => params,
    };

    // `{ id: .. }` is the generic spelling of the canonical key.
    if key != DEFAULT_PARAM_KEY
        && !params.contains_key(key)
        && let Some(value) = params.remove(DEFAULT_PARAM_KEY)
    {
        params.insert(key, value);
    }

    params.retain(|k| {
        let keep = entry.accepts_key(k);
        if !keep {
            debug!("Dropping param '{}' not accepted by '{}'", k, entry.id);
        }
        keep
    });
    params
}
