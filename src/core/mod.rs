//! # Core Navigation Logic
//!
//! This module owns routing: which screen is active, with what parameters,
//! and how transitions happen. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RouteTable (data)    │
//!                    │  • Navigator (state)    │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │   Shell    │      │   Shell    │      │            │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route_table`]: static module descriptors and fallback resolution
//! - [`params`]: `NavigationParams` and the loose `Payload` callers pass
//! - [`state`]: the `(module, params)` snapshot
//! - [`navigator`]: the state machine (`navigate`, `go_back`, history, observers)
//! - [`action`]: the `Action` enum and `update()` reducer used by the shell
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod config;
pub mod navigator;
pub mod params;
pub mod route_table;
pub mod state;

pub use action::{Action, Effect, update};
pub use navigator::{NavError, Navigator};
pub use params::{NavigationParams, ParamValue, Payload};
pub use route_table::{RouteTable, RouteTableEntry, RouteTableError};
pub use state::NavigationState;
