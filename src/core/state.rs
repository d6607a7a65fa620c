//! # Navigation State
//!
//! The `(module, params)` pair describing the active screen.
//!
//! ```text
//! NavigationState
//! ├── module: String            // a ModuleId present in the route table
//! └── params: NavigationParams  // normalized for that module
//! ```
//!
//! Only the `Navigator` creates or replaces these. Everyone else gets a
//! `&NavigationState` or a clone, never a handle to mutate the live one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::params::NavigationParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub module: String,
    #[serde(default)]
    pub params: NavigationParams,
}

impl NavigationState {
    pub fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            params: NavigationParams::new(),
        }
    }

    pub fn with_params(module: &str, params: NavigationParams) -> Self {
        Self {
            module: module.to_string(),
            params,
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            write!(f, "{}", self.module)
        } else {
            write!(f, "{} {}", self.module, self.params)
        }
    }
}
