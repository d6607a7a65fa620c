//! # Actions
//!
//! Everything the shell (or a screen) can ask of the core becomes an `Action`.
//! Sidebar Enter? That's `Action::Navigate { .. }`. Backspace? `Action::GoBack`.
//!
//! `update()` applies an action to the navigator and returns an `Effect` that
//! tells the shell what to do next. No I/O happens here.
//!
//! ```text
//! Navigator + Action  →  update()  →  Effect
//! ```
//!
//! Screens never hold the navigator. They return an `Action` from their event
//! handler and the shell feeds it through `update()`, which is how the
//! `navigate` capability reaches them.

use log::debug;

use crate::core::navigator::Navigator;
use crate::core::params::Payload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate { module: String, payload: Payload },
    GoBack,
    Quit,
}

impl Action {
    /// Shorthand for `Action::Navigate`.
    pub fn navigate(module: &str, payload: impl Into<Payload>) -> Self {
        Action::Navigate {
            module: module.to_string(),
            payload: payload.into(),
        }
    }
}

/// What the shell should do after an `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing observable changed.
    None,
    /// A new state was committed; redraw.
    Render,
    Quit,
}

pub fn update(nav: &mut Navigator, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Navigate { module, payload } => {
            nav.navigate(&module, payload);
            Effect::Render
        }
        Action::GoBack => {
            if nav.can_go_back() {
                nav.go_back();
                Effect::Render
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}
