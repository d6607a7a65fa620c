//! # TUI Components
//!
//! Shell chrome drawn around the active screen.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: module title and back-history depth
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SidebarState` / `Sidebar`: module list, emits `SidebarEvent::Open`
//!
//! Components receive external data as props (function parameters) instead
//! of reading the navigator directly, which keeps them testable with a
//! `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (top status line)
//! └── sidebar.rs    (module list)
//! ```

pub mod sidebar;
mod title_bar;

pub use sidebar::{Sidebar, SidebarEvent, SidebarState};
pub use title_bar::TitleBar;
