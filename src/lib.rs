//! HRMS navigator: routing core and terminal shell

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
