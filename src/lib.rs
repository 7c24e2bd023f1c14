//! Holocron library exports for testing

pub mod core;
pub mod swapi;
pub mod tui;

#[cfg(test)]
pub mod test_support;
