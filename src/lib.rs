//! Fortune Caster library exports for testing

pub mod core;
pub mod once;
pub mod share;
pub mod tui;

#[cfg(test)]
pub mod test_support;
