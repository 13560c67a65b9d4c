//! Atlas library exports: the country store, its data sources, and the
//! terminal/CLI views built on top of them.

pub mod core;
pub mod report;
pub mod source;
pub mod tui;

#[cfg(test)]
pub mod test_support;
