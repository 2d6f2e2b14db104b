//! searchbar library crate.

pub mod app;
pub mod config;
pub mod elements;
pub mod harness;
pub mod search;
pub mod ui;
pub mod widget;
#[cfg(test)]
mod test_support;
