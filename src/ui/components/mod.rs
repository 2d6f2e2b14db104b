//! Reusable render components.

pub mod footer;
pub mod results;
pub mod search_bar;
