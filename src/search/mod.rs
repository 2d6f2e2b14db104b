//! Query matching for the demo item list.

pub mod fuzzy;
