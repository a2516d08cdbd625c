//! Utility data structures

pub mod two_way_map;

pub use two_way_map::TwoWayMap;
