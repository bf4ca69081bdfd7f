//! Terminal presentation helpers
//!
//! Coordinates are shown as a column letter followed by a 1-based row
//! (`A1` is the top-left cell). Boards render to strings so the front end
//! decides where they go.

pub mod interface;

pub use interface::*;
