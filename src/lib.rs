//! Word-level comparison of two texts.
//!
//! [`engine::compare`] tokenizes both inputs on whitespace boundaries and
//! aligns them with a greedy, bounded-lookahead heuristic, labeling every
//! token as unchanged, added or removed. The `app` and `ui` modules wrap the
//! engine in a side-by-side terminal viewer.

pub mod app;
pub mod engine;
pub mod input;
pub mod logging;
pub mod ui;
