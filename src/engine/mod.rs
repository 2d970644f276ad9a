pub mod align;
pub mod compare;
pub mod config;
pub mod segment;
pub mod token;

pub use align::{align, LOOKAHEAD_WINDOW};
pub use compare::{compare, Comparison};
pub use segment::{project, reconstruct, DiffStats, Segment, SegmentKind, Side};
pub use token::{join_tokens, tokenize, Token};
