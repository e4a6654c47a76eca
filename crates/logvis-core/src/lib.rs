#![forbid(unsafe_code)]

//! Unicode bidirectional text resolution for logvis.
//!
//! Implements the two-level form of the bidirectional algorithm over
//! run-length-encoded category runs: classify, encode, resolve weak then
//! neutral categories, assign implicit embedding levels, and reorder by
//! recursive reversal with bracket mirroring on odd levels.
//!
//! # Role in logvis
//! `logvis-core` is the algorithmic heart: pure functions over character
//! slices with no I/O, no hidden state, and deterministic output. Charset
//! codecs and the command-line front end live in sibling crates and call
//! [`resolve`] once per line.
//!
//! # Invariants
//! - Requested logical↔visual maps are always mutual inverse permutations.
//! - Inputs longer than [`MAX_INPUT_LEN`] are rejected before any work.
//! - Unmapped code points classify as strong left-to-right; the pipeline
//!   never fails on content.

pub mod class;
pub mod mapper;
pub mod reorder;
pub mod types;

mod levels;
mod neutral;
mod runs;
mod tables;
mod weak;

pub use class::{bidi_class, is_strong_arabic, mirror_of};
pub use mapper::{CaretPosition, Span, change_bounds, map_range, resolve_caret};
pub use reorder::{Resolved, ResolvedLevels, ResolveRequest, resolve, resolve_levels};
pub use types::{BaseDirection, BidiClass, BidiError, Direction, MAX_INPUT_LEN};
