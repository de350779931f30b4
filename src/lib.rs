#![warn(clippy::all, clippy::pedantic)]
// Run with `cargo clippy --all -- -D warnings`.
#![deny(missing_docs)]
//! Thistlethwaite's four-phase solver for the 3x3x3 Rubik's cube.
//!
//! The cube is tracked as a permutation of 27 cubie slots plus a twist value
//! per slot. Each phase restricts the legal turn set to a smaller subgroup
//! and searches breadth-first for the fewest turns that restore that phase's
//! invariant, deduplicating states by a reduced coset id rather than by full
//! configuration. Concatenating the four phase routes yields a complete
//! (phase-wise shortest, not globally shortest) solution.

pub mod cube;
pub mod notation;
pub mod phases;
pub mod search;
pub mod solver;

pub use cube::{Face, State, Turn, TurnType};
pub use phases::Phase;
pub use search::{PhaseSearch, SearchError};
pub use solver::Solver;
