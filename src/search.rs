//! Breadth-first phase search: expands a frontier of states depth by depth,
//! deduplicating by coset id, until the phase goal is reached.

use crate::cube::State;
use crate::phases::{CosetId, Phase};
use log::debug;
use rayon::iter::*;
use std::collections::HashSet;
use thiserror::Error;

/// Fatal search failures. Thistlethwaite's method guarantees every phase
/// goal is reachable in bounded depth, so either variant indicates a bug in
/// the turn tables, coset functions, or phase catalogs; neither is a
/// recoverable runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The goal coset was not reached within the configured turn ceiling.
    #[error("{phase:?} goal not reached within {limit} turns")]
    LimitExceeded {
        /// The phase being searched.
        phase: Phase,
        /// The configured turn-count ceiling.
        limit: u16,
    },
    /// Every reachable coset was expanded without meeting the goal.
    #[error("{phase:?} frontier exhausted without reaching the goal coset")]
    FrontierExhausted {
        /// The phase being searched.
        phase: Phase,
    },
}

/// A single phase's breadth-first search over the states reachable from a
/// start state via the phase's legal turns.
#[derive(typed_builder::TypedBuilder)]
pub struct PhaseSearch<'a> {
    /// Where the search starts. The returned state's route extends this
    /// state's route, which is how phase solutions concatenate.
    start: &'a State,

    /// Which phase's catalog and coset invariant to search under.
    phase: Phase,

    /// Optional ceiling on the catalog turn count; exceeding it is fatal.
    #[builder(default = None)]
    limit: Option<u16>,
}

impl PhaseSearch<'_> {
    /// Runs the search to completion. Returns a state whose coset id equals
    /// the goal's, reached in the fewest possible catalog turns (the first
    /// hit in breadth-first order). A start that already matches the goal
    /// is returned unchanged, contributing zero turns.
    ///
    /// # Errors
    ///
    /// Returns a `SearchError` if the goal is unreachable or the configured
    /// turn ceiling is exceeded; both are internal-consistency failures.
    pub fn run(&self) -> Result<State, SearchError> {
        let phase = self.phase;
        let goal = phase.goal_id();
        let start_id = phase.coset_id(self.start);
        if start_id == goal {
            return Ok(self.start.clone());
        }

        let turns = phase.turns();
        let mut seen: HashSet<CosetId> = HashSet::from([start_id]);
        let mut frontier = vec![self.start.clone()];
        let mut depth: u16 = 0;

        loop {
            depth += 1;
            if let Some(limit) = self.limit {
                if depth > limit {
                    return Err(SearchError::LimitExceeded { phase, limit });
                }
            }

            // Expand the whole depth in parallel. Collecting into a Vec
            // keeps frontier x catalog order, so the sequential goal test
            // below still meets the first-found-is-shortest contract.
            let children: Vec<(State, CosetId)> = frontier
                .par_iter()
                .flat_map_iter(|state| {
                    turns.iter().map(move |turn| {
                        let child = state.apply(&turn.quarter_turns());
                        let id = phase.coset_id(&child);
                        (child, id)
                    })
                })
                .collect();

            frontier = Vec::new();
            for (child, id) in children {
                if id == goal {
                    return Ok(child);
                }
                if seen.insert(id) {
                    frontier.push(child);
                }
            }
            debug!("{phase:?} depth {depth}: {} new cosets", frontier.len());

            if frontier.is_empty() {
                return Err(SearchError::FrontierExhausted { phase });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Face;

    #[test]
    fn solved_start_contributes_zero_turns() {
        let start = State::solved();
        for phase in Phase::ALL {
            let found = PhaseSearch::builder()
                .start(&start)
                .phase(phase)
                .build()
                .run()
                .unwrap();
            assert_eq!(found.route(), &[]);
        }
    }

    #[test]
    fn finds_shortest_fix_in_catalog_order() {
        // One quarter turn of U leaves the corner parity odd; the first
        // catalog turn that repairs it is another quarter of U.
        let start = State::solved().apply(&[Face::U]);
        let found = PhaseSearch::builder()
            .start(&start)
            .phase(Phase::G3)
            .build()
            .run()
            .unwrap();
        assert_eq!(found.route(), &[Face::U, Face::U]);
    }

    #[test]
    fn restores_the_phase_invariant() {
        let start = State::solved().apply(&[Face::R, Face::R, Face::R]);
        let found = PhaseSearch::builder()
            .start(&start)
            .phase(Phase::G2)
            .build()
            .run()
            .unwrap();
        assert_eq!(Phase::G2.coset_id(&found), Phase::G2.goal_id());
        assert!(found.route().len() > start.route().len());
    }

    #[test]
    fn zero_turn_ceiling_is_fatal_for_an_unsolved_start() {
        let start = State::solved().apply(&[Face::R]);
        let err = PhaseSearch::builder()
            .start(&start)
            .phase(Phase::G2)
            .limit(Some(0))
            .build()
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            SearchError::LimitExceeded {
                phase: Phase::G2,
                limit: 0
            }
        );
    }
}
