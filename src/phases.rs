//! The four Thistlethwaite phases: their reduced turn catalogs and the
//! coset invariants that collapse each phase's search space.

use crate::cube::{Face, State, Turn, TurnType};
use lazy_static::lazy_static;

/// A phase's deduplication and goal-test key. Two states with equal ids are
/// interchangeable for the purposes of finishing that phase; searches prune
/// by id instead of by full configuration.
pub type CosetId = Vec<u8>;

/// Edge slots of the E slice (the layer between U and D).
const E_SLICE: [usize; 4] = [3, 5, 21, 23];

/// Edge slots of the M slice (the layer between L and R).
const M_SLICE: [usize; 4] = [9, 11, 15, 17];

/// Edge slots of the S slice (the layer between F and B).
const S_SLICE: [usize; 4] = [1, 7, 19, 25];

/// The diagonal corner pairs of the U and D layers, tracked individually
/// for the third phase.
const CORNER_PAIRS: [[usize; 2]; 4] = [[8, 24], [6, 26], [0, 20], [2, 18]];

/// The eight corner slots in the fixed order used for the permutation
/// parity bit.
const CORNER_ORDER: [usize; 8] = [24, 26, 8, 6, 18, 0, 2, 20];

/// The four move-restricted stages of Thistlethwaite's method. Each stage
/// targets membership in a smaller subgroup of the cube group than the one
/// before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Orient every edge; all turns are legal.
    G1,
    /// Orient every corner and confine the E-slice edges to their slice;
    /// F and B are restricted to double turns.
    G2,
    /// Confine the M and S slice edges, pair up the corner diagonals, and
    /// fix corner permutation parity; only U and D keep quarter turns.
    G3,
    /// Finish the cube using double turns only.
    G4,
}

lazy_static! {
    /// Legal turns per phase, in fixed (face, multiplicity) order so that
    /// searches expand deterministically.
    static ref PHASE_TURNS: [Vec<Turn>; 4] = {
        use TurnType::{Backward, Double, Forward};
        const FULL: &[TurnType] = &[Forward, Double, Backward];
        const HALF: &[TurnType] = &[Double];
        let catalog = |styles: [&[TurnType]; 6]| -> Vec<Turn> {
            Face::ALL
                .iter()
                .zip(styles)
                .flat_map(|(&face, styles)| {
                    styles.iter().map(move |&style| Turn { face, style })
                })
                .collect()
        };
        [
            catalog([FULL; 6]),
            catalog([FULL, FULL, FULL, FULL, HALF, HALF]),
            catalog([HALF, HALF, FULL, FULL, HALF, HALF]),
            catalog([HALF; 6]),
        ]
    };
}

impl Phase {
    /// All phases, in solving order.
    pub const ALL: [Phase; 4] = [Phase::G1, Phase::G2, Phase::G3, Phase::G4];

    /// The turns legal within this phase.
    #[must_use]
    pub fn turns(self) -> &'static [Turn] {
        &PHASE_TURNS[self as usize]
    }

    /// Computes |state|'s coset id for this phase. The id is derived on
    /// demand and never stored.
    #[must_use]
    pub fn coset_id(self, state: &State) -> CosetId {
        match self {
            // Orientation of every edge slot (the odd tracked indices).
            Phase::G1 => state.orientations().iter().skip(1).step_by(2).copied().collect(),
            // Orientation of every corner slot, plus where the E-slice
            // edges currently sit. The locations (not just a confinement
            // flag) must be part of the id: states whose slice edges sit in
            // different slots need different moves to finish the phase, so
            // collapsing them to one key would prune live search states.
            Phase::G2 => {
                let mut id: CosetId = state.orientations().iter().step_by(2).copied().collect();
                id.extend(occupied_slots(state, &E_SLICE));
                id
            }
            // Locations of the M and S slice edges and of each corner
            // diagonal pair, plus the corner permutation parity bit.
            Phase::G3 => {
                let mut id = occupied_slots(state, &M_SLICE);
                id.extend(occupied_slots(state, &S_SLICE));
                for pair in &CORNER_PAIRS {
                    id.extend(occupied_slots(state, pair));
                }
                id.push(corner_parity(state));
                id
            }
            // Exact match on the full permutation and orientation vectors.
            Phase::G4 => {
                let mut id = state.cubies().to_vec();
                id.extend_from_slice(state.orientations());
                id
            }
        }
    }

    /// The goal id: the solved configuration's coset id for this phase.
    #[must_use]
    pub fn goal_id(self) -> CosetId {
        self.coset_id(&State::solved())
    }
}

/// The slots currently occupied by the cubies that belong in |slots|, in
/// ascending order. Equals |slots| sorted exactly when those cubies are
/// confined to their home region.
fn occupied_slots(state: &State, slots: &[usize]) -> Vec<u8> {
    state
        .cubies()
        .iter()
        .enumerate()
        .filter(|&(_, &cubie)| slots.contains(&usize::from(cubie)))
        .map(|(slot, _)| slot as u8)
        .collect()
}

/// Parity of the corner permutation: the number of out-of-order pairs, mod
/// 2, of the corner occupants ranked by their home position in
/// `CORNER_ORDER`. Half turns preserve it; quarter turns of U or D flip it.
fn corner_parity(state: &State) -> u8 {
    let ranks: Vec<usize> = CORNER_ORDER
        .iter()
        .map(|&slot| {
            let cubie = usize::from(state.cubies()[slot]);
            CORNER_ORDER
                .iter()
                .position(|&home| home == cubie)
                .expect("corner slot holds a non-corner cubie")
        })
        .collect();
    let mut inversions = 0u32;
    for i in 0..ranks.len() {
        for j in i + 1..ranks.len() {
            if ranks[i] > ranks[j] {
                inversions += 1;
            }
        }
    }
    (inversions % 2) as u8
}
