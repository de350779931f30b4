//! Cubie-level model of the cube: faces, turns, and the tracked
//! permutation/orientation state.

use std::fmt;

/// Number of tracked cubie slots. The 3x3x3 arrangement is flattened to
/// indices 0..27; slot 13 is the hidden center, carried for uniformity but
/// never moved by any turn.
pub const SLOTS: usize = 27;

/// The six faces of the cube, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Left.
    L,
    /// Right.
    R,
    /// Up.
    U,
    /// Down.
    D,
    /// Front.
    F,
    /// Back.
    B,
}

/// Per face, the 8 slots relabeled by a quarter turn of that face. Each row
/// is two 4-cycles: positions 0..=3 are the edge slots, positions 4..=7 the
/// corner slots, listed so that position i receives the contents of position
/// i+1 within its cycle.
const TURN_CYCLES: [[usize; 8]; 6] = [
    [7, 5, 1, 3, 6, 8, 2, 0],         // L
    [25, 21, 19, 23, 26, 24, 18, 20], // R
    [15, 25, 17, 7, 24, 26, 8, 6],    // U
    [9, 1, 11, 19, 18, 0, 2, 20],     // D
    [15, 3, 9, 21, 24, 6, 0, 18],     // F
    [17, 23, 11, 5, 8, 26, 20, 2],    // B
];

impl Face {
    /// All faces, in table order.
    pub const ALL: [Face; 6] = [Face::L, Face::R, Face::U, Face::D, Face::F, Face::B];

    /// The standard notation letter for this face.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::L => 'L',
            Face::R => 'R',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// Looks up the face named by a notation letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.letter() == letter)
    }

    /// The two 4-cycles of slots relabeled by a quarter turn of this face.
    fn cycle(self) -> &'static [usize; 8] {
        &TURN_CYCLES[self as usize]
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The three multiplicities a face turn can have. A double or backward turn
/// is always applied as 2 or 3 repetitions of the base quarter turn, never
/// as a separate formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnType {
    /// A clockwise quarter turn.
    Forward,
    /// A half turn.
    Double,
    /// A counterclockwise quarter turn.
    Backward,
}

impl TurnType {
    /// How many base quarter turns this multiplicity expands to.
    #[must_use]
    pub fn repetitions(self) -> usize {
        match self {
            TurnType::Forward => 1,
            TurnType::Double => 2,
            TurnType::Backward => 3,
        }
    }

    /// The notation suffix for this multiplicity.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            TurnType::Forward => "",
            TurnType::Double => "2",
            TurnType::Backward => "'",
        }
    }
}

/// A face together with a multiplicity, e.g. `R2` or `U'`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Turn {
    /// The face being turned.
    pub face: Face,
    /// How far it turns.
    pub style: TurnType,
}

impl Turn {
    /// Expands this turn into its base quarter turns.
    #[must_use]
    pub fn quarter_turns(self) -> Vec<Face> {
        vec![self.face; self.style.repetitions()]
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.style.suffix())
    }
}

/// A cube configuration: which cubie occupies each slot, how each one is
/// twisted, and the base face turns that produced it from its root.
///
/// `State` is a value object. Applying turns never mutates in place; it
/// derives a new `State`, so frontiers can hold many states without
/// aliasing and a phase's winning state can seed the next phase's search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    cubies: [u8; SLOTS],
    orientations: [u8; SLOTS],
    route: Vec<Face>,
}

impl State {
    /// The solved configuration with an empty route.
    #[must_use]
    pub fn solved() -> State {
        let cubies: [u8; SLOTS] = std::array::from_fn(|i| i as u8);
        State {
            cubies,
            orientations: [0; SLOTS],
            route: Vec::new(),
        }
    }

    /// Returns a new `State` with each base face turn of |faces| applied in
    /// order. The new route is this state's route extended by |faces|.
    ///
    /// Every turn is a permutation of the slots, so the cubie mapping stays
    /// a bijection for the lifetime of any state derived from `solved`.
    #[must_use]
    pub fn apply(&self, faces: &[Face]) -> State {
        let mut cubies = self.cubies;
        let mut orientations = self.orientations;
        for &face in faces {
            let cycle = face.cycle();
            let old_cubies = cubies;
            let old_orientations = orientations;
            for i in 0..8 {
                // Position i receives the contents of position i+1 within
                // its own 4-cycle.
                let from = cycle[if (i + 1) % 4 == 0 { i - 3 } else { i + 1 }];
                let to = cycle[i];
                let (delta, modulus) = if i > 3 {
                    // Corners twist on every face except U and D.
                    let delta = if matches!(face, Face::U | Face::D) {
                        0
                    } else {
                        2 - (i as u8 % 2)
                    };
                    (delta, 3)
                } else {
                    // Edges flip only on F and B.
                    (u8::from(matches!(face, Face::F | Face::B)), 2)
                };
                cubies[to] = old_cubies[from];
                orientations[to] = (old_orientations[from] + delta) % modulus;
            }
        }
        let mut route = self.route.clone();
        route.extend_from_slice(faces);
        State {
            cubies,
            orientations,
            route,
        }
    }

    /// The same configuration with an empty route; the root for a fresh
    /// search.
    #[must_use]
    pub fn rerooted(&self) -> State {
        State {
            cubies: self.cubies,
            orientations: self.orientations,
            route: Vec::new(),
        }
    }

    /// Which cubie currently occupies each slot.
    #[must_use]
    pub fn cubies(&self) -> &[u8; SLOTS] {
        &self.cubies
    }

    /// The twist of the cubie in each slot. Corner slots hold values mod 3,
    /// edge slots mod 2, untouched slots stay 0.
    #[must_use]
    pub fn orientations(&self) -> &[u8; SLOTS] {
        &self.orientations
    }

    /// The base face turns that produced this state from its root.
    #[must_use]
    pub fn route(&self) -> &[Face] {
        &self.route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_bijection(state: &State) -> bool {
        let mut seen = [false; SLOTS];
        for &cubie in state.cubies() {
            seen[cubie as usize] = true;
        }
        seen.iter().all(|&hit| hit)
    }

    fn same_configuration(a: &State, b: &State) -> bool {
        a.cubies() == b.cubies() && a.orientations() == b.orientations()
    }

    #[test]
    fn four_quarter_turns_cancel() {
        for face in Face::ALL {
            let turned = State::solved().apply(&[face; 4]);
            assert!(same_configuration(&turned, &State::solved()), "{face}");
        }
    }

    #[test]
    fn front_turn_flips_its_edges() {
        let turned = State::solved().apply(&[Face::F]);
        for slot in [3, 9, 15, 21] {
            assert_eq!(turned.orientations()[slot], 1);
        }
    }

    #[test]
    fn up_turn_preserves_all_orientations() {
        let turned = State::solved().apply(&[Face::U]);
        assert_eq!(turned.orientations(), &[0; SLOTS]);
    }

    #[test]
    fn permutation_stays_bijective() {
        use Face::{B, D, F, L, R, U};
        let state = State::solved().apply(&[R, U, F, L, D, B, R, R, U, F, F, F, D]);
        assert!(is_bijection(&state));
    }

    #[test]
    fn orientations_stay_in_bounds() {
        use Face::{B, D, F, L, R, U};
        let state = State::solved().apply(&[F, R, U, B, B, L, D, F, F, F, R, U, U, B, L, L]);
        for slot in 0..SLOTS {
            let bound = if slot % 2 == 0 { 3 } else { 2 };
            assert!(state.orientations()[slot] < bound, "slot {slot}");
        }
    }

    #[test]
    fn inverse_route_cancels() {
        use Face::{B, F, R, U};
        let forward = [R, U, F, F, B];
        let mut state = State::solved().apply(&forward);
        for &face in forward.iter().rev() {
            state = state.apply(&[face; 3]);
        }
        assert!(same_configuration(&state, &State::solved()));
    }

    #[test]
    fn route_concatenates_across_applies() {
        use Face::{R, U};
        let state = State::solved().apply(&[R]).apply(&[U, U]);
        assert_eq!(state.route(), &[R, U, U]);
        assert_eq!(state.rerooted().route(), &[]);
    }
}
