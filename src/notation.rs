//! Move notation: parsing scramble strings into base face sequences,
//! formatting routes back into compact tokens, and generating random
//! scrambles.

use crate::cube::{Face, Turn, TurnType};
use rand::Rng;
use thiserror::Error;

/// Rejected scramble input. Raised at this boundary only; an invalid face
/// can never reach the solving core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// A token that is not a face letter plus an optional `2` or `'`.
    #[error("unrecognized move token `{0}`")]
    BadToken(String),
}

/// Parses space-separated tokens ("R", "U2", "F'") into the expanded base
/// face sequence: a bare letter is one quarter turn, a `2` suffix two, a
/// `'` suffix three.
///
/// # Errors
///
/// Returns `NotationError::BadToken` for any malformed token.
pub fn parse_moves(input: &str) -> Result<Vec<Face>, NotationError> {
    let mut faces = Vec::new();
    for token in input.split_whitespace() {
        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| NotationError::BadToken(token.to_string()))?;
        let repetitions = match chars.as_str() {
            "" => 1,
            "2" => 2,
            "'" => 3,
            _ => return Err(NotationError::BadToken(token.to_string())),
        };
        faces.extend(std::iter::repeat(face).take(repetitions));
    }
    Ok(faces)
}

/// Formats a base face route as compact tokens: each run of the same face
/// becomes one token with the matching suffix. Runs of four cancel and emit
/// nothing.
#[must_use]
pub fn format_route(route: &[Face]) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut i = 0;
    while i < route.len() {
        let face = route[i];
        let mut run = 0;
        while i < route.len() && route[i] == face {
            run += 1;
            i += 1;
        }
        let style = match run % 4 {
            0 => None,
            1 => Some(TurnType::Forward),
            2 => Some(TurnType::Double),
            _ => Some(TurnType::Backward),
        };
        if let Some(style) = style {
            tokens.push(Turn { face, style }.to_string());
        }
    }
    tokens.join(" ")
}

/// Produces a random scramble string of |length| tokens with no two
/// consecutive turns of the same face and uniformly random multiplicity.
pub fn random_scramble<R: Rng>(length: usize, rng: &mut R) -> String {
    let mut tokens = Vec::with_capacity(length);
    let mut last: Option<Face> = None;
    for _ in 0..length {
        let mut face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        while last == Some(face) {
            face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        }
        last = Some(face);
        let style = match rng.random_range(0..3) {
            0 => TurnType::Forward,
            1 => TurnType::Double,
            _ => TurnType::Backward,
        };
        tokens.push(Turn { face, style }.to_string());
    }
    tokens.join(" ")
}
