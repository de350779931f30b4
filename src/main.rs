#![warn(clippy::all, clippy::pedantic)]
//! Console driver: scrambles a cube (or replays a scramble given as the
//! first argument), solves it with Thistlethwaite's method, and prints the
//! solution.

use thistlethwaite_rs::{notation, Solver};

fn main() {
    pretty_env_logger::init();

    let scramble = std::env::args()
        .nth(1)
        .unwrap_or_else(|| notation::random_scramble(20, &mut rand::rng()));
    println!("Scrambling ... {scramble}");

    let faces = match notation::parse_moves(&scramble) {
        Ok(faces) => faces,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut solver = Solver::new();
    solver.apply_moves(&faces);
    match solver.solve() {
        Ok(solution) => println!("Solution: {solution}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
