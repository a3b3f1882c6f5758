//! Checks a set of hand-analysed positions against the rules engine and the
//! greedy evaluator.
//!
//! Each position in `tests/data/positions.json` records the decoded score,
//! the number of legal moves (and of flips among them), every capture in
//! generation order, and the best delta the evaluator should find.

use banchi_core::{Action, Bot, GreedyBot, Maximizer, Move, State};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TestData {
    version: String,
    positions: Vec<Position>,
}

#[derive(Debug, Deserialize)]
struct Position {
    description: String,
    to_move: String,
    board: Vec<Vec<String>>,
    dead: Vec<String>,
    score: i32,
    flips: usize,
    legal_move_count: usize,
    takes: Vec<String>,
    best_delta: i32,
    best_count: usize,
}

fn load_test_data() -> TestData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/positions.json");
    let content = fs::read_to_string(&path).expect("failed to read positions.json");
    serde_json::from_str(&content).expect("failed to parse positions.json")
}

fn decode(pos: &Position) -> State {
    State::new(&pos.to_move, &pos.board, &pos.dead)
        .unwrap_or_else(|e| panic!("{}: failed to decode: {}", pos.description, e))
}

#[test]
fn test_fixture_loads() {
    let data = load_test_data();
    assert_eq!(data.version, "1");
    assert!(!data.positions.is_empty());
}

#[test]
fn test_decoded_scores() {
    let data = load_test_data();
    let mut errors = Vec::new();

    for pos in &data.positions {
        let state = decode(pos);
        if state.score != pos.score {
            errors.push(format!(
                "{}: score {} expected {}",
                pos.description, state.score, pos.score
            ));
        }
        // the board survives a trip back to descriptors
        let again = State::new(&pos.to_move, &state.board.to_descriptors(), &pos.dead)
            .expect("re-encoded board decodes");
        if again != state {
            errors.push(format!("{}: board changed when re-encoded", pos.description));
        }
    }

    assert!(errors.is_empty(), "score mismatches:\n{}", errors.join("\n"));
}

#[test]
fn test_legal_moves() {
    let data = load_test_data();
    let mut errors = Vec::new();

    for pos in &data.positions {
        let moves = decode(pos).legal_moves();

        if moves.len() != pos.legal_move_count {
            errors.push(format!(
                "{}: {} legal moves, expected {}",
                pos.description,
                moves.len(),
                pos.legal_move_count
            ));
        }

        let flips = moves.iter().filter(|m| m.action() == Action::Flip).count();
        if flips != pos.flips {
            errors.push(format!(
                "{}: {} flips, expected {}",
                pos.description, flips, pos.flips
            ));
        }

        // flips always come before anything else
        if moves[..flips].iter().any(|m| m.action() != Action::Flip) {
            errors.push(format!("{}: flips are not listed first", pos.description));
        }

        let takes: Vec<String> = moves
            .iter()
            .filter(|m| m.action() == Action::Take)
            .map(Move::to_string)
            .collect();
        if takes != pos.takes {
            errors.push(format!(
                "{}: takes {:?}, expected {:?}",
                pos.description, takes, pos.takes
            ));
        }
    }

    assert!(errors.is_empty(), "movegen mismatches:\n{}", errors.join("\n"));
}

#[test]
fn test_best_moves() {
    let data = load_test_data();
    let mut errors = Vec::new();

    for pos in &data.positions {
        let state = decode(pos);
        let (delta, best) = Maximizer::new(&state).best_moves();

        if delta != pos.best_delta || best.len() != pos.best_count {
            errors.push(format!(
                "{}: best delta {} over {} moves, expected {} over {}",
                pos.description,
                delta,
                best.len(),
                pos.best_delta,
                pos.best_count
            ));
        }

        let mut bot = GreedyBot::seeded(2024);
        for _ in 0..10 {
            let chosen = bot.choose_move(&state);
            if !best.contains(&chosen) {
                errors.push(format!(
                    "{}: bot chose {} outside the best set",
                    pos.description, chosen
                ));
                break;
            }
        }
    }

    assert!(errors.is_empty(), "evaluator mismatches:\n{}", errors.join("\n"));
}
