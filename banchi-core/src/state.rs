//! A snapshot of a game: board, boneyard, hidden inventory and score.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::error::DecodeResult;
use crate::moves::Move;
use crate::movegen;
use crate::piece::{Piece, Rank, Side};
use crate::team::Team;

/// The state of a game of Ban Chi as seen by the side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// Content of the board's squares.
    pub board: Board,
    /// Pieces that have been captured.
    pub dead: Vec<Piece>,
    /// Pieces not yet turned face-up, with how many of each remain.
    pub down: BTreeMap<Piece, i32>,
    /// Heuristic score; positive favors red.
    pub score: i32,
    /// The team whose turn it is, if colors have been assigned.
    pub us: Option<&'static Team>,
    /// The other team.
    pub them: Option<&'static Team>,
}

impl State {
    /// Build a state from Pao-style descriptors.
    ///
    /// `to_move` is empty before the first flip of the game, when neither
    /// player has a color; otherwise see [`side_to_move`].
    pub fn new<S: AsRef<str>>(to_move: &str, board: &[Vec<S>], dead: &[S]) -> DecodeResult<State> {
        let board = Board::from_descriptors(board)?;
        let dead = dead_list(dead)?;
        let side = side_to_move(to_move);
        Ok(State::from_parts(side, board, dead))
    }

    /// Build a state from already-decoded parts.
    pub fn from_parts(side: Option<Side>, board: Board, dead: Vec<Piece>) -> State {
        let down = down_list(&board, &dead);
        let score = compute_score(&board, &dead);
        let us = side.map(Team::of);
        let them = us.map(Team::opponent);
        State {
            board,
            dead,
            down,
            score,
            us,
            them,
        }
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        movegen::legal_moves(self.us, self.them, &self.board)
    }

    /// Number of pieces still face-down (on the board or yet to be placed).
    pub fn down_count(&self) -> i32 {
        self.down.values().sum()
    }
}

/// Decode the side-to-move indicator. Empty means no side yet; a leading
/// `b` (any case) is black and anything else is red.
pub fn side_to_move(to_move: &str) -> Option<Side> {
    match to_move.chars().next() {
        None => None,
        Some('b' | 'B') => Some(Side::Black),
        Some(_) => Some(Side::Red),
    }
}

fn dead_list<S: AsRef<str>>(dead: &[S]) -> DecodeResult<Vec<Piece>> {
    dead.iter().map(|d| Piece::from_descriptor(d.as_ref())).collect()
}

/// Count the pieces that are neither face-up nor dead.
fn down_list(board: &Board, dead: &[Piece]) -> BTreeMap<Piece, i32> {
    // Start from the full set...
    let mut counts: BTreeMap<Piece, i32> = Side::ALL
        .into_iter()
        .flat_map(|side| Rank::ALL.map(|rank| (Piece::new(side, rank), rank.starting_count())))
        .collect();
    // ...then remove what is visible on the board or in the boneyard.
    for piece in board.pieces().chain(dead.iter().copied()) {
        if let Some(count) = counts.get_mut(&piece) {
            *count -= 1;
        }
    }
    counts.retain(|_, count| *count > 0);
    counts
}

/// Rough estimate of who is ahead: positive means red, negative black.
///
/// Every piece starts out assumed face-down, and the 32 starting pieces sum to
/// zero. A face-up piece counts twice its points, so each one on the board adds
/// its points once more. A dead piece counts nothing, so each one subtracts the
/// points it was assumed to have.
pub fn compute_score(board: &Board, dead: &[Piece]) -> i32 {
    let face_up: i32 = board.pieces().map(Piece::points).sum();
    let boneyard: i32 = dead.iter().map(|p| p.points()).sum();
    face_up - boneyard
}
