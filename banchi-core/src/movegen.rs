//! Legal move generation.
//!
//! Moves come out in a fixed order: every flip first (row-major), then the
//! slides and captures of each of our face-up pieces (row-major by piece,
//! then up, left, down, right).

use crate::board::{Board, Location};
use crate::moves::Move;
use crate::piece::Piece;
use crate::team::Team;

/// Orthogonal directions in generation order: up, left, down, right.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// All legal moves for `us` against `them` on `board`.
///
/// With no teams assigned (before the first flip) only flips are legal.
/// Panics if generation produced a move that is inconsistent with `board`.
pub fn legal_moves(us: Option<&Team>, them: Option<&Team>, board: &Board) -> Vec<Move> {
    let mut finder = MoveFinder {
        us,
        them,
        board,
        flips: Vec::new(),
        moves: Vec::new(),
    };
    finder.find_moves();
    let moves = finder.into_moves();
    verify_moves(us, them, board, &moves);
    moves
}

struct MoveFinder<'a> {
    us: Option<&'a Team>,
    them: Option<&'a Team>,
    board: &'a Board,
    flips: Vec<Move>,
    moves: Vec<Move>,
}

impl MoveFinder<'_> {
    fn find_moves(&mut self) {
        for (at, piece) in self.board.cells() {
            if piece == Piece::FaceDown {
                self.flips.push(Move::Flip { at });
            } else if self.us.is_some_and(|us| us.contains(piece)) {
                self.try_using(at, piece);
            }
        }
    }

    fn into_moves(mut self) -> Vec<Move> {
        self.flips.append(&mut self.moves);
        self.flips
    }

    fn try_using(&mut self, at: Location, piece: Piece) {
        for (dr, dc) in DIRECTIONS {
            if let Some(to) = at.offset(dr, dc) {
                self.try_direction(piece, at, to, dr, dc);
            }
        }
    }

    fn try_direction(&mut self, actor: Piece, at: Location, to: Location, dr: isize, dc: isize) {
        let defender = self.board[to];

        if defender == Piece::Empty {
            self.moves.push(Move::Move { actor, at, to });
        }

        if actor.can_take_if_adjacent(defender) {
            self.moves.push(Move::Take {
                actor,
                at,
                killed: defender,
                to,
            });
        }

        if self.us.is_some_and(|us| actor == us.cannon) {
            if let Some((to, killed)) = self.cannon_target(at, dr, dc) {
                if self.them.is_some_and(|them| them.contains(killed)) {
                    self.moves.push(Move::Take {
                        actor,
                        at,
                        killed,
                        to,
                    });
                }
            }
        }
    }

    /// The second occupied square from `at` in direction `(dr, dc)`, with its
    /// piece. The first occupied square is the screen the cannon jumps.
    fn cannon_target(&self, at: Location, dr: isize, dc: isize) -> Option<(Location, Piece)> {
        let mut seen = 0;
        let mut loc = at;
        while let Some(next) = loc.offset(dr, dc) {
            loc = next;
            let piece = self.board[loc];
            if piece != Piece::Empty {
                seen += 1;
                if seen == 2 {
                    return Some((loc, piece));
                }
            }
        }
        None
    }
}

/// Check every generated move against the board it came from.
fn verify_moves(us: Option<&Team>, them: Option<&Team>, board: &Board, moves: &[Move]) {
    let ours = |p: Piece| us.is_some_and(|t| t.contains(p));
    let theirs = |p: Piece| them.is_some_and(|t| t.contains(p));
    for m in moves {
        match *m {
            Move::Quit => {}
            Move::Flip { at } => {
                assert!(
                    board[at] == Piece::FaceDown,
                    "generated turnup of non-facedown piece: {}",
                    m
                );
            }
            Move::Move { at, to, .. } => {
                assert!(ours(board[at]), "moving a piece that isn't mine: {}", m);
                assert!(board[to] == Piece::Empty, "moving onto an occupied square: {}", m);
            }
            Move::Take { at, to, .. } => {
                assert!(ours(board[at]), "taking with a piece that isn't mine: {}", m);
                assert!(theirs(board[to]), "taking a piece that isn't the enemy: {}", m);
            }
        }
    }
}
