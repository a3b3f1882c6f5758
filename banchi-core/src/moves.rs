//! Move values and their wire form.

use std::fmt;

use crate::board::Location;
use crate::command::Command;
use crate::piece::Piece;

/// The kind of a [`Move`], without its coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Action {
    Quit,
    Flip,
    Move,
    Take,
}

/// A move in the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Move {
    /// Resign.
    Quit,
    /// Turn a face-down piece face-up in place.
    Flip { at: Location },
    /// Slide `actor` onto an empty neighbouring square.
    Move { actor: Piece, at: Location, to: Location },
    /// `actor` removes `killed`, by adjacency or by a cannon jump.
    Take {
        actor: Piece,
        at: Location,
        killed: Piece,
        to: Location,
    },
}

impl Move {
    #[inline]
    pub fn action(&self) -> Action {
        match self {
            Move::Quit => Action::Quit,
            Move::Flip { .. } => Action::Flip,
            Move::Move { .. } => Action::Move,
            Move::Take { .. } => Action::Take,
        }
    }

    /// The square the move starts from; `None` for Quit.
    #[inline]
    pub fn at(&self) -> Option<Location> {
        match self {
            Move::Quit => None,
            Move::Flip { at } | Move::Move { at, .. } | Move::Take { at, .. } => Some(*at),
        }
    }

    /// The destination square of a Move or Take.
    #[inline]
    pub fn to(&self) -> Option<Location> {
        match self {
            Move::Move { to, .. } | Move::Take { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// The captured piece of a Take.
    #[inline]
    pub fn killed(&self) -> Option<Piece> {
        match self {
            Move::Take { killed, .. } => Some(*killed),
            _ => None,
        }
    }

    /// The command that plays this move on a Pao server.
    pub fn command(&self) -> Command {
        match self {
            Move::Quit => Command::resign(),
            Move::Flip { at } => Command::play(format!("?{}", at)),
            Move::Move { at, to, .. } | Move::Take { at, to, .. } => {
                Command::play(format!("{}>{}", at, to))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quit => write!(f, "resign"),
            Move::Flip { at } => write!(f, "flip {}", at),
            Move::Move { actor, at, to } => write!(f, "{} at {} moves to {}", actor, at, to),
            Move::Take {
                actor,
                at,
                killed,
                to,
            } => write!(f, "{} at {} takes {} at {}", actor, at, killed, to),
        }
    }
}
