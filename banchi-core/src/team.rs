//! Static per-side descriptors.
//!
//! A [`Team`] lets code name "our cannon" or "their king" without branching
//! on color. Exactly two exist, [`RED`] and [`BLACK`].

use crate::piece::{Piece, PieceSet, Rank, Side};

/// The pieces belonging to one side.
#[derive(Debug, PartialEq, Eq)]
pub struct Team {
    pub side: Side,
    pub cannon: Piece,
    pub pawn: Piece,
    pub horse: Piece,
    pub cart: Piece,
    pub elephant: Piece,
    pub guard: Piece,
    pub king: Piece,
    /// The seven pieces in Q P H C E G K order.
    pub ranked: [Piece; 7],
    /// All seven pieces.
    pub set: PieceSet,
}

impl Team {
    const fn build(side: Side) -> Team {
        let ranked = [
            Piece::new(side, Rank::Cannon),
            Piece::new(side, Rank::Pawn),
            Piece::new(side, Rank::Horse),
            Piece::new(side, Rank::Cart),
            Piece::new(side, Rank::Elephant),
            Piece::new(side, Rank::Guard),
            Piece::new(side, Rank::King),
        ];
        Team {
            side,
            cannon: ranked[0],
            pawn: ranked[1],
            horse: ranked[2],
            cart: ranked[3],
            elephant: ranked[4],
            guard: ranked[5],
            king: ranked[6],
            ranked,
            set: PieceSet::of(&ranked),
        }
    }

    /// The team for a side.
    #[inline]
    pub fn of(side: Side) -> &'static Team {
        TEAMS[side as usize]
    }

    /// The other team.
    #[inline]
    pub fn opponent(&self) -> &'static Team {
        Team::of(self.side.opponent())
    }

    #[inline]
    pub fn contains(&self, piece: Piece) -> bool {
        self.set.contains(piece)
    }
}

pub static RED: Team = Team::build(Side::Red);
pub static BLACK: Team = Team::build(Side::Black);

/// Both teams, red first.
pub static TEAMS: [&Team; 2] = [&RED, &BLACK];
