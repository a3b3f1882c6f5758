//! Pieces, piece sets and the adjacency capture table.
//!
//! Every board cell holds one [`Piece`]: empty, face-down, or one of the
//! fourteen concrete pieces. Concrete pieces and the face-down marker each own
//! a single bit, so a [`PieceSet`] is a 16-bit mask and membership is one AND.
//!
//! ```text
//! bit 0:      (unused; Empty has no bit and is never a member)
//! bit 1:      FaceDown
//! bits 2-8:   Red   Q P H C E G K
//! bits 9-15:  Black Q P H C E G K
//! ```

use std::fmt;

use crate::error::{DecodeError, DecodeResult};

/// One of the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    /// Get the other side.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Sign applied to rank values: red is positive, black negative.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece rank, listed cannon first and then in ascending strength.
///
/// The cannon has no consistent place in the hierarchy, so it goes first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Cannon = 0,
    Pawn = 1,
    Horse = 2,
    Cart = 3,
    Elephant = 4,
    Guard = 5,
    King = 6,
}

impl Rank {
    /// All ranks in Q P H C E G K order.
    pub const ALL: [Rank; 7] = [
        Rank::Cannon,
        Rank::Pawn,
        Rank::Horse,
        Rank::Cart,
        Rank::Elephant,
        Rank::Guard,
        Rank::King,
    ];

    /// Point value of this rank for the red side.
    #[inline]
    pub const fn points(self) -> i32 {
        match self {
            Rank::King => 700,
            Rank::Guard => 6,
            Rank::Cannon => 5,
            Rank::Elephant => 4,
            Rank::Cart => 3,
            Rank::Horse => 2,
            Rank::Pawn => 1,
        }
    }

    /// How many pieces of this rank each side starts with.
    #[inline]
    pub const fn starting_count(self) -> i32 {
        match self {
            Rank::Pawn => 5,
            Rank::King => 1,
            _ => 2,
        }
    }

    /// Enemy ranks this rank may capture when orthogonally adjacent.
    const fn vulnerable(self) -> &'static [Rank] {
        use Rank::*;
        match self {
            Cannon => &[],
            Pawn => &[Pawn, King],
            Horse => &[Cannon, Pawn, Horse],
            Cart => &[Cannon, Pawn, Horse, Cart],
            Elephant => &[Cannon, Pawn, Horse, Cart, Elephant],
            Guard => &[Cannon, Pawn, Horse, Cart, Elephant, Guard],
            King => &[Cannon, Horse, Cart, Elephant, Guard, King],
        }
    }
}

/// The content of a board square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Piece {
    #[default]
    Empty = 0,
    FaceDown = 1,

    RedCannon = 2,
    RedPawn = 3,
    RedHorse = 4,
    RedCart = 5,
    RedElephant = 6,
    RedGuard = 7,
    RedKing = 8,

    BlackCannon = 9,
    BlackPawn = 10,
    BlackHorse = 11,
    BlackCart = 12,
    BlackElephant = 13,
    BlackGuard = 14,
    BlackKing = 15,
}

impl Piece {
    /// Every piece value, indexed by discriminant.
    pub const ALL: [Piece; 16] = [
        Piece::Empty,
        Piece::FaceDown,
        Piece::RedCannon,
        Piece::RedPawn,
        Piece::RedHorse,
        Piece::RedCart,
        Piece::RedElephant,
        Piece::RedGuard,
        Piece::RedKing,
        Piece::BlackCannon,
        Piece::BlackPawn,
        Piece::BlackHorse,
        Piece::BlackCart,
        Piece::BlackElephant,
        Piece::BlackGuard,
        Piece::BlackKing,
    ];

    /// Build the concrete piece of a given side and rank.
    #[inline]
    pub const fn new(side: Side, rank: Rank) -> Piece {
        Piece::ALL[2 + side as usize * 7 + rank as usize]
    }

    /// Decode a single-character Pao board descriptor ("q", "K", "?", ".").
    pub fn from_descriptor(descriptor: &str) -> DecodeResult<Piece> {
        let mut chars = descriptor.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::try_from(c),
            _ => Err(DecodeError::UnknownPiece(descriptor.to_string())),
        }
    }

    /// The canonical descriptor for this piece (`.` for empty).
    pub const fn descriptor(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::FaceDown => '?',
            Piece::RedCannon => 'q',
            Piece::RedPawn => 'p',
            Piece::RedHorse => 'h',
            Piece::RedCart => 'c',
            Piece::RedElephant => 'e',
            Piece::RedGuard => 'g',
            Piece::RedKing => 'k',
            Piece::BlackCannon => 'Q',
            Piece::BlackPawn => 'P',
            Piece::BlackHorse => 'H',
            Piece::BlackCart => 'C',
            Piece::BlackElephant => 'E',
            Piece::BlackGuard => 'G',
            Piece::BlackKing => 'K',
        }
    }

    /// The side owning a face-up piece; `None` for empty and face-down.
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self as u8 {
            2..=8 => Some(Side::Red),
            9..=15 => Some(Side::Black),
            _ => None,
        }
    }

    /// The rank of a face-up piece; `None` for empty and face-down.
    #[inline]
    pub const fn rank(self) -> Option<Rank> {
        match self as u8 {
            n @ 2..=15 => Some(Rank::ALL[((n - 2) % 7) as usize]),
            _ => None,
        }
    }

    /// True for the fourteen concrete (face-up) pieces.
    #[inline]
    pub const fn is_face_up(self) -> bool {
        (self as u8) >= 2
    }

    /// Signed point value: positive for red, negative for black, zero for
    /// empty and face-down squares.
    #[inline]
    pub const fn points(self) -> i32 {
        match (self.side(), self.rank()) {
            (Some(side), Some(rank)) => side.sign() * rank.points(),
            _ => 0,
        }
    }

    /// The bit this piece occupies in a [`PieceSet`]. Empty has none.
    #[inline]
    const fn bit(self) -> u16 {
        match self {
            Piece::Empty => 0,
            _ => 1 << (self as u8),
        }
    }

    /// Check whether this piece may capture `defender` when they are
    /// orthogonally adjacent.
    #[inline]
    pub fn can_take_if_adjacent(self, defender: Piece) -> bool {
        CAN_TAKE_IF_ADJACENT[self as usize].contains(defender)
    }

    /// The set of pieces this piece may capture by adjacency.
    #[inline]
    pub fn adjacent_prey(self) -> PieceSet {
        CAN_TAKE_IF_ADJACENT[self as usize]
    }
}

impl TryFrom<char> for Piece {
    type Error = DecodeError;

    fn try_from(c: char) -> DecodeResult<Piece> {
        let piece = match c {
            'q' => Piece::RedCannon,
            'p' => Piece::RedPawn,
            'h' => Piece::RedHorse,
            'c' => Piece::RedCart,
            'e' => Piece::RedElephant,
            'g' => Piece::RedGuard,
            'k' => Piece::RedKing,
            'Q' => Piece::BlackCannon,
            'P' => Piece::BlackPawn,
            'H' => Piece::BlackHorse,
            'C' => Piece::BlackCart,
            'E' => Piece::BlackElephant,
            'G' => Piece::BlackGuard,
            'K' => Piece::BlackKing,
            '?' => Piece::FaceDown,
            '.' | ' ' => Piece::Empty,
            other => return Err(DecodeError::UnknownPiece(other.to_string())),
        };
        Ok(piece)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.side(), self.rank()) {
            (Some(side), Some(rank)) => write!(f, "{}{:?}", side, rank),
            _ => write!(f, "{:?}", self),
        }
    }
}

// =============================================================================
// Piece sets
// =============================================================================

/// A set of pieces as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PieceSet(u16);

impl PieceSet {
    pub const EMPTY: PieceSet = PieceSet(0);

    /// Build a set from a list of pieces.
    pub const fn of(pieces: &[Piece]) -> PieceSet {
        let mut set = PieceSet::EMPTY;
        let mut i = 0;
        while i < pieces.len() {
            set = set.with(pieces[i]);
            i += 1;
        }
        set
    }

    /// This set plus one more piece.
    #[inline]
    pub const fn with(self, piece: Piece) -> PieceSet {
        PieceSet(self.0 | piece.bit())
    }

    #[inline]
    pub const fn contains(self, piece: Piece) -> bool {
        self.0 & piece.bit() != 0
    }

    #[inline]
    pub const fn union(self, other: PieceSet) -> PieceSet {
        PieceSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate over members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = Piece> {
        Piece::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl fmt::Debug for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Piece> for PieceSet {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        iter.into_iter().fold(PieceSet::EMPTY, PieceSet::with)
    }
}

// =============================================================================
// Capture table
// =============================================================================

/// For every attacker (by discriminant), the pieces it may take when adjacent.
/// Empty and face-down rows stay empty.
static CAN_TAKE_IF_ADJACENT: [PieceSet; 16] = build_capture_table();

const fn build_capture_table() -> [PieceSet; 16] {
    let mut table = [PieceSet::EMPTY; 16];
    let mut s = 0;
    while s < Side::ALL.len() {
        let attacker_side = Side::ALL[s];
        let defender_side = attacker_side.opponent();
        let mut r = 0;
        while r < Rank::ALL.len() {
            let rank = Rank::ALL[r];
            let prey = rank.vulnerable();
            let mut set = PieceSet::EMPTY;
            let mut i = 0;
            while i < prey.len() {
                set = set.with(Piece::new(defender_side, prey[i]));
                i += 1;
            }
            table[Piece::new(attacker_side, rank) as usize] = set;
            r += 1;
        }
        s += 1;
    }
    table
}
