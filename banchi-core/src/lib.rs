//! Ban Chi (dark chess) rules and a greedy move chooser.
//!
//! # Game
//!
//! ```text
//! Board:    4 rows x 8 columns, every piece starts face-down
//! Pieces:   per side 2 cannons, 5 pawns, 2 horses, 2 carts,
//!           2 elephants, 2 guards, 1 king
//! Turn:     flip a face-down piece, slide one square orthogonally,
//!           or capture
//! Capture:  by adjacency, following the rank hierarchy; cannons
//!           instead jump exactly one piece, at any distance
//! ```
//!
//! # Descriptors
//!
//! ```text
//! red:    q p h c e g k   (cannon pawn horse cart elephant guard king)
//! black:  Q P H C E G K
//! other:  ? face-down     . or space empty
//! ```
//!
//! # Usage
//!
//! ```
//! use banchi_core::{Bot, GreedyBot, State};
//!
//! let rows: Vec<Vec<&str>> = vec![
//!     vec!["?", "?", "?", "?", "?", "?", "?", "?"],
//!     vec!["?", "?", "?", "?", "?", "?", "?", "?"],
//!     vec!["?", "?", "c", "H", "?", "?", "?", "?"],
//!     vec!["?", "?", "?", "?", "?", "?", "?", "?"],
//! ];
//! let state = State::new("red", &rows, &[]).unwrap();
//! let mut bot = GreedyBot::seeded(7);
//! let best = bot.choose_move(&state);
//! assert_eq!(best.to_string(), "RedCart at C3 takes BlackHorse at D3");
//! assert_eq!(best.command().argument, "C3>D3");
//! ```

pub mod board;
pub mod command;
pub mod error;
pub mod greedy;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod state;
pub mod team;

pub use board::{Board, Location, COLS, ROWS};
pub use command::Command;
pub use error::{DecodeError, DecodeResult};
pub use greedy::{Bot, GreedyBot, Maximizer};
pub use movegen::legal_moves;
pub use moves::{Action, Move};
pub use piece::{Piece, PieceSet, Rank, Side};
pub use state::State;
pub use team::{Team, BLACK, RED};
