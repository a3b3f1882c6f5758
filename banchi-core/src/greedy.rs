//! A bot that tries every legal move and plays the one with the best
//! immediate materiel gain, breaking ties at random.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::moves::Move;
use crate::piece::Side;
use crate::state::State;

/// Delta given to resigning; any legal move beats it.
pub const QUIT_DELTA: i32 = -1_000_000;

/// Something that picks a move for a game state.
pub trait Bot {
    fn name(&self) -> &str;
    fn choose_move(&mut self, state: &State) -> Move;
}

/// The greedy bot. Owns its random source so sessions never share one.
#[derive(Debug)]
pub struct GreedyBot<R = StdRng> {
    rng: R,
}

impl GreedyBot<StdRng> {
    /// A bot seeded from the operating system.
    pub fn new() -> Self {
        GreedyBot::with_rng(StdRng::from_os_rng())
    }

    /// A bot with a reproducible tie-break stream.
    pub fn seeded(seed: u64) -> Self {
        GreedyBot::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for GreedyBot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GreedyBot<R> {
    /// A bot drawing its tie breaks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        GreedyBot { rng }
    }
}

impl<R: Rng> Bot for GreedyBot<R> {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(&mut self, state: &State) -> Move {
        debug!(score = state.score, dead = state.dead.len(), "choosing a move");
        let best = Maximizer::new(state).best_move(&mut self.rng);
        debug!(%best, "best move");
        best
    }
}

// =============================================================================
// Maximizer
// =============================================================================

/// One move-selection pass over a state.
///
/// Deltas are oriented so that positive is good for the side to move. The
/// flip value is computed at most once per maximizer.
#[derive(Debug)]
pub struct Maximizer<'a> {
    state: &'a State,
    orientation: i32,
    flip_score: Option<i32>,
}

impl<'a> Maximizer<'a> {
    pub fn new(state: &'a State) -> Self {
        // board points are red-positive; flip them when black is to move
        let orientation = match state.us {
            Some(team) if team.side == Side::Black => -1,
            _ => 1,
        };
        Maximizer {
            state,
            orientation,
            flip_score: None,
        }
    }

    /// +1 when red is to move (or no side is known), -1 for black.
    #[inline]
    pub fn orientation(&self) -> i32 {
        self.orientation
    }

    /// Every move sharing the best delta, in generation order, with that
    /// delta. Falls back to `[Quit]` when there are no legal moves.
    pub fn best_moves(&mut self) -> (i32, Vec<Move>) {
        let mut best_delta = QUIT_DELTA;
        let mut best_moves = vec![Move::Quit];
        for m in self.state.legal_moves() {
            let delta = self.score_delta(&m);
            trace!(delta, %m, "candidate");
            if delta > best_delta {
                best_delta = delta;
                best_moves.clear();
                best_moves.push(m);
            } else if delta == best_delta {
                best_moves.push(m);
            }
        }
        (best_delta, best_moves)
    }

    /// Pick uniformly among the best moves.
    pub fn best_move<R: Rng>(&mut self, rng: &mut R) -> Move {
        let (_, best_moves) = self.best_moves();
        best_moves[rng.random_range(0..best_moves.len())]
    }

    /// Immediate materiel gain of a move for the side to move.
    pub fn score_delta(&mut self, m: &Move) -> i32 {
        match m {
            Move::Quit => QUIT_DELTA,
            Move::Flip { .. } => self.flip_score(),
            Move::Move { .. } => 0,
            Move::Take { killed, .. } => -self.orientation * killed.points(),
        }
    }

    /// Expected value of turning over an unknown piece: the average points
    /// of everything still face-down.
    pub fn flip_score(&mut self) -> i32 {
        if let Some(score) = self.flip_score {
            return score;
        }
        let (points, count) = self
            .state
            .down
            .iter()
            .fold((0, 0), |(points, count), (piece, n)| {
                (points + n * piece.points(), count + n)
            });
        let score = if count == 0 {
            0
        } else {
            self.orientation * points / count
        };
        self.flip_score = Some(score);
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Location;
    use crate::piece::Piece;

    fn state(to_move: &str, rows: [&str; 4], dead: &str) -> State {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.chars().map(|c| c.to_string()).collect())
            .collect();
        let dead: Vec<String> = dead.chars().map(|c| c.to_string()).collect();
        State::new(to_move, &rows, &dead).unwrap()
    }

    fn loc(s: &str) -> Location {
        s.parse().unwrap()
    }

    #[test]
    fn test_unique_best_move_always_chosen() {
        // the guard can slide to B1 or take the pawn on A2
        let gs = state("Red", ["g.P.....", "P.......", "........", "........"], "");
        let mut bot = GreedyBot::seeded(1);
        for _ in 0..50 {
            assert_eq!(
                bot.choose_move(&gs),
                Move::Take {
                    actor: Piece::RedGuard,
                    at: loc("A1"),
                    killed: Piece::BlackPawn,
                    to: loc("A2"),
                }
            );
        }
    }

    #[test]
    fn test_only_move_is_returned() {
        let gs = state("Black", ["?.......", "..k.....", "........", "........"], "");
        let moves = gs.legal_moves();
        assert_eq!(moves, vec![Move::Flip { at: loc("A1") }]);
        let mut bot = GreedyBot::seeded(7);
        for _ in 0..20 {
            assert_eq!(bot.choose_move(&gs), moves[0]);
        }
    }

    #[test]
    fn test_no_moves_resigns() {
        let gs = state("Red", ["........", "...K....", "........", "........"], "");
        let mut maxer = Maximizer::new(&gs);
        assert_eq!(maxer.best_moves(), (QUIT_DELTA, vec![Move::Quit]));
        assert_eq!(GreedyBot::seeded(3).choose_move(&gs), Move::Quit);
    }

    #[test]
    fn test_prefers_bigger_capture() {
        // red horse can take a black pawn or a black horse
        let gs = state("Red", ["P.......", "hH......", "........", "........"], "");
        let mut maxer = Maximizer::new(&gs);
        let (delta, best) = maxer.best_moves();
        assert_eq!(delta, 2);
        assert_eq!(
            best,
            vec![Move::Take {
                actor: Piece::RedHorse,
                at: loc("A2"),
                killed: Piece::BlackHorse,
                to: loc("B2"),
            }]
        );
    }

    #[test]
    fn test_equal_captures_split_evenly() {
        // two red carts, each next to its own black horse
        let gs = state("Red", ["cH......", "........", "........", "......cH"], "");
        let first = Move::Take {
            actor: Piece::RedCart,
            at: loc("A1"),
            killed: Piece::BlackHorse,
            to: loc("B1"),
        };
        let second = Move::Take {
            actor: Piece::RedCart,
            at: loc("G4"),
            killed: Piece::BlackHorse,
            to: loc("H4"),
        };
        let mut bot = GreedyBot::seeded(42);
        let (mut a, mut b) = (0, 0);
        for _ in 0..2000 {
            let m = bot.choose_move(&gs);
            if m == first {
                a += 1;
            } else if m == second {
                b += 1;
            } else {
                panic!("chose a lower-value move: {}", m);
            }
        }
        assert!((800..=1200).contains(&a), "first chosen {} times", a);
        assert_eq!(a + b, 2000);
    }

    #[test]
    fn test_black_orientation() {
        let gs = state("Black", ["Kq......", "........", "........", "........"], "");
        let mut maxer = Maximizer::new(&gs);
        assert_eq!(maxer.orientation(), -1);
        let (delta, best) = maxer.best_moves();
        assert_eq!(delta, Piece::RedCannon.points());
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].killed(), Some(Piece::RedCannon));
    }

    #[test]
    fn test_move_scores_zero() {
        let gs = state("Red", ["........", "..e.....", "........", "........"], "");
        let mut maxer = Maximizer::new(&gs);
        let (delta, best) = maxer.best_moves();
        assert_eq!(delta, 0);
        assert_eq!(best.len(), 4);
    }

    #[test]
    fn test_flip_score_is_average_of_inventory() {
        // face-down pool: one black king, two red pawns, one red guard
        let all = "qqppppphhcceeggkQQPPPPPHHCCEEGGK";
        let dead: String = all
            .replacen('K', "", 1)
            .replacen('p', "", 2)
            .replacen('g', "", 1);
        let gs = state("Red", ["????....", "........", "........", "........"], &dead);
        assert_eq!(gs.down_count(), 4);

        let mut maxer = Maximizer::new(&gs);
        let expected = (-700 + 2 + 6) / 4;
        assert_eq!(maxer.flip_score(), expected);
        assert_eq!(maxer.flip_score(), expected);
        assert_eq!(maxer.score_delta(&Move::Flip { at: loc("A1") }), expected);
        assert_eq!(maxer.score_delta(&Move::Flip { at: loc("D1") }), expected);

        let black = state("Black", ["????....", "........", "........", "........"], &dead);
        assert_eq!(Maximizer::new(&black).flip_score(), -expected);
    }

    #[test]
    fn test_flip_score_is_cached() {
        let gs = state("Red", ["????????", "????????", "????????", "????????"], "");
        let mut maxer = Maximizer::new(&gs);
        assert_eq!(maxer.flip_score(), 0);
        assert_eq!(maxer.flip_score, Some(0));

        // the cache is per maximizer, and survives changes it cannot see
        maxer.flip_score = Some(17);
        assert_eq!(maxer.score_delta(&Move::Flip { at: loc("A1") }), 17);
        assert_eq!(Maximizer::new(&gs).flip_score(), 0);
    }

    #[test]
    fn test_flip_with_empty_inventory() {
        // face-down cell on the board with nothing left to be under it
        let all = "qqppppphhcceeggkQQPPPPPHHCCEEGGK";
        let gs = state("Red", ["?.......", "........", "........", "........"], all);
        assert!(gs.down.is_empty());
        let mut maxer = Maximizer::new(&gs);
        assert_eq!(maxer.flip_score(), 0);
        assert_eq!(maxer.best_moves().1, vec![Move::Flip { at: loc("A1") }]);
    }

    #[test]
    fn test_slide_beats_negative_flip() {
        // the face-down pool favours black, so red would rather slide
        let all = "qqppppphhcceeggkQQPPPPPHHCCEEGGK";
        let dead: String = all.replacen('K', "", 1);
        let gs = state("Red", ["?.......", "......e.", "........", "........"], &dead);
        let mut maxer = Maximizer::new(&gs);
        assert_eq!(maxer.flip_score(), -700);
        let (delta, best) = maxer.best_moves();
        assert_eq!(delta, 0);
        assert!(best.iter().all(|m| matches!(m, Move::Move { .. })));
    }

    #[test]
    fn test_custom_rng_matches_seeded() {
        let gs = state("Red", ["????????", "????????", "????????", "????????"], "");
        let mut seeded = GreedyBot::seeded(5);
        let mut custom = GreedyBot::with_rng(StdRng::seed_from_u64(5));
        for _ in 0..20 {
            assert_eq!(seeded.choose_move(&gs), custom.choose_move(&gs));
        }
    }

    #[test]
    fn test_bot_name() {
        assert_eq!(GreedyBot::seeded(0).name(), "Greedy");
    }
}
