//! Frames a Pao server sends to a player.
//!
//! Every frame is a JSON object with an `action` field. The server has used
//! both `camelCase` and `PascalCase` field names over time, so both are
//! accepted.

use serde::{Deserialize, Deserializer};

// =============================================================================
// Frame Types
// =============================================================================

/// Just enough of a frame to learn what it is.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(alias = "Action")]
    pub action: String,
}

/// The full position, sent whenever anything changes.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BoardCommand {
    #[serde(alias = "Board")]
    pub board: Vec<Vec<String>>,
    #[serde(default, alias = "Dead", deserialize_with = "nullable")]
    pub dead: Vec<String>,
    #[serde(default, alias = "LastMove", deserialize_with = "nullable")]
    pub last_move: Vec<String>,
    #[serde(default, alias = "LastDead", deserialize_with = "nullable")]
    pub last_dead: String,
    #[serde(default, alias = "YourTurn")]
    pub your_turn: bool,
    #[serde(default, alias = "WhoseTurn", deserialize_with = "nullable")]
    pub whose_turn: String,
    #[serde(default, alias = "TurnColor", deserialize_with = "nullable")]
    pub turn_color: String,
    #[serde(default, alias = "NumPlayers")]
    pub num_players: u32,
}

/// Tells a player which color it got after the first flip.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ColorCommand {
    #[serde(alias = "Color")]
    pub color: String,
}

/// The game has ended.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameOverCommand {
    #[serde(default, alias = "Message", deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, alias = "YouWin")]
    pub you_win: bool,
}

/// A chat line broadcast to everyone in the game.
#[derive(Debug, Deserialize, PartialEq)]
pub struct ChatCommand {
    #[serde(default, alias = "Player", deserialize_with = "nullable")]
    pub player: String,
    #[serde(default, alias = "Color", deserialize_with = "nullable")]
    pub color: String,
    #[serde(default, alias = "Message", deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, alias = "Auth")]
    pub auth: bool,
}

/// Treat an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Parsing
// =============================================================================

/// A decoded inbound frame.
#[derive(Debug, PartialEq)]
pub enum Inbound {
    Board(BoardCommand),
    Color(ColorCommand),
    GameOver(GameOverCommand),
    Chat(ChatCommand),
    /// An action this player has no use for.
    Other(String),
}

impl Inbound {
    pub fn parse(text: &str) -> Result<Inbound, serde_json::Error> {
        let envelope: Envelope = serde_json::from_str(text)?;
        let inbound = match envelope.action.as_str() {
            "board" => Inbound::Board(serde_json::from_str(text)?),
            "color" => Inbound::Color(serde_json::from_str(text)?),
            "gameover" => Inbound::GameOver(serde_json::from_str(text)?),
            "chat" => Inbound::Chat(serde_json::from_str(text)?),
            _ => Inbound::Other(envelope.action),
        };
        Ok(inbound)
    }

    /// The `action` this frame arrived with.
    pub fn action(&self) -> &str {
        match self {
            Inbound::Board(_) => "board",
            Inbound::Color(_) => "color",
            Inbound::GameOver(_) => "gameover",
            Inbound::Chat(_) => "chat",
            Inbound::Other(action) => action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let text = r#"{
            "action": "board",
            "board": [["?","?","?","?","?","?","?","?"],
                      ["?","?","?","?","?","?","?","?"],
                      ["?","?","q","?","?","?","?","?"],
                      ["?","?","?","?","?","?","?","?"]],
            "dead": [],
            "lastMove": ["?C3"],
            "lastDead": "",
            "yourTurn": true,
            "whoseTurn": "greedy",
            "turnColor": "Black",
            "numPlayers": 2
        }"#;
        let Inbound::Board(board) = Inbound::parse(text).unwrap() else {
            panic!("expected a board frame");
        };
        assert_eq!(board.board.len(), 4);
        assert_eq!(board.board[2][2], "q");
        assert!(board.dead.is_empty());
        assert_eq!(board.last_move, vec!["?C3"]);
        assert!(board.your_turn);
        assert_eq!(board.turn_color, "Black");
        assert_eq!(board.num_players, 2);
    }

    #[test]
    fn test_parse_pascal_case_with_nulls() {
        let text = r#"{
            "Action": "board",
            "Board": [["."]],
            "Dead": null,
            "LastMove": null,
            "YourTurn": false
        }"#;
        let Inbound::Board(board) = Inbound::parse(text).unwrap() else {
            panic!("expected a board frame");
        };
        assert_eq!(board.board, vec![vec![".".to_string()]]);
        assert!(board.dead.is_empty());
        assert!(board.last_move.is_empty());
        assert_eq!(board.whose_turn, "");
        assert!(!board.your_turn);
    }

    #[test]
    fn test_parse_color_and_gameover() {
        assert_eq!(
            Inbound::parse(r#"{"action":"color","color":"Red"}"#).unwrap(),
            Inbound::Color(ColorCommand {
                color: "Red".to_string()
            })
        );
        assert_eq!(
            Inbound::parse(r#"{"Action":"gameover","Message":"Black wins","YouWin":true}"#)
                .unwrap(),
            Inbound::GameOver(GameOverCommand {
                message: "Black wins".to_string(),
                you_win: true,
            })
        );
    }

    #[test]
    fn test_parse_chat_and_other() {
        let chat = Inbound::parse(r#"{"action":"chat","player":"amy","message":"hi"}"#).unwrap();
        assert_eq!(chat.action(), "chat");
        let other = Inbound::parse(r#"{"action":"spectate","who":"bob"}"#).unwrap();
        assert_eq!(other, Inbound::Other("spectate".to_string()));
        assert_eq!(other.action(), "spectate");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Inbound::parse("not json").is_err());
        assert!(Inbound::parse(r#"{"board":[]}"#).is_err());
        // a board frame without a board
        assert!(Inbound::parse(r#"{"action":"board"}"#).is_err());
    }
}
