//! The command a player sends to a Pao server.

use serde::{Deserialize, Serialize};

/// A generic command between a Pao server and client.
///
/// Serialized as `{"Action": "...", "Argument": "..."}`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Command {
    #[serde(alias = "action")]
    pub action: String,
    #[serde(default, alias = "argument")]
    pub argument: String,
}

impl Command {
    pub const MOVE: &'static str = "move";
    pub const RESIGN: &'static str = "resign";

    /// A `move` command with the given argument (`?C3` or `C2>C3`).
    pub fn play(argument: impl Into<String>) -> Command {
        Command {
            action: Self::MOVE.to_string(),
            argument: argument.into(),
        }
    }

    /// A `resign` command.
    pub fn resign() -> Command {
        Command {
            action: Self::RESIGN.to_string(),
            argument: String::new(),
        }
    }
}
