//! One game played over one connection.

use banchi_core::{Bot, Command, DecodeError, GreedyBot, Move, State};
use thiserror::Error;
use tracing::{debug, info};

use crate::protocol::Inbound;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("bad frame: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bad position: {0}")]
    Decode(#[from] DecodeError),
    #[error("websocket error: {0}")]
    Transport(#[from] axum::Error),
}

/// What the connection should do after a frame.
#[derive(Debug, PartialEq)]
pub enum Reply {
    Send(Command),
    /// Send the command, then end the session.
    SendAndClose(Command),
    Close,
    Ignore,
}

/// Per-connection game state: the bot and the color it was given.
pub struct Session<B = GreedyBot> {
    bot: B,
    color: String,
}

impl Session<GreedyBot> {
    pub fn new() -> Self {
        Session::with_bot(GreedyBot::new())
    }
}

impl Default for Session<GreedyBot> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Bot> Session<B> {
    pub fn with_bot(bot: B) -> Self {
        Session {
            bot,
            color: String::new(),
        }
    }

    pub fn bot_name(&self) -> &str {
        self.bot.name()
    }

    /// The side indicator used for the next position; empty until a
    /// `color` frame arrives.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// React to one text frame.
    pub fn handle(&mut self, text: &str) -> Result<Reply, SessionError> {
        let inbound = Inbound::parse(text)?;
        info!(action = inbound.action(), "command");
        match inbound {
            Inbound::Board(board) => {
                debug!(
                    your_turn = board.your_turn,
                    whose_turn = %board.whose_turn,
                    turn_color = %board.turn_color,
                    last_move = ?board.last_move,
                    last_dead = %board.last_dead,
                    players = board.num_players,
                    "position"
                );
                let state = State::new(&self.color, &board.board, &board.dead)?;
                let best = self.bot.choose_move(&state);
                info!(%best, "sending move");
                let command = best.command();
                if best == Move::Quit {
                    Ok(Reply::SendAndClose(command))
                } else {
                    Ok(Reply::Send(command))
                }
            }
            Inbound::Color(color) => {
                info!(color = %color.color, "bot color is now set");
                self.color = color.color;
                Ok(Reply::Ignore)
            }
            Inbound::GameOver(over) => {
                info!(message = %over.message, won = over.you_win, "game over");
                Ok(Reply::Close)
            }
            Inbound::Chat(chat) => {
                debug!(
                    player = %chat.player,
                    color = %chat.color,
                    auth = chat.auth,
                    message = %chat.message,
                    "ignoring chat"
                );
                Ok(Reply::Ignore)
            }
            Inbound::Other(_) => {
                debug!(%text, "ignoring");
                Ok(Reply::Ignore)
            }
        }
    }
}
