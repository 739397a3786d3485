mod bitboard;
pub mod clock;
mod color;
pub mod constants;
pub mod controller;
pub mod enum_map;
mod error;
pub mod frontend;
mod mov;
pub mod notation;
mod piece;
mod player;
mod position;
pub mod selection;
mod square;
pub mod transcript;

pub use bitboard::Bitboard;
pub use color::Color;
pub use controller::{ControllerSettings, GameResult, IdlePolicy, TurnController, TurnState};
pub use error::{MoveError, ParseError};
pub use mov::Move;
pub use piece::{PieceKind, PromotionPiece};
pub use player::AutomatedPlayer;
pub use position::Position;
pub use square::{Direction, Square};
