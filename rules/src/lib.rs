//! Chess rules: board representation, FEN, legal move generation and
//! game-end detection behind `chess_client::Position`.

pub mod attacks;
mod board;
mod castling;
mod fen;
mod movegen;
mod perft;
mod piece;
mod position;

pub use board::Board;
pub use castling::{CastlingRights, CastlingSide};
pub use perft::{divide, perft};
pub use piece::ColoredPiece;
pub use position::ChessPosition;
