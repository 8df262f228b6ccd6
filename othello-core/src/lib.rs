//! 黑白棋（Othello）核心库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 翻子计算和合法走法生成
//! - 错误类型
//! - 棋盘文本格式 (FEN) 和坐标记法

mod board;
mod constants;
mod disc;
mod error;
mod fen;
mod moves;
mod notation;

pub use board::{Board, BoardState, Score};
pub use constants::*;
pub use disc::{Disc, Position};
pub use error::{OthelloError, Result};
pub use fen::{Fen, INITIAL_FEN};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
