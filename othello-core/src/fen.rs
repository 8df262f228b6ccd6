//! 棋盘文本格式
//!
//! 仿照 FEN：`<棋盘> <走子方>`
//!
//! - 棋盘从第 0 行到第 7 行，以 `/` 分隔
//! - `B` 为黑子，`W` 为白子，数字为连续空格数
//! - 走子方为 `b` 或 `w`，省略时为黑方
//!
//! 示例（初始局面）：
//! `8/8/8/3WB3/3BW3/8/8/8 b`

use crate::board::{Board, BoardState};
use crate::constants::BOARD_SIZE;
use crate::disc::{Disc, Position};
use crate::error::OthelloError;

/// 初始局面 FEN
pub const INITIAL_FEN: &str = "8/8/8/3WB3/3BW3/8/8/8 b";

/// FEN 格式处理
pub struct Fen;

impl Fen {
    /// 解析 FEN 字符串为棋盘状态
    pub fn parse(fen: &str) -> Result<BoardState, OthelloError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(OthelloError::InvalidFen {
                reason: "Empty FEN string".to_string(),
            });
        }

        let board = Self::parse_board(parts[0])?;

        let current_turn = match parts.get(1) {
            None => Disc::Black,
            Some(&"b") | Some(&"B") => Disc::Black,
            Some(&"w") | Some(&"W") => Disc::White,
            Some(other) => {
                return Err(OthelloError::InvalidFen {
                    reason: format!("Invalid side to move: {}", other),
                })
            }
        };

        Ok(BoardState::from_board(board, current_turn))
    }

    /// 解析棋盘部分
    fn parse_board(board_str: &str) -> Result<Board, OthelloError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = board_str.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(OthelloError::InvalidFen {
                reason: format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (row_idx, row) in rows.iter().enumerate() {
            let mut col = 0usize;

            for c in row.chars() {
                if col >= BOARD_SIZE {
                    return Err(OthelloError::InvalidFen {
                        reason: format!("Row {} has too many columns", row_idx),
                    });
                }

                if let Some(empty_count) = c.to_digit(10) {
                    col += empty_count as usize;
                } else if let Some(disc) = Disc::from_fen_char(c) {
                    board.set(Position::new_unchecked(row_idx as u8, col as u8), Some(disc));
                    col += 1;
                } else {
                    return Err(OthelloError::InvalidFen {
                        reason: format!("Invalid cell character: {}", c),
                    });
                }
            }

            if col != BOARD_SIZE {
                return Err(OthelloError::InvalidFen {
                    reason: format!("Row {} has {} columns, expected {}", row_idx, col, BOARD_SIZE),
                });
            }
        }

        Ok(board)
    }

    /// 将棋盘状态转换为 FEN 字符串
    pub fn to_string(state: &BoardState) -> String {
        let side = match state.current_turn {
            Disc::Black => 'b',
            Disc::White => 'w',
        };
        format!("{} {}", Self::board_to_string(&state.board), side)
    }

    /// 将棋盘转换为 FEN 棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);

        for row_idx in 0..BOARD_SIZE {
            let mut row = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE {
                let pos = Position::new_unchecked(row_idx as u8, col as u8);
                if let Some(disc) = board.get(pos) {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    row.push(disc.to_fen_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                row.push_str(&empty_count.to_string());
            }

            rows.push(row);
        }

        rows.join("/")
    }
}
