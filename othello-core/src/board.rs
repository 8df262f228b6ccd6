//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::disc::{Disc, Position};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 8x8 棋盘，索引为 row * 8 + col，使用 Vec 以支持 serde
    squares: Vec<Option<Disc>>,
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: vec![None; CELL_COUNT],
        }
    }

    /// 创建初始棋盘
    pub fn initial() -> Self {
        let mut board = Self::empty();

        // 中央四子：左上/右下为白，右上/左下为黑
        board.set(Position::new_unchecked(3, 3), Some(Disc::White));
        board.set(Position::new_unchecked(4, 4), Some(Disc::White));
        board.set(Position::new_unchecked(3, 4), Some(Disc::Black));
        board.set(Position::new_unchecked(4, 3), Some(Disc::Black));

        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Disc> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子
    pub fn set(&mut self, pos: Position, disc: Option<Disc>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = disc;
        }
    }

    /// 指定位置是否为空
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_valid() && self.squares[pos.to_index()].is_none()
    }

    /// 统计指定颜色的棋子数
    pub fn count(&self, disc: Disc) -> usize {
        self.squares.iter().filter(|s| **s == Some(disc)).count()
    }

    /// 统计空格数
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_none()).count()
    }

    /// 盘面上的棋子总数
    pub fn stone_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// 获取指定颜色的所有棋子位置（行优先）
    pub fn discs(&self, disc: Disc) -> Vec<Position> {
        Position::all().filter(|pos| self.get(*pos) == Some(disc)).collect()
    }

    /// 计分
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Disc::Black),
            white: self.count(Disc::White),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let pos = Position::new_unchecked(row as u8, col as u8);
                let c = self.get(pos).map(|d| d.display_char()).unwrap_or('·');
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// 比分（纯计数，不含规则）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// 指定颜色的子数
    pub fn of(&self, disc: Disc) -> usize {
        match disc {
            Disc::Black => self.black,
            Disc::White => self.white,
        }
    }

    /// 子数多者获胜，相等为和棋
    pub fn winner(&self) -> Option<Disc> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// 双方子数之和
    pub fn total(&self) -> usize {
        self.black + self.white
    }
}

/// 完整的棋盘状态（棋盘 + 走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Disc,
}

impl BoardState {
    /// 创建初始状态（黑方先行）
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            current_turn: Disc::Black,
        }
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Disc) -> Self {
        Self { board, current_turn }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}
