//! 翻子计算和走法生成

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::Board;
use crate::constants::DIRECTIONS;
use crate::disc::{Disc, Position};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子位置
    pub position: Position,
    /// 落子方
    pub disc: Disc,
}

impl Move {
    /// 创建新走法
    pub fn new(position: Position, disc: Disc) -> Self {
        Self { position, disc }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.disc, self.position)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 计算在 pos 落 disc 会翻转的对方棋子
    ///
    /// 按方向顺序依次扫描：连续的对方棋子必须以己方棋子收尾才算有效，
    /// 越界或遇到空格则该方向不翻子。目标格非空时返回空集。
    pub fn flips_for(board: &Board, pos: Position, disc: Disc) -> Vec<Position> {
        let mut flips = Vec::new();
        if !board.is_empty_at(pos) {
            return flips;
        }

        let opponent = disc.opponent();
        for (drow, dcol) in DIRECTIONS {
            let mut run = Vec::new();
            let mut current = pos;
            while let Some(next) = current.offset(drow, dcol) {
                match board.get(next) {
                    Some(d) if d == opponent => {
                        run.push(next);
                        current = next;
                    }
                    Some(_) => {
                        flips.append(&mut run);
                        break;
                    }
                    None => break,
                }
            }
        }

        flips
    }

    /// 判断落子是否合法
    pub fn is_legal(board: &Board, pos: Position, disc: Disc) -> bool {
        !Self::flips_for(board, pos, disc).is_empty()
    }

    /// 生成指定颜色的所有合法走法（行优先顺序）
    pub fn legal_moves(board: &Board, disc: Disc) -> Vec<Move> {
        Position::all()
            .filter(|pos| Self::is_legal(board, *pos, disc))
            .map(|pos| Move::new(pos, disc))
            .collect()
    }

    /// 是否存在至少一个合法走法
    pub fn has_legal_move(board: &Board, disc: Disc) -> bool {
        Position::all().any(|pos| Self::is_legal(board, pos, disc))
    }

    /// 行动力：合法走法数
    pub fn mobility(board: &Board, disc: Disc) -> usize {
        Self::legal_moves(board, disc).len()
    }

    /// 执行走法（不检查规则，调用方需先确认合法）
    pub fn apply(board: &mut Board, mv: Move, flips: &[Position]) {
        board.set(mv.position, Some(mv.disc));
        for pos in flips {
            board.set(*pos, Some(mv.disc));
        }
    }

    /// 合法则落子并返回翻转的棋子，否则不改动棋盘
    pub fn try_play(board: &mut Board, pos: Position, disc: Disc) -> Option<Vec<Position>> {
        let flips = Self::flips_for(board, pos, disc);
        if flips.is_empty() {
            trace!("{} 在 {} 落子不合法", disc, pos);
            return None;
        }
        Self::apply(board, Move::new(pos, disc), &flips);
        Some(flips)
    }

    /// 双方都无子可下时游戏结束
    pub fn is_game_over(board: &Board) -> bool {
        !Self::has_legal_move(board, Disc::Black) && !Self::has_legal_move(board, Disc::White)
    }
}
