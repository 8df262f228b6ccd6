//! 局面评估函数

use othello_core::{Board, Disc, MoveGenerator, Position};

/// 评估器
pub struct Evaluator;

/// 位置权重表，索引为 [row][col]
///
/// 角最高；与角相邻的 X 位 (1,1) 等重罚，C 位次之。
pub const WEIGHTS: [[i32; 8]; 8] = [
    [120, -20, 20,  5,  5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [ 20,  -5, 15,  3,  3, 15,  -5,  20],
    [  5,  -5,  3,  3,  3,  3,  -5,   5],
    [  5,  -5,  3,  3,  3,  3,  -5,   5],
    [ 20,  -5, 15,  3,  3, 15,  -5,  20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20,  5,  5, 20, -20, 120],
];

/// 每一步行动力差对应的分值
pub const MOBILITY_WEIGHT: i32 = 15;

impl Evaluator {
    /// 评估棋局（computer 视角，正值对 computer 有利）
    pub fn evaluate(board: &Board, computer: Disc) -> i32 {
        Self::positional(board, computer) + Self::mobility(board, computer)
    }

    /// 位置分：己方棋子加权重，对方棋子减权重
    pub fn positional(board: &Board, computer: Disc) -> i32 {
        let mut score = 0;
        for pos in Position::all() {
            match board.get(pos) {
                Some(disc) if disc == computer => score += Self::weight(pos),
                Some(_) => score -= Self::weight(pos),
                None => {}
            }
        }
        score
    }

    /// 行动力分：双方在当前盘面的合法走法数之差
    pub fn mobility(board: &Board, computer: Disc) -> i32 {
        let own = MoveGenerator::mobility(board, computer) as i32;
        let theirs = MoveGenerator::mobility(board, computer.opponent()) as i32;
        MOBILITY_WEIGHT * (own - theirs)
    }

    /// 查询位置权重
    pub fn weight(pos: Position) -> i32 {
        WEIGHTS[pos.row as usize][pos.col as usize]
    }
}
