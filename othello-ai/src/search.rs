//! 搜索引擎
//!
//! 实现固定深度的 Minimax + Alpha-Beta 剪枝

use std::time::Instant;

use othello_core::{Board, Disc, Move, MoveGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::Evaluator;

/// 根节点展开后继续搜索的层数
pub const DEFAULT_SEARCH_DEPTH: u8 = 6;

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 根节点之后的搜索层数（电脑自己的落子不计入）
    pub search_depth: u8,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    /// 电脑执子颜色，即极大层的走子方
    computer: Disc,
    nodes_searched: u64,
    last_score: Option<i32>,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig, computer: Disc) -> Self {
        Self {
            config,
            computer,
            nodes_searched: 0,
            last_score: None,
        }
    }

    /// 电脑执子颜色
    pub fn computer(&self) -> Disc {
        self.computer
    }

    /// 搜索最佳走法
    ///
    /// 根节点手动展开：按行优先顺序尝试电脑的每个合法走法，
    /// 对落子后的局面以人类为走子方调用 `alpha_beta`。
    /// 只有严格更高的分数才替换当前最佳，同分时保留先枚举到的走法。
    pub fn search(&mut self, board: &Board) -> Option<Move> {
        self.nodes_searched = 0;
        self.last_score = None;
        let started = Instant::now();

        let moves = MoveGenerator::legal_moves(board, self.computer);
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let mut next = board.clone();
            let flips = MoveGenerator::flips_for(&next, mv.position, mv.disc);
            MoveGenerator::apply(&mut next, mv, &flips);

            let score = self.alpha_beta(
                &next,
                self.config.search_depth,
                i32::MIN,
                i32::MAX,
                false,
            );

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((mv, score)),
            }
        }

        let (best_move, best_score) = best?;
        self.last_score = Some(best_score);

        debug!(
            "AI 选择 {} 分数 {} 节点 {} 耗时 {:?}",
            best_move,
            best_score,
            self.nodes_searched,
            started.elapsed()
        );

        Some(best_move)
    }

    /// Alpha-Beta 搜索
    ///
    /// `maximizing` 为真时电脑走子。走子方无合法走法时直接返回静态评估，
    /// 不消耗深度继续搜索对方。
    pub fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 {
            return self.evaluate(board);
        }

        let side = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };

        let moves = MoveGenerator::legal_moves(board, side);
        if moves.is_empty() {
            return self.evaluate(board);
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            // 每个分支使用独立的棋盘副本
            let mut child = board.clone();
            let flips = MoveGenerator::flips_for(&child, mv.position, mv.disc);
            MoveGenerator::apply(&mut child, mv, &flips);

            let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if alpha >= beta {
                break;
            }
        }

        best
    }

    /// 评估当前局面（电脑视角）
    fn evaluate(&self, board: &Board) -> i32 {
        Evaluator::evaluate(board, self.computer)
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 上一次搜索所选走法的分数
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }
}
