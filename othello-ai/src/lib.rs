//! 黑白棋 AI 引擎
//!
//! 包含:
//! - 局面评估函数（位置权重 + 行动力）
//! - 固定深度的 Minimax + Alpha-Beta 搜索

mod evaluate;
mod search;

pub use evaluate::{Evaluator, MOBILITY_WEIGHT, WEIGHTS};
pub use search::{AiConfig, AiEngine, DEFAULT_SEARCH_DEPTH};
