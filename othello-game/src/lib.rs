//! 黑白棋人机对局
//!
//! 包含:
//! - 对局控制（回合、停手、终局判定）
//! - 对局配置

pub mod config;
pub mod game;

pub use config::GameConfig;
pub use game::{Game, GameEvent, MoveOutcome, Phase};
