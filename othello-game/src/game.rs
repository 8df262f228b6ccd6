//! 对局控制
//!
//! 状态机：人类回合 → 电脑回合 → ... → 终局。
//! 棋盘只由 `Game` 持有，AI 搜索只在副本上进行。

use othello_ai::AiEngine;
use othello_core::{Board, BoardState, Disc, MoveGenerator, Notation, OthelloError, Position, Score};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::GameConfig;

/// 对局阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// 等待人类落子
    HumanTurn,
    /// 等待电脑落子
    ComputerTurn,
    /// 双方都无子可下
    GameOver,
}

/// 需要通知前端的事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// 人类无子可下，电脑继续走
    HumanPassed,
    /// 电脑无子可下，人类继续走
    ComputerPassed,
    /// 对局结束，附最终比分
    GameOver(Score),
}

/// 一次落子尝试的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 是否落子
    pub accepted: bool,
    /// 落子位置；电脑停手时为 None
    pub position: Option<Position>,
    /// 落子后的棋盘
    pub board: Board,
    /// 被翻转的棋子
    pub flipped: Vec<Position>,
    /// 本次落子引发的事件
    pub events: Vec<GameEvent>,
}

/// 人机对局
pub struct Game {
    board: Board,
    phase: Phase,
    human: Disc,
    engine: AiEngine,
}

impl Game {
    /// 从初始局面开始新对局，黑方先行
    pub fn new(config: GameConfig) -> Self {
        Self::from_state(config, BoardState::initial())
    }

    /// 从任意局面开始
    ///
    /// 走子方无子可下时轮到对方；双方都无子可下则直接终局。
    pub fn from_state(config: GameConfig, state: BoardState) -> Self {
        let human = config.human_disc;
        let engine = AiEngine::new(config.ai, human.opponent());
        let mut game = Self {
            board: state.board,
            phase: Phase::GameOver,
            human,
            engine,
        };

        let to_move = state.current_turn;
        game.phase = if MoveGenerator::has_legal_move(&game.board, to_move) {
            game.phase_for(to_move)
        } else if MoveGenerator::has_legal_move(&game.board, to_move.opponent()) {
            game.phase_for(to_move.opponent())
        } else {
            Phase::GameOver
        };

        debug!("对局开始，阶段 {:?}", game.phase);
        game
    }

    /// 当前棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前阶段
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 人类执子颜色
    pub fn human_disc(&self) -> Disc {
        self.human
    }

    /// 电脑执子颜色
    pub fn computer_disc(&self) -> Disc {
        self.human.opponent()
    }

    /// 当前比分
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// 是否终局
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// AI 引擎（只读，用于展示搜索统计）
    pub fn engine(&self) -> &AiEngine {
        &self.engine
    }

    /// 人类尝试在 (row, col) 落子
    ///
    /// 坐标越界返回 `InvalidPosition`；格子已占或不能翻子时返回 `accepted = false`，棋盘不变。
    pub fn attempt_human_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, OthelloError> {
        let pos = Notation::checked(row, col)?;
        self.ensure_turn(Phase::HumanTurn)?;

        let Some(flipped) = MoveGenerator::try_play(&mut self.board, pos, self.human) else {
            return Ok(self.outcome(false, Some(pos), Vec::new(), Vec::new()));
        };

        debug!("人类落子 {} 翻转 {} 子", Notation::format(pos), flipped.len());
        let events = self.advance_after(self.human);
        Ok(self.outcome(true, Some(pos), flipped, events))
    }

    /// 电脑走一步
    ///
    /// 电脑无子可下时棋盘不变，返回 `ComputerPassed` 并交还人类。
    pub fn computer_turn(&mut self) -> Result<MoveOutcome, OthelloError> {
        self.ensure_turn(Phase::ComputerTurn)?;
        let computer = self.computer_disc();

        let Some(mv) = self.engine.search(&self.board) else {
            info!("电脑无子可下，停一手");
            let mut events = vec![GameEvent::ComputerPassed];
            if MoveGenerator::has_legal_move(&self.board, self.human) {
                self.phase = Phase::HumanTurn;
            } else {
                events.push(self.finish());
            }
            return Ok(self.outcome(false, None, Vec::new(), events));
        };

        let flipped = MoveGenerator::flips_for(&self.board, mv.position, computer);
        MoveGenerator::apply(&mut self.board, mv, &flipped);
        debug!(
            "电脑落子 {} 翻转 {} 子",
            Notation::format(mv.position),
            flipped.len()
        );

        let events = self.advance_after(computer);
        Ok(self.outcome(true, Some(mv.position), flipped, events))
    }

    /// 检查当前阶段
    fn ensure_turn(&self, expected: Phase) -> Result<(), OthelloError> {
        match self.phase {
            Phase::GameOver => Err(OthelloError::GameOver),
            phase if phase != expected => Err(OthelloError::NotYourTurn),
            _ => Ok(()),
        }
    }

    /// 落子后决定下一阶段
    fn advance_after(&mut self, mover: Disc) -> Vec<GameEvent> {
        let next = mover.opponent();

        if MoveGenerator::has_legal_move(&self.board, next) {
            self.phase = self.phase_for(next);
            return Vec::new();
        }

        if MoveGenerator::has_legal_move(&self.board, mover) {
            info!("{} 无子可下，停一手", next);
            self.phase = self.phase_for(mover);
            let event = if next == self.human {
                GameEvent::HumanPassed
            } else {
                GameEvent::ComputerPassed
            };
            return vec![event];
        }

        vec![self.finish()]
    }

    /// 进入终局
    fn finish(&mut self) -> GameEvent {
        self.phase = Phase::GameOver;
        let score = self.board.score();
        info!("对局结束 黑 {} : 白 {}", score.black, score.white);
        GameEvent::GameOver(score)
    }

    fn phase_for(&self, disc: Disc) -> Phase {
        if disc == self.human {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        }
    }

    fn outcome(
        &self,
        accepted: bool,
        position: Option<Position>,
        flipped: Vec<Position>,
        events: Vec<GameEvent>,
    ) -> MoveOutcome {
        MoveOutcome {
            accepted,
            position,
            board: self.board.clone(),
            flipped,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_ai::AiConfig;
    use othello_core::Fen;

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    /// 浅层搜索，保证测试速度
    fn shallow_config(human_disc: Disc) -> GameConfig {
        GameConfig {
            human_disc,
            computer_delay_ms: 0,
            ai: AiConfig { search_depth: 2 },
        }
    }

    fn game_from(fen: &str, human_disc: Disc) -> Game {
        Game::from_state(shallow_config(human_disc), Fen::parse(fen).unwrap())
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(GameConfig::default());
        assert_eq!(game.phase(), Phase::HumanTurn);
        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.score(), Score { black: 2, white: 2 });
        assert_eq!(game.computer_disc(), Disc::White);
        assert_eq!(game.engine().computer(), Disc::White);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_computer_moves_first_when_black() {
        let mut game = Game::new(shallow_config(Disc::White));
        assert_eq!(game.phase(), Phase::ComputerTurn);

        let outcome = game.computer_turn().unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.flipped.len(), 1);
        assert_eq!(game.score(), Score { black: 4, white: 1 });
        assert_eq!(game.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_human_opening_move() {
        let mut game = Game::new(GameConfig::default());

        let outcome = game.attempt_human_move(2, 3).unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.position, Some(pos(2, 3)));
        assert_eq!(outcome.flipped, vec![pos(3, 3)]);
        assert!(outcome.events.is_empty());

        // 4 个人类子（黑），1 个电脑子（白）
        assert_eq!(outcome.board.count(Disc::Black), 4);
        assert_eq!(outcome.board.count(Disc::White), 1);
        assert_eq!(outcome.board.stone_count(), 5);
        assert_eq!(game.phase(), Phase::ComputerTurn);
    }

    #[test]
    fn test_illegal_human_move_is_rejected() {
        let mut game = Game::new(GameConfig::default());

        // 已占格子
        let outcome = game.attempt_human_move(3, 3).unwrap();
        assert!(!outcome.accepted);
        assert!(outcome.flipped.is_empty());

        // 不能翻子
        let outcome = game.attempt_human_move(0, 0).unwrap();
        assert!(!outcome.accepted);

        assert_eq!(game.board(), &Board::initial());
        assert_eq!(game.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mut game = Game::new(GameConfig::default());

        assert_eq!(
            game.attempt_human_move(8, 0),
            Err(OthelloError::InvalidPosition { row: 8, col: 0 })
        );
        assert_eq!(
            game.attempt_human_move(3, -1),
            Err(OthelloError::InvalidPosition { row: 3, col: -1 })
        );
        assert_eq!(game.board(), &Board::initial());
    }

    #[test]
    fn test_turn_order_enforced() {
        let mut game = Game::new(shallow_config(Disc::Black));

        assert_eq!(game.computer_turn(), Err(OthelloError::NotYourTurn));

        game.attempt_human_move(2, 3).unwrap();
        assert_eq!(game.attempt_human_move(2, 2), Err(OthelloError::NotYourTurn));

        let outcome = game.computer_turn().unwrap();
        assert!(outcome.accepted);
        let played = outcome.position.unwrap();
        assert_eq!(outcome.board.get(played), Some(Disc::White));
        assert_eq!(outcome.board.stone_count(), 6);
        assert_eq!(game.phase(), Phase::HumanTurn);
    }

    #[test]
    fn test_blocked_human_routes_to_computer() {
        // 黑（人类）无子可下，白（电脑）可以下 (0,2)
        let mut game = game_from("WB6/8/8/8/8/8/8/8 b", Disc::Black);
        assert!(!MoveGenerator::is_game_over(game.board()));
        assert!(!game.is_game_over());
        assert_eq!(game.phase(), Phase::ComputerTurn);

        let outcome = game.computer_turn().unwrap();
        assert_eq!(outcome.position, Some(pos(0, 2)));
        assert_eq!(outcome.flipped, vec![pos(0, 1)]);

        // 黑子全被吃掉，双方都无子可下
        assert_eq!(
            outcome.events,
            vec![GameEvent::GameOver(Score { black: 0, white: 3 })]
        );
        assert!(game.is_game_over());
    }

    #[test]
    fn test_human_pass_lets_computer_move_again() {
        // 上下两组 "白黑"，黑方（人类）始终无子可下
        let mut game = game_from("WB6/8/8/8/8/8/8/WB6 b", Disc::Black);
        assert_eq!(game.phase(), Phase::ComputerTurn);

        let first = game.computer_turn().unwrap();
        assert!(first.accepted);
        assert_eq!(first.events, vec![GameEvent::HumanPassed]);
        assert_eq!(game.phase(), Phase::ComputerTurn);

        let second = game.computer_turn().unwrap();
        assert!(second.accepted);
        assert_ne!(first.position, second.position);
        assert_eq!(
            second.events,
            vec![GameEvent::GameOver(Score { black: 0, white: 6 })]
        );
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_computer_pass_after_human_move() {
        // 人类（黑）下 (0,2) 后白方只剩 (7,1)，无处可下；黑还能下 (7,2)
        let mut game = game_from("BW6/8/8/8/8/8/8/BW6 b", Disc::Black);
        assert_eq!(game.phase(), Phase::HumanTurn);

        let outcome = game.attempt_human_move(0, 2).unwrap();
        assert!(outcome.accepted);
        assert_eq!(outcome.events, vec![GameEvent::ComputerPassed]);
        assert_eq!(game.phase(), Phase::HumanTurn);

        let outcome = game.attempt_human_move(7, 2).unwrap();
        assert_eq!(
            outcome.events,
            vec![GameEvent::GameOver(Score { black: 6, white: 0 })]
        );
        assert!(game.is_game_over());

        assert_eq!(game.attempt_human_move(5, 5), Err(OthelloError::GameOver));
        assert_eq!(game.computer_turn(), Err(OthelloError::GameOver));
    }

    #[test]
    fn test_full_board_is_game_over() {
        let rows = vec!["BBBBBWWW"; 8].join("/");
        let game = game_from(&format!("{} b", rows), Disc::Black);

        assert!(game.is_game_over());
        let score = game.score();
        assert_eq!(score, Score { black: 40, white: 24 });
        assert_eq!(score.total(), 64);
        assert_eq!(score.winner(), Some(Disc::Black));
    }

    #[test]
    fn test_blocked_board_is_game_over() {
        // 棋盘未满，但只剩一种颜色
        let game = game_from("8/8/8/3WW3/3WW3/8/8/8 b", Disc::Black);
        assert!(game.is_game_over());
        assert_eq!(game.score(), Score { black: 0, white: 4 });
    }

    #[test]
    fn test_play_full_game() {
        let mut game = Game::new(GameConfig {
            ai: AiConfig { search_depth: 1 },
            ..GameConfig::default()
        });
        let mut stones = game.board().stone_count();

        for _ in 0..200 {
            match game.phase() {
                Phase::HumanTurn => {
                    let mv = MoveGenerator::legal_moves(game.board(), Disc::Black)[0];
                    let p = mv.position;
                    let outcome = game.attempt_human_move(p.row as i32, p.col as i32).unwrap();
                    assert!(outcome.accepted);
                }
                Phase::ComputerTurn => {
                    game.computer_turn().unwrap();
                }
                Phase::GameOver => break,
            }

            let now = game.board().stone_count();
            assert!(now >= stones);
            stones = now;
        }

        assert!(game.is_game_over());
        assert!(MoveGenerator::is_game_over(game.board()));
        assert_eq!(game.score().total(), game.board().stone_count());
    }
}
