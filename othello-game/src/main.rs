use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use othello_core::{Notation, Score};
use othello_game::{Game, GameConfig, GameEvent, MoveOutcome, Phase};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("othello_game=info".parse()?))
        .init();

    let arg = std::env::args().nth(1);
    let config = GameConfig::resolve(arg.as_deref())?;
    info!("黑白棋启动，人类执 {}，搜索深度 {}", config.human_disc, config.ai.search_depth);

    let delay = Duration::from_millis(config.computer_delay_ms);
    let mut game = Game::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print_board(&game);

    loop {
        match game.phase() {
            Phase::HumanTurn => {
                print!("你的落子 (如 d3 或 2 3，q 退出): ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    break;
                };
                let line = line?;
                let input = line.trim();
                if input.eq_ignore_ascii_case("q") {
                    break;
                }

                let pos = match Notation::parse(input) {
                    Ok(pos) => pos,
                    Err(e) => {
                        warn!("{}", e);
                        continue;
                    }
                };

                let outcome = game.attempt_human_move(pos.row as i32, pos.col as i32)?;
                if !outcome.accepted {
                    println!("{} 不能落子", Notation::format(pos));
                    continue;
                }
                report(&game, &outcome);
            }
            Phase::ComputerTurn => {
                thread::sleep(delay);
                let outcome = game.computer_turn()?;
                if let Some(pos) = outcome.position {
                    println!(
                        "电脑落子 {}（{} 节点）",
                        Notation::format(pos),
                        game.engine().nodes_searched()
                    );
                }
                report(&game, &outcome);
            }
            Phase::GameOver => break,
        }
    }

    Ok(())
}

fn report(game: &Game, outcome: &MoveOutcome) {
    if outcome.accepted {
        print_board(game);
    }
    for event in &outcome.events {
        match event {
            GameEvent::HumanPassed => println!("你无子可下，电脑继续"),
            GameEvent::ComputerPassed => println!("电脑无子可下，请继续"),
            GameEvent::GameOver(score) => print_result(game, score),
        }
    }
}

fn print_board(game: &Game) {
    let score = game.score();
    println!();
    print!("{}", game.board());
    println!("黑 {} : 白 {}", score.black, score.white);
}

fn print_result(game: &Game, score: &Score) {
    println!("终局！你 {} 子，电脑 {} 子", score.of(game.human_disc()), score.of(game.computer_disc()));
    match score.winner() {
        Some(disc) if disc == game.human_disc() => println!("你赢了"),
        Some(_) => println!("电脑赢了"),
        None => println!("平局"),
    }
}
