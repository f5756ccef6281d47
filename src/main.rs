// main.rs - headless 2048 driver reading moves from stdin
use clap::Parser;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use merge2048::logging::{setup_logging, LoggingConfig};
use merge2048::storage::{FileStore, GameStateStore, KeyValueStore, MemoryStore, PersistenceWorker, ScoreStore};
use merge2048::{Direction, GameSession, RandomSource, SeededRandom, ThreadRandom};

#[derive(Parser, Debug)]
#[command(name = "merge2048", version, about = "Play 2048 from the terminal")]
struct Config {
    /// Seed for reproducible tile spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the saved game state and high score (in-memory if omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = setup_logging(&LoggingConfig {
        level: config.log_level.clone(),
        directory: config.log_dir.clone(),
    })?;

    let random: Box<dyn RandomSource> = match config.seed {
        Some(seed) => {
            log::info!("Using seeded random source ({})", seed);
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    };

    match &config.data_dir {
        Some(dir) => {
            let store = FileStore::new(dir);
            log::info!("Persisting to {}", store.base_dir().display());
            play(store, random).await
        }
        None => play(MemoryStore::new(), random).await,
    }
}

async fn play<S>(store: S, random: Box<dyn RandomSource>) -> Result<(), Box<dyn std::error::Error>>
where
    S: KeyValueStore + Clone + 'static,
{
    if let Some(previous) = GameStateStore::new(store.clone()).load().await {
        log::info!(
            "Previous game: score {}{}",
            previous.score,
            if previous.game_over { " (over)" } else { "" }
        );
    }
    if let Some(best) = ScoreStore::new(store.clone()).high_score().await {
        println!("High score: {} ({})", best.value, best.achieved_at.format("%Y-%m-%d"));
    }

    let mut session = GameSession::new(random)?;
    let persistence = PersistenceWorker::new(store).spawn(session.event_channel());

    println!("Moves: up/down/left/right, w/a/s/d or arrow key names. 'restart' or 'quit'.");
    print!("{}", session.board());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "restart" | "r" => session.restart()?,
            _ => {
                let Some(direction) = parse_move(input) else {
                    println!("Unknown command '{}'", input);
                    continue;
                };
                let result = session.move_direction(direction)?;
                if !result.moved {
                    println!("Nothing moved");
                    continue;
                }
            }
        }

        let state = session.state();
        print!("{}", session.board());
        println!("Score: {}", state.score);
        if state.game_over {
            println!(
                "Game over! Highest tile: {}. Type 'restart' to play again.",
                session.board().highest_tile()
            );
        }
    }

    session.dispose();
    let summary = persistence.await?;
    if let Some(best) = summary.high_score {
        println!("New high score: {}", best.value);
    }
    Ok(())
}

fn parse_move(input: &str) -> Option<Direction> {
    match input {
        "w" => Some(Direction::Up),
        "a" => Some(Direction::Left),
        "s" => Some(Direction::Down),
        "d" => Some(Direction::Right),
        _ => Direction::from_key(input).or_else(|| input.parse().ok()),
    }
}
