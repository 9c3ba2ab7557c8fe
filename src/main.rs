use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dice_connect_four::ai::build_agent;
use dice_connect_four::config::{AgentKind, AppConfig};
use dice_connect_four::game::{GameOutcome, Player, StdRandom};
use dice_connect_four::runner::play_game;

/// Watch two AI agents play dice-constrained Connect Four.
#[derive(Parser)]
#[command(name = "dice-connect-four", about = "AI vs AI Connect Four with dice-capped moves")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Agent playing Red
    #[arg(long, value_enum)]
    red: Option<AgentKind>,

    /// Agent playing Yellow
    #[arg(long, value_enum)]
    yellow: Option<AgentKind>,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed all randomness for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Only print per-game results, not every board
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(red) = cli.red {
        config.game.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.game.yellow = yellow;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(games) = cli.games {
        config.game.games = games;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    config.validate()?;

    let mut red_wins = 0usize;
    let mut yellow_wins = 0usize;
    let mut draws = 0usize;

    for game in 0..config.game.games {
        // Distinct derived seeds per game and per component keep seeded runs
        // reproducible without replaying identical games.
        let seed_for = |offset: u64| config.game.seed.map(|s| s + 3 * game as u64 + offset);

        let mut red = build_agent(config.game.red, config.search.depth, seed_for(0));
        let mut yellow = build_agent(config.game.yellow, config.search.depth, seed_for(1));
        let mut dice = match seed_for(2) {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::new(),
        };

        if config.game.games > 1 {
            println!("=== Game {} of {} ===", game + 1, config.game.games);
        }

        let quiet = cli.quiet;
        let outcome = play_game(red.as_mut(), yellow.as_mut(), &mut dice, |record, state| {
            if !quiet {
                println!(
                    "{} rolled {} and played column {}",
                    record.player.name(),
                    record.dice,
                    record.column
                );
                println!("{}", state.board());
            }
        })
        .context("match aborted")?;

        match outcome {
            GameOutcome::Winner(Player::Red) => {
                red_wins += 1;
                println!("Red ({}) wins!", red.name());
            }
            GameOutcome::Winner(Player::Yellow) => {
                yellow_wins += 1;
                println!("Yellow ({}) wins!", yellow.name());
            }
            GameOutcome::Draw => {
                draws += 1;
                println!("Draw!");
            }
        }
    }

    if config.game.games > 1 {
        println!("Final score: Red {red_wins}, Yellow {yellow_wins}, draws {draws}");
    }

    Ok(())
}
