use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    cli::{coord_to_string, render_player_view},
    init_logging, take_turn, AiPlayer, Board, CliPlayer, GameConfig, Match, Player, PlayerId,
};

/// Row labels are drawn two digits wide.
const MAX_SIDE: u64 = 99;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = seabattle::BOARD_WIDTH,
              value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SIDE))]
        width: usize,
        #[arg(long, default_value_t = seabattle::BOARD_HEIGHT,
              value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SIDE))]
        height: usize,
        #[arg(long, help = "Give up random placement after this many draws per ship")]
        placement_attempts: Option<u32>,
        #[arg(long, default_value_t = 0, help = "Pause before the computer fires")]
        ai_delay_ms: u64,
    },
    /// Let two computer players fight and print the result as JSON.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn play(config: GameConfig, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let human_id = PlayerId::One;
    let computer_id = PlayerId::Two;

    let mut human = CliPlayer::stdin().with_config(&config);
    let mut computer = AiPlayer::with_config(&config);
    let mut game = Match::new(
        Board::new(config.width, config.height),
        Board::new(config.width, config.height),
    );

    human.place_ships(&mut rng, game.board_mut(human_id)?)?;
    computer.place_ships(&mut rng, game.board_mut(computer_id)?)?;
    let first = game.start(&mut rng)?;
    println!(
        "\n{} fires first.",
        if first == human_id { "You" } else { "The computer" }
    );

    while !game.is_finished() {
        if game.turn_owner() == human_id {
            println!("\n{}", render_player_view(&game, human_id));
            let target = game.board(computer_id);
            let Some(coord) = human.select_target(&mut rng, target) else {
                println!("You left the battle.");
                return Ok(());
            };
            let outcome = game.submit_attack(human_id, coord)?;
            human.handle_attack_result(coord, outcome);
        } else {
            if config.ai_delay_ms > 0 {
                thread::sleep(Duration::from_millis(config.ai_delay_ms));
            }
            let (coord, outcome) = take_turn(&mut computer, &mut game, &mut rng)?;
            info!("computer fired at {}", coord_to_string(coord));
            human.handle_opponent_attack(coord, outcome);
        }
    }

    println!("\n{}", render_player_view(&game, human_id));
    match game.winner() {
        Some(w) if w == human_id => println!("🏆 You sank the whole enemy fleet!"),
        Some(_) => println!("☠️  Your fleet was destroyed."),
        None => return Err(anyhow!("match ended without a winner")),
    }
    Ok(())
}

fn sim(seed: Option<u64>) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    let report = seabattle::player::simulate(seed, seed.wrapping_add(1))?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            width,
            height,
            placement_attempts,
            ai_delay_ms,
        } => {
            let config = GameConfig {
                width,
                height,
                placement_attempts,
                ai_delay_ms,
            };
            play(config, seed)
        }
        Commands::Sim { seed } => sim(seed),
    }
}
