use std::io::{self, BufRead, StdinLock, Write};

use rand::rngs::SmallRng;

use crate::cli::{coord_to_string, parse_coord, parse_orientation, render_board};
use crate::core::{
    check_ready, randomize_placement, randomize_placement_bounded, ship_kind_by_name,
    standard_fleet, AttackOutcome, Board, Coord, GameConfig, PlacementError, Ship,
};

use super::Player;

/// Human player reading commands line by line.
pub struct CliPlayer<R> {
    input: R,
    placement_attempts: Option<u32>,
}

impl CliPlayer<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> CliPlayer<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            placement_attempts: None,
        }
    }

    /// Honour the per-ship draw limit of `config` for every random layout.
    pub fn with_config(mut self, config: &GameConfig) -> Self {
        self.placement_attempts = config.placement_attempts;
        self
    }

    fn randomize(&self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        match self.placement_attempts {
            Some(max) => randomize_placement_bounded(board, rng, max),
            None => randomize_placement(board, rng),
        }
    }

    /// Prompt and read one trimmed line. `None` on end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn apply_placement_command(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        line: &str,
    ) -> Result<(), String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (width, height) = (board.width(), board.height());
        let kind_arg = |idx: usize| {
            parts
                .get(idx)
                .and_then(|name| ship_kind_by_name(name))
                .ok_or_else(|| "unknown ship name".to_string())
        };
        match parts.first().map(|p| p.to_ascii_lowercase()).as_deref() {
            Some("random") => self.randomize(rng, board).map_err(|e| e.to_string()),
            Some("clear") => board.clear_ships().map_err(|e| e.to_string()),
            Some("rotate") => board
                .rotate_ship(kind_arg(1)?)
                .map(|_| ())
                .map_err(|e| e.to_string()),
            Some("move") => {
                let kind = kind_arg(1)?;
                let coord = parse_coord(parts.get(2).copied().unwrap_or(""), width, height)?;
                board
                    .move_ship(kind, coord)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }
            Some("place") => {
                let kind = kind_arg(1)?;
                let coord = parse_coord(parts.get(2).copied().unwrap_or(""), width, height)?;
                let orientation = parts
                    .get(3)
                    .and_then(|o| parse_orientation(o))
                    .ok_or_else(|| "orientation must be H or V".to_string())?;
                let previous = match board.ship(kind) {
                    Some(_) => Some(board.remove_ship(kind).map_err(|e| e.to_string())?),
                    None => None,
                };
                board
                    .place_ship(Ship::new(kind, orientation, coord))
                    .or_else(|e| {
                        // Restore the previous position.
                        if let Some(ship) = previous {
                            let _ = board.place_ship(ship);
                        }
                        Err(e.to_string())
                    })
            }
            Some("help") => {
                print_placement_help();
                Ok(())
            }
            _ => Err("unknown command, type 'help'".to_string()),
        }
    }
}

impl<R: BufRead> Player for CliPlayer<R> {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        self.randomize(rng, board)?;
        loop {
            println!("\nYour fleet:\n{}", render_board(board, true));
            let Some(line) = self.read_line("Placement ('ready', 'random', 'help'): ") else {
                // Out of input: keep whatever legal layout we have.
                if check_ready(board) {
                    return Ok(());
                }
                return self.randomize(rng, board);
            };
            if line.eq_ignore_ascii_case("ready") || line.is_empty() {
                if check_ready(board) {
                    return Ok(());
                }
                let missing: Vec<_> = standard_fleet()
                    .into_iter()
                    .filter(|&k| board.ship(k).is_none())
                    .map(|k| k.name())
                    .collect();
                if missing.is_empty() {
                    println!("✗ Ships marked '!' are too close together.");
                } else {
                    println!("✗ Still to place: {}", missing.join(", "));
                }
                continue;
            }
            if let Err(e) = self.apply_placement_command(rng, board, &line) {
                println!("✗ {}", e);
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng, target: &Board) -> Option<Coord> {
        loop {
            let line = self.read_line("\nTarget (e.g. B7, 'quit'): ")?;
            if line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(&line, target.width(), target.height()) {
                Ok(coord) => {
                    if target.cell(coord).map(|c| c.hit).unwrap_or(false) {
                        println!("✗ {} was already attacked.", coord_to_string(coord));
                        continue;
                    }
                    return Some(coord);
                }
                Err(e) => println!("✗ {}", e),
            }
        }
    }

    fn handle_attack_result(&mut self, coord: Coord, outcome: AttackOutcome) {
        let at = coord_to_string(coord);
        match (outcome.hit, outcome.sunk) {
            (true, Some(kind)) => println!("💥 {}: you sank the enemy {}!", at, kind),
            (true, None) => println!("🎯 {}: hit!", at),
            (false, _) => println!("💧 {}: miss.", at),
        }
    }

    fn handle_opponent_attack(&mut self, coord: Coord, outcome: AttackOutcome) {
        let at = coord_to_string(coord);
        match (outcome.hit, outcome.sunk) {
            (true, Some(kind)) => println!("💀 Enemy fired at {} and sank your {}.", at, kind),
            (true, None) => println!("⚠️  Enemy hit your ship at {}.", at),
            (false, _) => println!("Enemy missed at {}.", at),
        }
    }
}

fn print_placement_help() {
    println!("\nPlacement commands:");
    println!("  random                       new random layout");
    println!("  clear                        remove every ship");
    println!("  place <ship> <cell> <H|V>    e.g. place carrier A1 H");
    println!("  move <ship> <cell>           move keeping orientation");
    println!("  rotate <ship>                swap horizontal/vertical");
    println!("  ready                        start the battle");
    println!("Ships may not touch each other, not even diagonally.");
}
