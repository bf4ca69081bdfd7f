use std::fmt::Write as _;

use crate::core::{conflicts, Board, Cell, Coord, Match, Orientation, PlayerId};

/// Spreadsheet-style column name: `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        match (n / 26).checked_sub(1) {
            Some(rest) => n = rest,
            None => break,
        }
    }
    letters.iter().rev().collect()
}

/// `Coord { row: 4, col: 1 }` -> `"B5"`.
pub fn coord_to_string(coord: Coord) -> String {
    format!("{}{}", column_label(coord.col), coord.row + 1)
}

fn parse_column(letters: &str) -> Option<usize> {
    letters
        .bytes()
        .try_fold(0usize, |acc, b| {
            let digit = usize::from(b.to_ascii_uppercase().checked_sub(b'A')?) + 1;
            acc.checked_mul(26)?.checked_add(digit)
        })?
        .checked_sub(1)
}

/// Parse `"B5"` style input for a `width × height` board.
pub fn parse_coord(input: &str, width: usize, height: usize) -> Result<Coord, String> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    if letters.is_empty() || row_str.is_empty() {
        return Err("need a column letter and a row number (e.g. A5)".to_string());
    }
    let col = parse_column(letters).ok_or_else(|| format!("invalid column '{}'", letters))?;
    if col >= width {
        return Err(format!(
            "column '{}' is off the board (A-{})",
            letters.to_ascii_uppercase(),
            column_label(width.saturating_sub(1))
        ));
    }
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("invalid row '{}'", row_str))?;
    if row == 0 || row > height {
        return Err(format!("row {} is off the board (1-{})", row, height));
    }
    Ok(Coord::new(row - 1, col))
}

/// `"h"`/`"horizontal"` or `"v"`/`"vertical"`, any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

fn cell_char(cell: Cell, reveal: bool, conflict: bool) -> char {
    match (cell.occupied, cell.hit) {
        (true, true) => 'X',
        (false, true) => 'o',
        (true, false) if reveal && conflict => '!',
        (true, false) if reveal => 'S',
        _ => '.',
    }
}

/// Draw `board`. Ships are shown only with `reveal`; cells breaking the
/// spacing rule are marked `!`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let bad = if reveal {
        conflicts(board.fleet(), board.width(), board.height())
    } else {
        Vec::new()
    };
    let w = column_label(board.width().saturating_sub(1)).len();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..board.width() {
        let _ = write!(out, " {:>w$}", column_label(c));
    }
    out.push('\n');
    for r in 0..board.height() {
        let _ = write!(out, "  {:2}", r + 1);
        for c in 0..board.width() {
            let coord = Coord::new(r, c);
            let cell = board.cell(coord).unwrap_or_default();
            let _ = write!(out, " {:>w$}", cell_char(cell, reveal, bad.contains(&coord)));
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("  Legend: S=Ship  X=Hit  o=Miss  .=Water  !=Too close\n");
        for ship in board.fleet() {
            let status = if ship.is_sunk() { "SUNK" } else { "afloat" };
            let _ = writeln!(
                out,
                "    {} ({}) at {} {:?}: {}",
                ship.kind(),
                ship.length(),
                coord_to_string(ship.anchor()),
                ship.orientation(),
                status
            );
        }
    } else {
        out.push_str("  Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}

/// Opponent board on top, hidden; `me`'s board below, revealed.
pub fn render_player_view(game: &Match, me: PlayerId) -> String {
    format!(
        "Opponent board:\n{}\nYour board:\n{}",
        render_board(game.board(me.opponent()), false),
        render_board(game.board(me), true)
    )
}
