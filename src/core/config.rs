use super::ship::ShipKind;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const NUM_SHIPS: usize = 5;

/// Every player's fleet, in placement order.
pub const STANDARD_FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Runtime knobs chosen by a front end before a match is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Per-ship draw limit for randomized placement. `None` samples until a
    /// legal spot is found.
    pub placement_attempts: Option<u32>,
    /// Pause before the automated opponent fires. Front ends only.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            placement_attempts: None,
            ai_delay_ms: 0,
        }
    }
}

/// Look up a ship kind by its display name, ignoring ASCII case.
pub fn ship_kind_by_name(name: &str) -> Option<ShipKind> {
    STANDARD_FLEET
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}
