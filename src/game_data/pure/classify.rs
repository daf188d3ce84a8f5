// Game ID classification (pure functions)

use crate::game_data::types::GameId;

/// First value of the reserved range. Non-Steam shortcuts and tool-internal
/// prefixes are numbered at or above it.
pub const GAME_ID_CEILING: u64 = 2_147_483_647;

/// Parse a directory name as a game ID.
///
/// Accepts plain ASCII digits in `1..GAME_ID_CEILING`, written the way the
/// ID formats back (`70`, never `0070`), since every path is rebuilt from the
/// number. Signs, whitespace, leading zeros and everything else yield `None`.
pub fn parse_game_id(name: &str) -> Option<GameId> {
    if name.is_empty() || name.starts_with('0') || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value: u64 = name.parse().ok()?;
    if !is_game_id(value) {
        return None;
    }
    GameId::try_from(value).ok()
}

/// Whether a numeric value lies in the game range `1..GAME_ID_CEILING`
pub fn is_game_id(value: u64) -> bool {
    value != 0 && value < GAME_ID_CEILING
}

/// Whether a compat/shader directory name belongs to a real game
pub fn is_game_directory(name: &str) -> bool {
    parse_game_id(name).is_some()
}
