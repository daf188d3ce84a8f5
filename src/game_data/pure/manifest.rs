// Steam app manifest file names

use crate::game_data::pure::parse_game_id;
use crate::game_data::types::GameId;

/// Extract the app ID from an `appmanifest_<id>.acf` file name
pub fn parse_manifest_id(file_name: &str) -> Option<GameId> {
    let id = file_name
        .strip_prefix("appmanifest_")?
        .strip_suffix(".acf")?;
    parse_game_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_names_yield_ids() {
        assert_eq!(parse_manifest_id("appmanifest_228980.acf"), Some(228980));
        assert_eq!(parse_manifest_id("appmanifest_1086940.acf"), Some(1086940));
    }

    #[test]
    fn other_files_are_ignored() {
        assert_eq!(parse_manifest_id("libraryfolders.vdf"), None);
        assert_eq!(parse_manifest_id("appmanifest_0.acf"), None);
        assert_eq!(parse_manifest_id("appmanifest_228980.acf.tmp"), None);
        assert_eq!(parse_manifest_id("appmanifest_abc.acf"), None);
    }
}
