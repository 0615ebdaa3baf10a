//! Layout of a sample-data directory: one `Sample_Game_{id}` directory per match, holding the
//! raw event log and a tracking file per team.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::Side;
use crate::file;

const GAME_PREFIX: &str = "Sample_Game_";
const EVENTS_SUFFIX: &str = "_RawEventsData.csv";

pub fn game_dir(data_dir: impl AsRef<Path>, game: u32) -> PathBuf {
    data_dir.as_ref().join(format!("{GAME_PREFIX}{game}"))
}

pub fn events_path(data_dir: impl AsRef<Path>, game: u32) -> PathBuf {
    game_dir(data_dir, game).join(format!("{GAME_PREFIX}{game}{EVENTS_SUFFIX}"))
}

pub fn tracking_path(data_dir: impl AsRef<Path>, game: u32, side: Side) -> PathBuf {
    game_dir(data_dir, game).join(format!("{GAME_PREFIX}{game}_RawTrackingData_{side}_Team.csv"))
}

/// Identifies a game from the name of its event log, e.g. `Sample_Game_2_RawEventsData.csv`.
pub fn parse_game_id(file_name: &str) -> Option<u32> {
    file_name
        .strip_prefix(GAME_PREFIX)?
        .strip_suffix(EVENTS_SUFFIX)?
        .parse()
        .ok()
}

/// The games with an event log anywhere under `data_dir`, in ascending order.
pub fn discover_games(data_dir: impl AsRef<Path>) -> Result<Vec<u32>, io::Error> {
    let mut files = vec![];
    file::recurse_dir(data_dir.as_ref().to_path_buf(), &mut files, &mut |name: &OsStr| {
        name.to_str().and_then(parse_game_id).is_some()
    })?;
    let mut games = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str().and_then(parse_game_id))
        .collect::<Vec<_>>();
    games.sort_unstable();
    games.dedup();
    Ok(games)
}
