//! Test utilities & fixtures.
//! Small riddle and room tables live under `tests/fixtures`.

use std::path::{Path, PathBuf};

use riddlereef::config::Config;

/// Return the path to the static fixture directory.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Config pointing at the fixture content with a two-player roster.
#[allow(dead_code)] // Not every test binary uses every helper.
pub fn fixture_config() -> Config {
    let root = fixture_root();
    let mut config = Config::default();
    config.game.players = vec!["Coral".to_string(), "Finley".to_string()];
    config.game.welcome_message = String::new();
    config.content.riddles_file = Some(root.join("riddles.json").to_string_lossy().to_string());
    config.content.rooms_file = Some(root.join("rooms.json").to_string_lossy().to_string());
    config
}
