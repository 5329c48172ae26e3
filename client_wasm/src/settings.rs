//! Start-up configuration read from the page URL

use game_core::Config;

pub const BEST_OF_PARAM: &str = "best_of";

/// Game config with the initial match length taken from `?best_of=N`.
///
/// Missing or unsupported values keep the default length.
pub fn config_from_query(best_of: Option<&str>) -> Config {
    let mut config = Config::new();
    let Some(raw) = best_of else {
        return config;
    };

    let index = raw
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| config.match_lengths.iter().position(|&len| len == n));

    match index {
        Some(index) => config.default_match_index = index,
        None => log::warn!(
            "Ignoring {}={:?}; expected one of {:?}",
            BEST_OF_PARAM,
            raw,
            config.match_lengths
        ),
    }
    config
}
