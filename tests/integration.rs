// SPDX-License-Identifier: MPL-2.0
use movie_maker::clock::ms_to_time;
use movie_maker::config::{self, Config, ThemePreference, DEFAULT_ICON_SIZE};
use movie_maker::icon::{IconSize, Theme};
use tempfile::tempdir;

#[test]
fn test_theme_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: light icons
    let initial_config = Config {
        theme: Some(ThemePreference::Light),
        icon_size: Some(DEFAULT_ICON_SIZE),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded_initial_config.theme().resolve(), Theme::Light);

    // 2. Change config to dark icons at a larger size
    let dark_config = Config {
        theme: Some(ThemePreference::Dark),
        icon_size: Some(24),
        ..Config::default()
    };
    config::save_to_path(&dark_config, &temp_config_file_path)
        .expect("Failed to write dark config file");

    let loaded_dark_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load dark config from path");
    assert_eq!(loaded_dark_config.theme().resolve(), Theme::Dark);
    assert_eq!(loaded_dark_config.icon_size(), IconSize::square(24));

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_clock_strings_for_player_timeline() {
    assert_eq!(ms_to_time(0.0, false), "0:00");
    assert_eq!(ms_to_time(65_000.0, false), "1:05");
    assert_eq!(ms_to_time(754_000.0, false), "12:34");
    assert_eq!(ms_to_time(5_025_000.0, false), "1:23:45");
    assert_eq!(ms_to_time(f64::NAN, false), "00:00");
}
