// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::config::{self, Config};
use iced_toast::app::i18n::fluent::I18n;
use iced_toast::ui::notifications::Easing;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("button-checkout"), "Checkout");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("button-checkout"), "Payer");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_notification_settings_round_trip_through_directory_override() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.notifications.duration_ms = Some(1200);
    config.notifications.exit_ms = Some(0);
    config.notifications.easing = Some(Easing::Linear);
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let motion = loaded.notifications.motion();
    assert_eq!(motion.exit, Duration::ZERO);
    assert_eq!(motion.easing, Easing::Linear);
    assert_eq!(loaded.notifications.duration(), Duration::from_millis(1200));
}
