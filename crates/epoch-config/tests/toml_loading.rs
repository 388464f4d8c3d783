//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use epoch_config::{ConfigError, EpochConfig};
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://history.example.org"
timeout_secs = 3

[map]
center_lat = 41.9
center_lng = 12.5
zoom = 6

[years]
default_start = "753 BCE"
default_end = "476 CE"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(EpochConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = EpochConfig::from_figment(figment).expect("config should load");

        assert_eq!(
            config.api.articles_endpoint(),
            "https://history.example.org/api/articles"
        );
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.map.zoom, 6);
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.years.default_start, "753 BCE");
        assert_eq!(config.years.default_end, "476 CE");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[api]\nuser_agent = \"museum-kiosk/2\"\n")?;

        let figment = Figment::from(Serialized::defaults(EpochConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = EpochConfig::from_figment(figment).expect("config should load");

        assert_eq!(config.api.user_agent, "museum-kiosk/2");
        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.years.default_end, "2024 CE");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".epoch")).expect("mkdir .epoch");
        jail.create_file(".epoch/config.toml", "[map]\nzoom = 9\n")?;

        let config = EpochConfig::load().expect("config should load");
        assert_eq!(config.map.zoom, 9);
        Ok(())
    });
}

#[test]
fn invalid_default_year_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[years]\ndefault_start = \"long ago\"\n")?;

        let figment = Figment::from(Serialized::defaults(EpochConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = EpochConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}
