use std::fs;

use anyhow::{bail, Context};
use shared::domain::GameMode;
use url::Url;

pub const DEFAULT_TARGET: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone)]
pub struct Settings {
    pub target: String,
    pub mode: Option<GameMode>,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.into(),
            mode: None,
            seed: None,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("draft.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("CATALOG_TARGET") {
        settings.target = v;
    }
    if let Ok(v) = std::env::var("DRAFT_MODE") {
        if let Ok(mode) = v.parse() {
            settings.mode = Some(mode);
        }
    }
    if let Ok(v) = std::env::var("DRAFT_SEED") {
        if let Ok(seed) = v.parse::<u64>() {
            settings.seed = Some(seed);
        }
    }

    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<toml::Value>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("target").and_then(|v| v.as_str()) {
        settings.target = v.to_string();
    }
    if let Some(v) = file_cfg.get("mode").and_then(|v| v.as_str()) {
        if let Ok(mode) = v.parse() {
            settings.mode = Some(mode);
        }
    }
    if let Some(v) = file_cfg.get("seed").and_then(|v| v.as_integer()) {
        settings.seed = Some(v as u64);
    }
}

pub fn validate_target(raw_target: &str) -> anyhow::Result<String> {
    let target = raw_target.trim().trim_end_matches('/');
    if target.is_empty() {
        bail!("catalog target is empty");
    }
    let url = Url::parse(target)
        .with_context(|| format!("catalog target '{target}' is not a valid URL"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        bail!("catalog target '{target}' must use http or https");
    }
    Ok(target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_config_overrides_every_default() {
        let mut settings = Settings::default();
        apply_file_config(
            &mut settings,
            r#"
            target = "http://localhost:9000"
            mode = "no_duplicate"
            seed = 42
            "#,
        );
        assert_eq!(settings.target, "http://localhost:9000");
        assert_eq!(settings.mode, Some(GameMode::NoDuplicate));
        assert_eq!(settings.seed, Some(42));
    }

    #[test]
    fn unknown_mode_in_file_is_ignored() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "mode = \"ranked\"");
        assert_eq!(settings.mode, None);
        assert_eq!(settings.target, DEFAULT_TARGET);
    }

    #[test]
    fn malformed_file_leaves_defaults_alone() {
        let mut settings = Settings::default();
        apply_file_config(&mut settings, "target = [not toml");
        assert_eq!(settings.target, DEFAULT_TARGET);
    }

    #[test]
    fn default_target_validates() {
        assert_eq!(validate_target(DEFAULT_TARGET).expect("valid"), DEFAULT_TARGET);
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            validate_target("http://localhost:9000/").expect("valid"),
            "http://localhost:9000"
        );
    }

    #[test]
    fn garbage_targets_are_rejected() {
        assert!(validate_target("").is_err());
        assert!(validate_target("not a url").is_err());
        assert!(validate_target("ftp://catalog.example").is_err());
    }

    #[test]
    fn environment_overrides_the_file_layer() {
        std::env::set_var("CATALOG_TARGET", "http://env.example:1234");
        std::env::set_var("DRAFT_MODE", "nodup");
        std::env::set_var("DRAFT_SEED", "7");

        let settings = load_settings();
        assert_eq!(settings.target, "http://env.example:1234");
        assert_eq!(settings.mode, Some(GameMode::NoDuplicate));
        assert_eq!(settings.seed, Some(7));

        std::env::remove_var("CATALOG_TARGET");
        std::env::remove_var("DRAFT_MODE");
        std::env::remove_var("DRAFT_SEED");
    }
}
