use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

pub const DEFAULT_DATA_PATH: &str = "assets/data.json";
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 1000;

const DATA_PATH_ENV: &str = "CRED_LOOKUP_DATA";
const COPY_FEEDBACK_ENV: &str = "CRED_LOOKUP_COPY_FEEDBACK_MS";

/// Settings resolved once at startup and shared with the UI through the launch context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub copy_feedback: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            copy_feedback: Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            config.data_path = PathBuf::from(path.trim());
        }
        if let Some(raw) = lookup(COPY_FEEDBACK_ENV).filter(|value| !value.trim().is_empty()) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{COPY_FEEDBACK_ENV} must be milliseconds, got {raw:?}"))?;
            config.copy_feedback = Duration::from_millis(millis);
        }
        Ok(config)
    }
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "cred-lookup")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    ensure_webview_data_dir(project_dirs.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[])).expect("defaults should resolve");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_path, PathBuf::from("assets/data.json"));
        assert_eq!(config.copy_feedback, Duration::from_secs(1));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("CRED_LOOKUP_DATA", " /srv/lookup/data.json "),
            ("CRED_LOOKUP_COPY_FEEDBACK_MS", "250"),
        ]))
        .expect("overrides should resolve");

        assert_eq!(config.data_path, PathBuf::from("/srv/lookup/data.json"));
        assert_eq!(config.copy_feedback, Duration::from_millis(250));
    }

    #[test]
    fn invalid_feedback_delay_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("CRED_LOOKUP_COPY_FEEDBACK_MS", "soon")]));

        assert!(result.is_err());
    }

    #[test]
    fn webview_dir_is_created_under_base() {
        let base = std::env::temp_dir().join(format!(
            "dioxus-webview-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("clock should be after epoch")
                .as_nanos()
        ));

        let dir = ensure_webview_data_dir(&base).expect("should create webview dir");

        assert!(dir.is_dir());
        assert!(dir.ends_with("webview2"));
        std::fs::remove_dir_all(&base).expect("should cleanup temp dir");
    }
}
