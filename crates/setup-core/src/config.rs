//! Saved plugin configuration: the answers to every setup question

use crate::answer::Answer;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the saved configuration, relative to the project root
pub const CONFIG_FILE: &str = "firebase.nativescript.json";

/// Identifies one setup question / saved-config key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKey {
    UsingIos,
    UsingAndroid,
    RemoteConfig,
    Messaging,
    Storage,
    FacebookAuth,
    GoogleAuth,
}

/// The full answer set, persisted as `firebase.nativescript.json`.
///
/// Field order is question order, so the pretty-printed JSON keeps the
/// keys in the order they were asked. Keys absent from an existing file
/// deserialize as `false` (unanswered).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub using_ios: bool,
    #[serde(default)]
    pub using_android: bool,
    #[serde(default)]
    pub remote_config: bool,
    #[serde(default)]
    pub messaging: bool,
    #[serde(default)]
    pub storage: bool,
    #[serde(default)]
    pub facebook_auth: bool,
    #[serde(default)]
    pub google_auth: bool,
}

impl PluginConfig {
    pub fn get(&self, key: QuestionKey) -> bool {
        match key {
            QuestionKey::UsingIos => self.using_ios,
            QuestionKey::UsingAndroid => self.using_android,
            QuestionKey::RemoteConfig => self.remote_config,
            QuestionKey::Messaging => self.messaging,
            QuestionKey::Storage => self.storage,
            QuestionKey::FacebookAuth => self.facebook_auth,
            QuestionKey::GoogleAuth => self.google_auth,
        }
    }

    pub fn set(&mut self, key: QuestionKey, value: bool) {
        match key {
            QuestionKey::UsingIos => self.using_ios = value,
            QuestionKey::UsingAndroid => self.using_android = value,
            QuestionKey::RemoteConfig => self.remote_config = value,
            QuestionKey::Messaging => self.messaging = value,
            QuestionKey::Storage => self.storage = value,
            QuestionKey::FacebookAuth => self.facebook_auth = value,
            QuestionKey::GoogleAuth => self.google_auth = value,
        }
    }

    /// Normalize each raw answer and upsert it into the config.
    pub fn merge(&mut self, answers: &[(QuestionKey, Answer)]) {
        for (key, answer) in answers {
            self.set(*key, answer.is_selected());
        }
    }

    /// Load a saved configuration.
    ///
    /// The saved file is a best-effort cache: a missing file, unreadable
    /// file, or malformed JSON logs a diagnostic and yields the default
    /// (empty) configuration instead of an error.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {:#}", "Ignoring saved config:".yellow(), err);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Persist the configuration as pretty-printed JSON, overwriting any
    /// existing file. Unlike [`PluginConfig::load`], failures propagate.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Platform choices derived from the config at flow start
#[derive(Debug, Clone, Copy)]
pub struct PlatformSelection {
    pub ios: bool,
    pub android: bool,
}

impl PlatformSelection {
    pub fn any(&self) -> bool {
        self.ios || self.android
    }
}

impl From<&PluginConfig> for PlatformSelection {
    fn from(config: &PluginConfig) -> Self {
        Self {
            ios: config.using_ios,
            android: config.using_android,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);

        let config = PluginConfig {
            using_ios: true,
            using_android: false,
            remote_config: true,
            messaging: false,
            storage: true,
            facebook_auth: false,
            google_auth: true,
        };

        config.save(&path).unwrap();
        assert_eq!(PluginConfig::load(&path), config);
    }

    #[test]
    fn test_load_missing_file_is_empty_config() {
        let tmp = TempDir::new().unwrap();
        let loaded = PluginConfig::load(&tmp.path().join(CONFIG_FILE));
        assert_eq!(loaded, PluginConfig::default());
    }

    #[test]
    fn test_load_malformed_json_is_empty_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();

        assert_eq!(PluginConfig::load(&path), PluginConfig::default());
    }

    #[test]
    fn test_absent_keys_read_as_false() {
        let config: PluginConfig = serde_json::from_str(r#"{"using_ios": true}"#).unwrap();
        assert!(config.using_ios);
        assert!(!config.using_android);
        assert!(!config.messaging);
    }

    #[test]
    fn test_merge_normalizes_raw_answers() {
        let mut config = PluginConfig::default();
        config.merge(&[
            (QuestionKey::UsingIos, Answer::from("Y")),
            (QuestionKey::UsingAndroid, Answer::from("n")),
            (QuestionKey::Messaging, Answer::Flag(true)),
            (QuestionKey::Storage, Answer::from("yes")),
        ]);

        assert!(config.using_ios);
        assert!(!config.using_android);
        assert!(config.messaging);
        assert!(!config.storage);
    }

    #[test]
    fn test_merge_overwrites_previous_answers() {
        let mut config = PluginConfig {
            messaging: true,
            ..Default::default()
        };
        config.merge(&[(QuestionKey::Messaging, Answer::from("n"))]);
        assert!(!config.messaging);
    }

    #[test]
    fn test_saved_json_keeps_question_order() {
        let json = serde_json::to_string_pretty(&PluginConfig::default()).unwrap();
        let ios = json.find("using_ios").unwrap();
        let android = json.find("using_android").unwrap();
        let remote = json.find("remote_config").unwrap();
        let google = json.find("google_auth").unwrap();
        assert!(ios < android && android < remote && remote < google);
    }

    #[test]
    fn test_platform_selection_derives_from_config() {
        let config = PluginConfig {
            using_android: true,
            ..Default::default()
        };
        let platforms = PlatformSelection::from(&config);
        assert!(!platforms.ios);
        assert!(platforms.android);
        assert!(platforms.any());

        assert!(!PlatformSelection::from(&PluginConfig::default()).any());
    }
}
