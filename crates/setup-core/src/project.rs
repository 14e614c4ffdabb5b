//! Fixed project-relative locations used by the setup

use crate::config::CONFIG_FILE;
use std::path::{Path, PathBuf};

/// The directories and files the setup reads and writes, anchored at the
/// project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Anchor at the current working directory.
    pub fn from_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/firebase.nativescript.json`
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// `<root>/platforms/ios`
    pub fn ios_dir(&self) -> PathBuf {
        self.root.join("platforms").join("ios")
    }

    /// `<root>/platforms/android`
    pub fn android_dir(&self) -> PathBuf {
        self.root.join("platforms").join("android")
    }

    /// `<root>/hooks/after-prepare`
    pub fn after_prepare_dir(&self) -> PathBuf {
        self.root.join("hooks").join("after-prepare")
    }
}
