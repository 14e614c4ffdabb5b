//! Setup Core - Post-install configuration for the NativeScript Firebase plugin
//!
//! This library drives the interactive setup that runs after the plugin is
//! installed: it asks which platforms and optional Firebase services the
//! project uses, remembers the answers in `firebase.nativescript.json`, and
//! regenerates the platform dependency manifests plus the after-prepare
//! build hook from those answers.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure answer normalization, manifest
//!   rendering, and file generation (`answer`, `manifest`, `hooks`)
//! - **Layer 2: Workflow Orchestration** - The `Prompter` trait and
//!   `SetupFlow` state machine, usable with any question/answer transport
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use setup_core::{flow::SetupFlow, project::ProjectPaths};
//!
//! // Bring your own Prompter implementation
//! let paths = ProjectPaths::new("/path/to/project".into());
//! SetupFlow::new(paths, &mut my_prompter, false).run().await?;
//! ```

pub mod answer;
pub mod config;
pub mod flow;
pub mod hooks;
pub mod manifest;
pub mod project;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answer::Answer;
pub use config::{PlatformSelection, PluginConfig, QuestionKey, CONFIG_FILE};
pub use flow::{Prompter, Question, SetupFlow};
pub use project::ProjectPaths;

#[cfg(feature = "tui")]
pub use tui::run;
