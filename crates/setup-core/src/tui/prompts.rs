//! Charm-style CLI prompts using cliclack

use crate::answer::Answer;
use crate::flow::{Prompter, SetupFlow};
use crate::project::ProjectPaths;
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the setup command
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    /// Project root holding the saved config and generated platform files
    /// (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Force the interactive prompts even when a saved config exists
    pub reconfigure: bool,
}

/// Prompter backed by cliclack's inline confirm widget.
///
/// The widget yields a boolean directly, so answers arrive pre-typed; a
/// cancelled prompt (Esc/Ctrl-C inside the widget) surfaces as the
/// transport error that aborts the flow.
pub struct CliPrompter;

impl Prompter for CliPrompter {
    fn confirm(&mut self, text: &str, default_yes: bool) -> Result<Answer> {
        let selected = cliclack::confirm(text)
            .initial_value(default_yes)
            .interact()?;
        Ok(Answer::Flag(selected))
    }
}

/// Run the setup flow with interactive prompts
pub async fn run(args: SetupArgs) -> Result<()> {
    cliclack::intro("NativeScript Firebase Plugin Setup")?;

    let paths = match args.root {
        Some(root) => ProjectPaths::new(root),
        None => ProjectPaths::from_current_dir(),
    };
    cliclack::log::info(format!("Project root: {}", paths.root().display()))?;

    let mut prompter = CliPrompter;
    SetupFlow::new(paths, &mut prompter, args.reconfigure)
        .run()
        .await?;

    cliclack::outro("Happy coding!")?;

    Ok(())
}
