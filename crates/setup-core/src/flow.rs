//! The sequential question flow driving the whole setup

use crate::answer::Answer;
use crate::config::{PlatformSelection, PluginConfig, QuestionKey};
use crate::hooks;
use crate::manifest;
use crate::project::ProjectPaths;
use anyhow::Result;
use colored::Colorize;

/// A yes/no question with its saved-config key and default answer
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: QuestionKey,
    pub text: &'static str,
    pub default_yes: bool,
}

const ASK_IOS: Question = Question {
    key: QuestionKey::UsingIos,
    text: "Are you using iOS?",
    default_yes: true,
};

const ASK_ANDROID: Question = Question {
    key: QuestionKey::UsingAndroid,
    text: "Are you using Android?",
    default_yes: true,
};

/// The optional-service questions, asked as one batch in this order
const SERVICE_QUESTIONS: [Question; 5] = [
    Question {
        key: QuestionKey::RemoteConfig,
        text: "Are you using Firebase RemoteConfig?",
        default_yes: false,
    },
    Question {
        key: QuestionKey::Messaging,
        text: "Are you using Firebase Messaging?",
        default_yes: false,
    },
    Question {
        key: QuestionKey::Storage,
        text: "Are you using Firebase Storage?",
        default_yes: false,
    },
    Question {
        key: QuestionKey::FacebookAuth,
        text: "Are you using Firebase Facebook Authentication?",
        default_yes: false,
    },
    Question {
        key: QuestionKey::GoogleAuth,
        text: "Are you using Firebase Google Authentication?",
        default_yes: false,
    },
];

/// The ask capability backing the flow. Implementations provide a single
/// yes/no round-trip; the flow never has more than one question in flight.
pub trait Prompter {
    /// Put one question to the user and return the raw answer.
    fn confirm(&mut self, text: &str, default_yes: bool) -> Result<Answer>;

    fn ask(&mut self, question: &Question) -> Result<Answer> {
        self.confirm(question.text, question.default_yes)
    }

    /// Ask a batch of questions in order; the first transport error stops
    /// the batch.
    fn ask_all(&mut self, questions: &[Question]) -> Result<Vec<(QuestionKey, Answer)>> {
        questions
            .iter()
            .map(|question| Ok((question.key, self.ask(question)?)))
            .collect()
    }
}

/// Sequential setup state machine.
///
/// Start -> AskIOS -> AskAndroid -> AskServices -> GenerateArtifacts ->
/// AskSaveConfig -> Terminal, where Start skips straight to artifact
/// generation when a saved configuration is reused, and AskServices /
/// GenerateArtifacts are skipped when neither platform is selected.
pub struct SetupFlow<'a, P: Prompter> {
    prompter: &'a mut P,
    paths: ProjectPaths,
    reconfigure: bool,
    config: PluginConfig,
}

impl<'a, P: Prompter> SetupFlow<'a, P> {
    pub fn new(paths: ProjectPaths, prompter: &'a mut P, reconfigure: bool) -> Self {
        Self {
            prompter,
            paths,
            reconfigure,
            config: PluginConfig::default(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let config_path = self.paths.config_path();

        if !self.reconfigure && config_path.exists() {
            // Trust the cache: reuse every saved answer without re-asking,
            // but still regenerate the artifacts so a cleaned project gets
            // its manifests back.
            println!("Reusing saved configuration from {}", config_path.display());
            self.config = PluginConfig::load(&config_path);
            self.generate_artifacts().await;
            self.finish();
            return Ok(());
        }

        if config_path.exists() {
            println!(
                "Reconfiguring; ignoring saved configuration at {}",
                config_path.display()
            );
        } else {
            println!("No saved configuration at {}", config_path.display());
        }

        for question in [&ASK_IOS, &ASK_ANDROID] {
            let answer = match self.prompter.ask(question) {
                Ok(answer) => answer,
                Err(err) => return Self::abort(err),
            };
            self.config.merge(&[(question.key, answer)]);
        }

        if PlatformSelection::from(&self.config).any() {
            let answers = match self.prompter.ask_all(&SERVICE_QUESTIONS) {
                Ok(answers) => answers,
                Err(err) => return Self::abort(err),
            };
            self.config.merge(&answers);
            self.generate_artifacts().await;
        }

        let save_question = format!(
            "Save the selected configuration? Reinstalling the plugin will reuse the setup from: {}",
            config_path.display()
        );
        let save = match self.prompter.confirm(&save_question, true) {
            Ok(answer) => answer,
            Err(err) => return Self::abort(err),
        };
        if save.is_selected() {
            self.config.save(&config_path)?;
            println!("Saved configuration to {}", config_path.display());
        }

        self.finish();
        Ok(())
    }

    /// Write the manifests for the selected platforms and, for Android,
    /// install the google-services copy hook. Write failures are logged
    /// and the remaining steps still run.
    async fn generate_artifacts(&self) {
        let platforms = PlatformSelection::from(&self.config);

        if platforms.ios {
            match manifest::write_ios_manifest(&self.paths, &self.config).await {
                Ok(_) => println!("{}", "Successfully created iOS (Pod) file.".green()),
                Err(err) => eprintln!("{} {:#}", "Failed to create iOS (Pod) file:".red(), err),
            }
        }

        if platforms.android {
            match manifest::write_android_manifest(&self.paths, &self.config).await {
                Ok(_) => println!(
                    "{}",
                    "Successfully created Android (include.gradle) file.".green()
                ),
                Err(err) => eprintln!(
                    "{} {:#}",
                    "Failed to create Android (include.gradle) file:".red(),
                    err
                ),
            }

            match hooks::install_google_services_hook(&self.paths).await {
                Ok(_) => println!("{}", "Installed google-services.json copy hook.".green()),
                Err(err) => eprintln!(
                    "{} {:#}",
                    "Failed to install google-services.json copy hook:".red(),
                    err
                ),
            }
        }
    }

    /// A transport error ends the flow for this invocation; the process
    /// still exits normally.
    fn abort(err: anyhow::Error) -> Result<()> {
        eprintln!("{} {:#}", "Prompt failed, stopping setup:".red(), err);
        Ok(())
    }

    fn finish(&self) {
        println!(
            "Firebase post-install setup completed. Re-run the prompts at any time with: firebase-setup config"
        );
    }
}
