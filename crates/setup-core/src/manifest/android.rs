//! The Android Gradle manifest (`platforms/android/include.gradle`)

use super::DependencyGroup;
use crate::config::{PluginConfig, QuestionKey};
use crate::project::ProjectPaths;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

pub const ANDROID_MANIFEST_FILE: &str = "include.gradle";

/// Everything up to the conditional dependency lines
const GRADLE_PREAMBLE: &str = r#"
android {
    productFlavors {
        "fireb" {
            dimension "fireb"
        }
    }
}

repositories {
    jcenter()
    mavenCentral()
}

dependencies {
    // make sure you have these versions by updating your local Android SDK's (Android Support repo and Google repo)
    compile "com.google.firebase:firebase-core:9.8.+"
    compile "com.google.firebase:firebase-database:9.8.+"
    compile "com.google.firebase:firebase-auth:9.8.+"
    compile "com.google.firebase:firebase-crash:9.8.+"

    // for reading google-services.json and configuration
    def googlePlayServicesVersion = project.hasProperty('googlePlayServicesVersion') ? project.googlePlayServicesVersion : '9.8.+'
    compile "com.google.android.gms:play-services-base:$googlePlayServicesVersion"
"#;

const GRADLE_FOOTER: &str = "\n}\n\napply plugin: \"com.google.gms.google-services\"\n";

const GRADLE_GROUPS: &[DependencyGroup] = &[
    DependencyGroup {
        flag: QuestionKey::RemoteConfig,
        header: "    // Uncomment if you want to use 'Remote Config'",
        lines: &[r#"compile "com.google.firebase:firebase-config:9.8.+""#],
    },
    DependencyGroup {
        flag: QuestionKey::Messaging,
        header: "    // Uncomment if you want FCM (Firebase Cloud Messaging)",
        lines: &[r#"compile "com.google.firebase:firebase-messaging:9.8.+""#],
    },
    DependencyGroup {
        flag: QuestionKey::Storage,
        header: "    // Uncomment if you want Google Cloud Storage",
        lines: &["compile 'com.google.firebase:firebase-storage:9.8.+'"],
    },
    DependencyGroup {
        flag: QuestionKey::FacebookAuth,
        header: "    // Uncomment if you need Facebook Authentication",
        lines: &[r#"compile "com.facebook.android:facebook-android-sdk:4.+""#],
    },
    DependencyGroup {
        flag: QuestionKey::GoogleAuth,
        header: "    // Uncomment if you need Google Sign-In Authentication",
        lines: &[r#"compile "com.google.android.gms:play-services-auth:9.8.+""#],
    },
];

/// Render `include.gradle` for the given answer set. Pure - no filesystem
/// access. Toggling a flag changes only the `//` marker in front of the
/// dependency, never the surrounding text.
pub fn render_android_manifest(config: &PluginConfig) -> String {
    let mut out = String::from(GRADLE_PREAMBLE);

    for group in GRADLE_GROUPS {
        let marker = if config.get(group.flag) { "" } else { "//" };
        out.push('\n');
        out.push_str(group.header);
        out.push('\n');
        for line in group.lines {
            out.push_str("    ");
            out.push_str(marker);
            out.push(' ');
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str(GRADLE_FOOTER);
    out
}

/// Overwrite `platforms/android/include.gradle`, creating the directory
/// if needed.
pub async fn write_android_manifest(
    paths: &ProjectPaths,
    config: &PluginConfig,
) -> Result<PathBuf> {
    let dir = paths.android_dir();
    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(ANDROID_MANIFEST_FILE);
    fs::write(&path, render_android_manifest(config))
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}
