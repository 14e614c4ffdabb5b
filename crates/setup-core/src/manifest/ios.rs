//! The iOS CocoaPods manifest (`platforms/ios/Podfile`)

use super::DependencyGroup;
use crate::config::{PluginConfig, QuestionKey};
use crate::project::ProjectPaths;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

pub const IOS_MANIFEST_FILE: &str = "Podfile";

/// Dependencies every project gets, service selection aside
const BASE_PODS: &str = "pod 'Firebase', '~> 3.9.0'
pod 'Firebase/Database'
pod 'Firebase/Auth'
pod 'Firebase/Crash'
";

const POD_GROUPS: &[DependencyGroup] = &[
    DependencyGroup {
        flag: QuestionKey::RemoteConfig,
        header: "# Uncomment if you want to enable Remote Config",
        lines: &["pod 'Firebase/RemoteConfig'"],
    },
    DependencyGroup {
        flag: QuestionKey::Messaging,
        header: "# Uncomment if you want to enable FCM (Firebase Cloud Messaging)",
        lines: &["pod 'Firebase/Messaging'"],
    },
    DependencyGroup {
        flag: QuestionKey::Storage,
        header: "# Uncomment if you want to enable Firebase Storage",
        lines: &["pod 'Firebase/Storage'"],
    },
    DependencyGroup {
        flag: QuestionKey::FacebookAuth,
        header: "# Uncomment if you want to enable Facebook Authentication",
        lines: &["pod 'FBSDKCoreKit'", "pod 'FBSDKLoginKit'"],
    },
    DependencyGroup {
        flag: QuestionKey::GoogleAuth,
        header: "# Uncomment if you want to enable Google Authentication",
        lines: &["pod 'GoogleSignIn'"],
    },
];

/// Render the Podfile for the given answer set. Pure - no filesystem access.
pub fn render_ios_manifest(config: &PluginConfig) -> String {
    let mut out = String::from(BASE_PODS);

    for group in POD_GROUPS {
        let enabled = config.get(group.flag);
        out.push('\n');
        out.push_str(group.header);
        out.push('\n');
        for line in group.lines {
            if !enabled {
                out.push('#');
            }
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

/// Overwrite `platforms/ios/Podfile`, creating the directory if needed.
pub async fn write_ios_manifest(paths: &ProjectPaths, config: &PluginConfig) -> Result<PathBuf> {
    let dir = paths.ios_dir();
    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(IOS_MANIFEST_FILE);
    fs::write(&path, render_ios_manifest(config))
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_pods_always_present() {
        let manifest = render_ios_manifest(&PluginConfig::default());
        assert!(manifest.starts_with("pod 'Firebase', '~> 3.9.0'\n"));
        assert!(manifest.contains("pod 'Firebase/Database'"));
        assert!(manifest.contains("pod 'Firebase/Auth'"));
        assert!(manifest.contains("pod 'Firebase/Crash'"));
    }

    #[test]
    fn test_selected_service_is_uncommented() {
        let config = PluginConfig {
            remote_config: true,
            ..Default::default()
        };
        let manifest = render_ios_manifest(&config);

        assert!(manifest.contains("\npod 'Firebase/RemoteConfig'\n"));
        assert!(manifest.contains("\n#pod 'Firebase/Messaging'\n"));
    }

    #[test]
    fn test_all_services_off_comments_every_pod() {
        let manifest = render_ios_manifest(&PluginConfig::default());

        for pod in [
            "#pod 'Firebase/RemoteConfig'",
            "#pod 'Firebase/Messaging'",
            "#pod 'Firebase/Storage'",
            "#pod 'FBSDKCoreKit'",
            "#pod 'FBSDKLoginKit'",
            "#pod 'GoogleSignIn'",
        ] {
            assert!(manifest.contains(pod), "missing commented line: {pod}");
        }
    }

    #[test]
    fn test_facebook_auth_toggles_both_sdk_pods() {
        let config = PluginConfig {
            facebook_auth: true,
            ..Default::default()
        };
        let manifest = render_ios_manifest(&config);

        assert!(manifest.contains("\npod 'FBSDKCoreKit'\n"));
        assert!(manifest.contains("\npod 'FBSDKLoginKit'\n"));
    }

    #[test]
    fn test_toggle_comments_stay_either_way() {
        let off = render_ios_manifest(&PluginConfig::default());
        let on = render_ios_manifest(&PluginConfig {
            remote_config: true,
            messaging: true,
            storage: true,
            facebook_auth: true,
            google_auth: true,
            ..Default::default()
        });

        for manifest in [&off, &on] {
            assert!(manifest.contains("# Uncomment if you want to enable Remote Config"));
            assert!(manifest.contains("# Uncomment if you want to enable Google Authentication"));
        }
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_overwrites() {
        let tmp = tempfile::TempDir::new().unwrap();
        let paths = ProjectPaths::new(tmp.path().to_path_buf());

        let path = write_ios_manifest(&paths, &PluginConfig::default())
            .await
            .unwrap();
        assert!(path.ends_with("platforms/ios/Podfile"));
        let first = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(first.contains("#pod 'Firebase/Messaging'"));

        let config = PluginConfig {
            messaging: true,
            ..Default::default()
        };
        write_ios_manifest(&paths, &config).await.unwrap();
        let second = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(second.contains("\npod 'Firebase/Messaging'\n"));
    }
}
