//! Build-hook installation for the Android google-services.json copy step

use crate::project::ProjectPaths;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// File name of the generated hook, inside `hooks/after-prepare/`
pub const HOOK_FILE: &str = "firebase-copy-google-services.js";

/// The script body. Run by the build pipeline after the prepare stage, not
/// by this tool: it copies the project's google-services.json into the
/// built Android platform directory when both the source file and the
/// destination directory exist, and silently does nothing otherwise.
const HOOK_SCRIPT: &str = r#"
var path = require("path");
var fs = require("fs");

module.exports = function() {

    var sourceGoogleJson = path.join(__dirname, "..", "..", "app", "App_Resources", "Android", "google-services.json");
    var destinationGoogleJson = path.join(__dirname, "..", "..", "platforms", "android", "google-services.json");
    if (fs.existsSync(sourceGoogleJson) && fs.existsSync(path.dirname(destinationGoogleJson))) {
        console.log("Copy " + sourceGoogleJson + " to " + destinationGoogleJson + ".");
        fs.writeFileSync(destinationGoogleJson, fs.readFileSync(sourceGoogleJson));
    }
};
"#;

/// Install the after-prepare hook, creating `hooks/after-prepare/` if
/// needed and overwriting any previous script. Idempotent: running it
/// twice leaves a single file with the fixed content.
pub async fn install_google_services_hook(paths: &ProjectPaths) -> Result<PathBuf> {
    let dir = paths.after_prepare_dir();
    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let script_path = dir.join(HOOK_FILE);
    fs::write(&script_path, HOOK_SCRIPT)
        .await
        .with_context(|| format!("Failed to write file: {}", script_path.display()))?;

    Ok(script_path)
}
