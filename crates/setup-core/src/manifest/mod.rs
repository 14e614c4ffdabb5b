//! Platform dependency manifests, regenerated from the answer set on every run
//!
//! Each manifest is a fixed frame plus a table of conditional dependency
//! groups. A group's lines are emitted verbatim when its service flag is
//! set and prefixed with the platform's comment marker when it is not, so
//! the generated file always lists every supported service.

mod android;
mod ios;

pub use android::{render_android_manifest, write_android_manifest, ANDROID_MANIFEST_FILE};
pub use ios::{render_ios_manifest, write_ios_manifest, IOS_MANIFEST_FILE};

use crate::config::QuestionKey;

/// One optional dependency block: a leading comment explaining the toggle,
/// then the dependency line(s) gated by `flag`.
pub(crate) struct DependencyGroup {
    pub flag: QuestionKey,
    pub header: &'static str,
    pub lines: &'static [&'static str],
}
