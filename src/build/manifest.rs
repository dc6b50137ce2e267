use serde::Deserialize;

/// Manifest format version this builder understands.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a build input directory.
///
/// Lists document files relative to the directory. Their order is the
/// document order in the snapshot, and so the ranking tiebreak.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}
