use crate::manifest::Manifest;
use std::path::PathBuf;

/// A file staged in memory before being written to disk.
#[derive(Debug, Clone)]
pub struct VirtualEntry {
    /// Path relative to the destination root.
    pub destination: PathBuf,
    /// Contents written verbatim.
    pub content: String,
}
/// The full set of [`VirtualEntry`] values queued up for one write pass.
#[derive(Debug, Clone)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let entries = manifest
            .0
            .iter()
            .map(|(path, content)| VirtualEntry {
                destination: PathBuf::from(path),
                content: (*content).to_string(),
            })
            .collect();

        Self { entries }
    }
}
