use crate::{
    emitter::{self, EmitterError},
    manifest::Manifest,
    preview::preview_as_tree,
    prompt::{self, PromptError},
    vfs::VirtualFS,
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PyseedError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Emitter(#[from] EmitterError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] PromptError),
}

/// Previews the standard project files and, once confirmed, writes them
/// into `destination` (created if missing).
///
/// With `assume_yes` the confirmation prompt is skipped, which is the
/// mode scripts and CI should use.
///
/// # Errors
///
/// Returns a [`PyseedError`] if:
///
/// - The confirmation prompt fails or is interrupted.
/// - The destination directory cannot be created.
/// - Any file cannot be written.
pub fn init_project(destination: &str, assume_yes: bool) -> Result<(), PyseedError> {
    let manifest = Manifest::standard();

    let vfs = VirtualFS::from_manifest(&manifest);

    let destination_path = PathBuf::from(destination);

    preview_as_tree(&vfs, &destination_path);

    if !assume_yes && !prompt::apply_changes()? {
        log::debug!("user declined, nothing written");

        return Ok(());
    }

    emitter::try_emit(&vfs, &destination_path)?;

    Ok(())
}

/// Prints the files this tool would write, without touching the
/// filesystem.
pub fn list_files() {
    let manifest = Manifest::standard();

    let vfs = VirtualFS::from_manifest(&manifest);

    preview_as_tree(&vfs, &PathBuf::from("."));
}
