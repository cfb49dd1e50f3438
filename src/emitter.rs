use crate::{
    errors::{FileOperation, IoError},
    vfs::VirtualFS,
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EmitterError {
    #[error("I/O error while writing project files")]
    #[diagnostic(code(pyseed::emitter::io))]
    Io(#[from] IoError),
}

/// Writes every staged entry under `destination`, creating the
/// destination directory first if it does not exist.
///
/// Files are written sequentially and overwrite whatever is already at
/// their path. There is no rollback: if a write fails partway through,
/// files from earlier iterations stay on disk and the error surfaces to
/// the caller naming the path that failed.
pub fn try_emit(vfs: &VirtualFS, destination: &Path) -> Result<(), EmitterError> {
    if !destination.as_os_str().is_empty() {
        create_directory(destination)?;
    }

    for entry in &vfs.entries {
        let final_path = destination.join(&entry.destination);

        write_file(&final_path, &entry.content)?;
    }

    Ok(())
}

fn create_directory(path: &Path) -> Result<(), EmitterError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("ensured directory: {}", path.display());

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), EmitterError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Manifest, PYPROJECT_TOML, REQUIREMENTS_TXT};

    fn staged() -> VirtualFS {
        VirtualFS::from_manifest(&Manifest::standard())
    }

    #[test]
    fn emits_all_files_into_an_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("project");

        try_emit(&staged(), &destination).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(&destination)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![".pre-commit-config.yaml", "pyproject.toml", "requirements.txt"]
        );
        assert_eq!(
            std::fs::read_to_string(destination.join("requirements.txt")).unwrap(),
            REQUIREMENTS_TXT
        );
    }

    #[test]
    fn overwrites_a_pre_existing_file() {
        let dir = tempfile::tempdir().unwrap();

        std::fs::write(dir.path().join("pyproject.toml"), "[tool.flake8]\n").unwrap();

        try_emit(&staged(), dir.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("pyproject.toml")).unwrap(),
            PYPROJECT_TOML
        );
    }

    #[test]
    fn fails_when_destination_cannot_be_created() {
        let dir = tempfile::tempdir().unwrap();
        let occupied = dir.path().join("occupied");

        std::fs::write(&occupied, "not a directory").unwrap();

        let result = try_emit(&staged(), &occupied);

        assert!(result.is_err());
    }
}
