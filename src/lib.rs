//! Writes the standard Python tooling files (`requirements.txt`,
//! `.pre-commit-config.yaml`, `pyproject.toml`) into a destination
//! directory. Contents are fixed at compile time; the whole file set is
//! staged in memory, previewed, and then written in one pass.
pub mod api;
pub mod emitter;
pub mod errors;
pub mod manifest;
pub mod preview;
pub mod prompt;
pub mod vfs;
