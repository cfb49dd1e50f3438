use inquire::Confirm;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unable to read confirmation from the terminal")]
    #[diagnostic(code(pyseed::prompt::confirm))]
    Confirm(#[from] inquire::InquireError),
}

/// Asks the user to confirm the previewed writes. Declining leaves the
/// filesystem untouched.
pub fn apply_changes() -> Result<bool, PromptError> {
    let answer = Confirm::new("Write these files?")
        .with_default(true)
        .with_help_message("Existing files at these paths will be overwritten")
        .prompt()?;

    Ok(answer)
}
