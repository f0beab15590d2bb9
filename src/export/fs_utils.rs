// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Make sure the export may write `path`.
///
/// A missing file, or `force`, is always fine. Otherwise the user is asked
/// on stdin; anything but "y"/"yes" cancels the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if ask_yes_no(&mut io::stdin().lock(), "Overwrite? [y/N]: ")? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' already exists and was not overwritten",
            path.display()
        )))
    }
}

/// Prompt on stdout and read one answer line from `input`.
pub(crate) fn ask_yes_no<R: BufRead>(input: &mut R, prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
