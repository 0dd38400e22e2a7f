use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Refuse to clobber an existing output unless `force` or the user agrees.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if confirm_overwrite(io::stdin().lock())? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(format!(
        "{} left untouched; pass --force to overwrite",
        path.display()
    )))
}

/// Ask on stdout, read one answer line. Only `y` / `yes` count as consent.
fn confirm_overwrite<R: BufRead>(mut input: R) -> AppResult<bool> {
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

