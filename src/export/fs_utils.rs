// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;

/// An existing output file is replaced only with `force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        warning(format!("Overwriting '{}'.", path.display()));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "'{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
