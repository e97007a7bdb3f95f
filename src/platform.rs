//! Showing output files in the system file manager

use std::path::Path;
use std::process::Command;
use crate::error::{PhidelityError, Result};

/// Program and arguments that reveal `path` on this platform.
pub fn reveal_command(path: &Path) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec!["-R".to_string(), path.display().to_string()])
    } else if cfg!(target_os = "windows") {
        ("explorer", vec![format!("/select,{}", path.display())])
    } else {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        ("xdg-open", vec![dir.display().to_string()])
    }
}

pub fn reveal_in_file_manager(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(PhidelityError::io(format!("Cannot reveal missing file: {}", path.display())));
    }

    let (program, args) = reveal_command(path);
    launch(program, &args)
}

/// Run `program` to completion, failing on a non-zero exit.
fn launch(program: &str, args: &[String]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| PhidelityError::io(format!("Failed to launch {}: {}", program, e)))?;

    // explorer.exe exits with 1 after a successful /select.
    if !status.success() && !cfg!(target_os = "windows") {
        return Err(PhidelityError::io(format!("{} exited with {}", program, status)));
    }

    Ok(())
}
