//! Doxygen invocation.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Run `program <doxyfile>` to completion.
///
/// A non-zero exit is only logged: whatever XML doxygen managed to write is
/// still parsed, and a missing index surfaces as a parse error later.
pub fn run_doxygen(program: &str, doxyfile: &Path) -> Result<ExitStatus> {
    tracing::info!("running {} {}", program, doxyfile.display());
    let status = Command::new(program)
        .arg(doxyfile)
        .status()
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;
    if !status.success() {
        tracing::warn!(%status, "{} exited unsuccessfully", program);
    }
    Ok(status)
}
