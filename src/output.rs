use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::quiz::Question;

/// Writes the question bank as a JSON array.
///
/// The bank is serialized in full first, then written next to the target and
/// renamed over it, so a failed run never leaves a truncated file behind.
pub fn write_questions(path: &Path, questions: &[Question]) -> Result<()> {
    let json = serde_json::to_string(questions)?;

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, json.as_bytes()) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }

    log::info!("Wrote {} questions to {}", questions.len(), path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
