use crate::error::{GenerateError, GenerateResult};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read the instruction document as raw UTF-8 text.
///
/// The content is returned untouched: no trimming, no parsing. A missing file
/// reports the directory it was expected in.
pub async fn read_instructions(path: &Path) -> GenerateResult<String> {
    debug!("Reading instructions from {:?}", path);

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            not_found(path)
        } else {
            GenerateError::InstructionsUnreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if content.trim().is_empty() {
        warn!("Instruction file {} is empty", path.display());
    }
    debug!("Read {} bytes of instructions", content.len());

    Ok(content)
}

fn not_found(path: &Path) -> GenerateError {
    let full = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let file = full
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let dir = full.parent().map(Path::to_path_buf).unwrap_or_default();

    GenerateError::InstructionsNotFound { file, dir }
}
