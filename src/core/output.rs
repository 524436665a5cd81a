use crate::error::{GenerateError, GenerateResult};
use std::io::Write;

/// Write the manifest verbatim followed by a single newline, then flush.
pub fn write_manifest<W: Write>(writer: &mut W, manifest: &str) -> GenerateResult<()> {
    writeln!(writer, "{manifest}").map_err(GenerateError::Output)?;
    writer.flush().map_err(GenerateError::Output)
}
