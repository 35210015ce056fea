//! Writing finished reports into the static tree.

use std::io::{ErrorKind, Write};
use std::path::Path;

use jiff::Zoned;
use prospecta_core::report_files::{report_filename, report_filename_with_suffix};
use tempfile::Builder;
use tracing::info;

/// Upper bound on same-second collisions before giving up.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Write `bytes` to a fresh report file in `dir` and return its filename.
///
/// The bytes are staged in a hidden temp file and only moved to the report
/// name once fully written, so a failed write never leaves a truncated
/// report behind. The move never replaces an existing file: when the name is
/// taken the report gets a `_2`, `_3`, ... suffix.
pub fn write_report(dir: &Path, bytes: &[u8], at: &Zoned) -> std::io::Result<String> {
    let mut staged = Builder::new()
        .prefix(".report-")
        .suffix(".partial")
        .tempfile_in(dir)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;

    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let filename = if attempt == 1 {
            report_filename(at)
        } else {
            report_filename_with_suffix(at, attempt)
        };
        let path = dir.join(&filename);

        match staged.persist_noclobber(&path) {
            Ok(_) => {
                info!(path = %path.display(), bytes = bytes.len(), "report written");
                return Ok(filename);
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => staged = e.file,
            Err(e) => return Err(e.error),
        }
    }

    Err(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("no free report filename in {} after {MAX_NAME_ATTEMPTS} attempts", dir.display()),
    ))
}
