//! Report file naming conventions.
//!
//! Pure string functions. These define where generated reports live inside
//! the static tree and the URL path they are downloaded from.

use jiff::Zoned;

/// Directory, relative to the static root, that holds generated reports.
pub const REPORTS_DIR: &str = "reports";

/// Branding image, relative to the static root.
pub const LOGO_FILE: &str = "logo.png";

/// URL prefix under which the static root is served.
pub const STATIC_URL_PREFIX: &str = "/static";

/// `market_research_<YYYYMMDDHHMMSS>.docx` for the given wall-clock time.
pub fn report_filename(at: &Zoned) -> String {
    format!("market_research_{}.docx", at.strftime("%Y%m%d%H%M%S"))
}

/// Filename used when `report_filename(at)` is already taken.
///
/// `attempt` starts at 2: the first retry is `market_research_<ts>_2.docx`.
pub fn report_filename_with_suffix(at: &Zoned, attempt: u32) -> String {
    format!(
        "market_research_{}_{attempt}.docx",
        at.strftime("%Y%m%d%H%M%S")
    )
}

/// Relative download URL for a report file.
pub fn report_download_url(filename: &str) -> String {
    format!("{STATIC_URL_PREFIX}/{REPORTS_DIR}/{filename}")
}
