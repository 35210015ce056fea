/// Document styling configuration for generated reports.
#[derive(Debug, Clone)]
pub struct DocumentStyles {
    /// Font for body text and table cells (e.g. "Calibri").
    pub body_font: String,

    /// Font for the title and section headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Report title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading1_size: usize,

    /// Width of the first-page header logo in inches.
    pub logo_width_inches: f64,

    /// Height of the first-page header logo in inches.
    pub logo_height_inches: f64,

    /// Total table width in twentieths of a point.
    pub table_width_twips: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri Light".to_string(),
            body_size: 11,
            title_size: 26,
            heading1_size: 16,
            logo_width_inches: 1.73,
            logo_height_inches: 0.83,
            table_width_twips: 9000,
        }
    }
}

/// English Metric Units per inch, as used by DrawingML extents.
const EMU_PER_INCH: f64 = 914_400.0;

pub(crate) fn inches_to_emu(inches: f64) -> u32 {
    (inches * EMU_PER_INCH).round() as u32
}
