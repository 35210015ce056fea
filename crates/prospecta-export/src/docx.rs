use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Header, Paragraph, Pic, Run, RunFonts, Style, StyleType,
    Table, TableCell, TableRow,
};
use prospecta_core::models::report::{Report, SectionBody, TableGrid};
use tracing::info;

use crate::error::ExportError;
use crate::logo::LogoImage;
use crate::styles::{DocumentStyles, inches_to_emu};

/// Render an assembled report to DOCX bytes.
///
/// Layout:
/// - optional logo, centered, in a header shown on the first page only
/// - report title (`Title` style)
/// - per section: `Heading1` with the section title, then either a bordered
///   table or a single body paragraph
///
/// Table width is fixed by the header row. Body cells past that width are
/// dropped; short body rows leave their trailing cells empty.
pub fn generate_report_docx(
    report: &Report,
    styles: &DocumentStyles,
    logo: Option<&LogoImage>,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "Title", styles.title_size, styles))
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, styles));

    if let Some(logo) = logo {
        docx = docx.first_header(logo_header(logo, styles));
    }

    docx = docx.add_paragraph(heading_paragraph(&report.title, "Title"));

    for section in &report.sections {
        docx = docx.add_paragraph(heading_paragraph(&section.title, "Heading1"));
        docx = match &section.body {
            SectionBody::Table(grid) => docx.add_table(grid_table(grid, styles)),
            SectionBody::Paragraph(text) => docx.add_paragraph(body_paragraph(text, styles)),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    info!(
        sections = report.sections.len(),
        with_logo = logo.is_some(),
        bytes = bytes.len(),
        "report document packed"
    );

    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, styles: &DocumentStyles) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
        .fonts(RunFonts::new().ascii(&styles.heading_font))
}

fn heading_paragraph(text: &str, style_id: &str) -> Paragraph {
    Paragraph::new()
        .style(style_id)
        .add_run(Run::new().add_text(text))
}

fn logo_header(logo: &LogoImage, styles: &DocumentStyles) -> Header {
    let pic = Pic::new_with_dimensions(logo.png.clone(), logo.width_px, logo.height_px).size(
        inches_to_emu(styles.logo_width_inches),
        inches_to_emu(styles.logo_height_inches),
    );

    Header::new().add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_image(pic)),
    )
}

/// One paragraph; embedded newlines become line breaks.
fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut run = body_run(styles);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().align(AlignmentType::Left).add_run(run)
}

fn body_run(styles: &DocumentStyles) -> Run {
    Run::new()
        .fonts(RunFonts::new().ascii(&styles.body_font))
        .size(styles.body_size * 2)
}

fn grid_table(grid: &TableGrid, styles: &DocumentStyles) -> Table {
    let columns = grid.column_count();

    let mut rows = Vec::with_capacity(grid.rows().len());
    rows.push(table_row(grid.header(), columns, true, styles));
    for body_row in grid.body() {
        rows.push(table_row(body_row, columns, false, styles));
    }

    let column_width = styles.table_width_twips / columns.max(1);
    Table::new(rows).set_grid(vec![column_width; columns])
}

/// Exactly `columns` cells: extra values dropped, missing ones left empty.
fn table_row(values: &[String], columns: usize, header: bool, styles: &DocumentStyles) -> TableRow {
    let cells = (0..columns)
        .map(|i| {
            let mut run = body_run(styles);
            if let Some(value) = values.get(i) {
                run = run.add_text(value);
            }
            if header {
                run = run.bold();
            }
            TableCell::new().add_paragraph(Paragraph::new().add_run(run))
        })
        .collect();

    TableRow::new(cells)
}
