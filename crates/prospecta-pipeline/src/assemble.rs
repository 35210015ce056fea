use std::sync::Arc;

use prospecta_core::models::report::{Report, SectionBody};
use prospecta_core::models::section::{
    REPORT_SECTIONS, REPORT_TITLE, SECTION_ERROR_SENTINEL, Section,
};
use prospecta_export::docx::generate_report_docx;
use prospecta_export::logo::LogoImage;
use prospecta_export::markdown::normalize;
use prospecta_export::styles::DocumentStyles;
use prospecta_export::table::detect_table;
use prospecta_llm::section::generate_section;
use prospecta_llm::{GenerationSettings, TextGenerator};
use tracing::{info, warn};

use crate::error::PipelineError;

/// Builds market research reports from request context.
///
/// Sections are generated one at a time, in outline order. A section whose
/// generation fails is replaced by [`SECTION_ERROR_SENTINEL`]; it never stops
/// the remaining sections.
#[derive(Clone)]
pub struct ReportAssembler {
    generator: Arc<dyn TextGenerator>,
    settings: GenerationSettings,
    styles: DocumentStyles,
}

impl ReportAssembler {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        settings: GenerationSettings,
        styles: DocumentStyles,
    ) -> Self {
        Self {
            generator,
            settings,
            styles,
        }
    }

    /// Text for one section, or the sentinel if generation failed.
    pub async fn section_text(&self, section: &Section, context: &str) -> String {
        match generate_section(
            self.generator.as_ref(),
            &self.settings,
            section.instruction,
            context,
        )
        .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(section = section.title, error = %e, "section generation failed, using placeholder");
                SECTION_ERROR_SENTINEL.to_string()
            }
        }
    }

    /// Generate every section and collect them into a report model.
    pub async fn assemble_report(&self, context: &str) -> Report {
        let mut report = Report::new(REPORT_TITLE);

        for section in &REPORT_SECTIONS {
            let text = self.section_text(section, context).await;
            let body = section_body(&text);

            info!(
                section = section.title,
                table = matches!(body, SectionBody::Table(_)),
                "section assembled"
            );

            report.push_section(section.title, body);
        }

        report
    }

    /// Generate the report and render it to DOCX bytes.
    pub async fn assemble_docx(
        &self,
        context: &str,
        logo: Option<&LogoImage>,
    ) -> Result<Vec<u8>, PipelineError> {
        let report = self.assemble_report(context).await;
        self.render(&report, logo)
    }

    pub fn render(&self, report: &Report, logo: Option<&LogoImage>) -> Result<Vec<u8>, PipelineError> {
        Ok(generate_report_docx(report, &self.styles, logo)?)
    }
}

/// A table when the text holds one, otherwise the cleaned-up text.
pub fn section_body(text: &str) -> SectionBody {
    match detect_table(text) {
        Some(grid) => SectionBody::Table(grid),
        None => SectionBody::Paragraph(normalize(text)),
    }
}
