use crate::error::CoreError;

/// An assembled report, ready to be rendered to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, title: impl Into<String>, body: SectionBody) {
        self.sections.push(ReportSection {
            title: title.into(),
            body,
        });
    }

    pub fn section_titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: String,
    pub body: SectionBody,
}

/// How a section's generated text is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Table(TableGrid),
    Paragraph(String),
}

/// Rows of cell strings detected in generated text. The first row is the
/// header. Rows may have differing lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Result<Self, CoreError> {
        match rows.first() {
            None => Err(CoreError::EmptyGrid),
            Some(header) if header.is_empty() => Err(CoreError::EmptyHeader),
            Some(_) => Ok(Self { rows }),
        }
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn body(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// Column count of the rendered table, fixed by the header row.
    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
