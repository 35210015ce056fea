use docx_rs::{DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild};
use tracing::info;

use crate::error::ExtractError;

/// Text of every top-level paragraph that is not blank, one per line.
///
/// Tables, headers and footers are not read.
pub fn extract_word_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Word(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    info!(paragraphs = paragraphs.len(), "extracted Word paragraphs");

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

/// Hyperlinks and tracked insertions carry their own runs.
fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            ParagraphChild::Insert(insert) => {
                for child in &insert.children {
                    if let InsertChild::Run(run) = child {
                        push_run_text(run, out);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}
