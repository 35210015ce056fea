use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use docx_rs::{BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run};
use image::{DynamicImage, ImageFormat, RgbImage};
use lopdf::dictionary;
use lopdf::{Document, Object, Stream};

use prospecta_core::models::upload::{DocumentFormat, UploadedFile};
use prospecta_extract::error::ExtractError;
use prospecta_extract::{Extraction, OcrEngine, TextExtractor};

/// OCR stub that returns fixed text and counts how often it was asked.
struct CannedOcr {
    text: &'static str,
    calls: AtomicUsize,
}

impl CannedOcr {
    fn new(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            text,
            calls: AtomicUsize::new(0),
        })
    }
}

impl OcrEngine for CannedOcr {
    fn recognize(&self, _image: &DynamicImage) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.to_string())
    }
}

fn encoded_image(format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).expect("encode test image");
    buf.into_inner()
}

fn word_document(paragraphs: &[&str]) -> Vec<u8> {
    pack_docx(
        paragraphs
            .iter()
            .map(|text| Paragraph::new().add_run(Run::new().add_text(*text)))
            .collect(),
    )
}

fn pack_docx(paragraphs: Vec<Paragraph>) -> Vec<u8> {
    let mut docx = Docx::new();
    for paragraph in paragraphs {
        docx = docx.add_paragraph(paragraph);
    }
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).expect("pack test docx");
    buf.into_inner()
}

fn link(anchor: &str, text: &str) -> Hyperlink {
    Hyperlink::new(anchor, HyperlinkType::Anchor).add_run(Run::new().add_text(text))
}

/// A PDF with one line of Helvetica text per page.
fn pdf_document(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = pages
        .iter()
        .map(|text| {
            let content = format!("BT /F1 12 Tf 100 700 Td ({text}) Tj ET");
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Contents" => content_id,
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => font_id },
                },
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save test pdf");
    buf
}

#[test]
fn image_uploads_go_through_ocr() {
    let ocr = CannedOcr::new("Widgets Inc sells widgets.");
    let extractor = TextExtractor::new(ocr.clone());

    for (name, format) in [
        ("scan.png", ImageFormat::Png),
        ("photo.JPG", ImageFormat::Jpeg),
        ("photo.jpeg", ImageFormat::Jpeg),
    ] {
        let file = UploadedFile::new(name, encoded_image(format));
        let extraction = extractor.extract(&file).expect("image extraction");
        assert_eq!(
            extraction,
            Extraction::Text {
                format: DocumentFormat::Image,
                text: "Widgets Inc sells widgets.".to_string(),
            },
            "{name}"
        );
    }

    assert_eq!(ocr.calls.load(Ordering::SeqCst), 3);
}

#[test]
fn undecodable_image_is_an_error_and_skips_ocr() {
    let ocr = CannedOcr::new("unused");
    let extractor = TextExtractor::new(ocr.clone());
    let file = UploadedFile::new("scan.png", b"not a png".to_vec());

    let err = extractor.extract(&file).expect_err("garbage image");
    assert!(matches!(err, ExtractError::Image(_)), "got {err:?}");
    assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn word_uploads_keep_non_blank_paragraphs() {
    let extractor = TextExtractor::new(CannedOcr::new("unused"));
    let bytes = word_document(&["Widgets Inc", "   ", "sells widgets.", ""]);
    let file = UploadedFile::new("brief.docx", bytes);

    let extraction = extractor.extract(&file).expect("docx extraction");
    assert_eq!(
        extraction,
        Extraction::Text {
            format: DocumentFormat::Word,
            text: "Widgets Inc\nsells widgets.".to_string(),
        }
    );
}

#[test]
fn word_hyperlinks_tabs_and_breaks_keep_their_text() {
    let extractor = TextExtractor::new(CannedOcr::new("unused"));
    let bytes = pack_docx(vec![
        Paragraph::new()
            .add_run(Run::new().add_text("Visit "))
            .add_hyperlink(link("acme", "Acme Corp")),
        Paragraph::new().add_hyperlink(link("widgets", "Widgets Inc sells widgets.")),
        Paragraph::new().add_run(
            Run::new()
                .add_text("Q1")
                .add_tab()
                .add_text("Q2")
                .add_break(BreakType::TextWrapping)
                .add_text("Q3"),
        ),
    ]);
    let file = UploadedFile::new("brief.docx", bytes);

    let text = extractor.extract(&file).expect("docx extraction").into_text();
    assert_eq!(text, "Visit Acme Corp\nWidgets Inc sells widgets.\nQ1\tQ2\nQ3");
}

#[test]
fn pdf_pages_are_read_in_order_on_separate_lines() {
    let extractor = TextExtractor::new(CannedOcr::new("unused"));
    let file = UploadedFile::new("Deck.PDF", pdf_document(&["Alpha market", "Beta segment"]));

    let extraction = extractor.extract(&file).expect("pdf extraction");
    let Extraction::Text { format, text } = extraction else {
        panic!("pdf should be supported");
    };
    assert_eq!(format, DocumentFormat::Pdf);

    let alpha = text.find("Alpha market").expect("first page text");
    let beta = text.find("Beta segment").expect("second page text");
    assert!(alpha < beta, "pages out of order: {text:?}");
    assert!(text[alpha..beta].contains('\n'), "pages not on separate lines: {text:?}");
}

#[test]
fn corrupt_word_upload_is_an_error() {
    let extractor = TextExtractor::new(CannedOcr::new("unused"));
    let file = UploadedFile::new("brief.DOC", b"\xd0\xcf\x11\xe0 legacy binary".to_vec());

    let err = extractor.extract(&file).expect_err("not a docx archive");
    assert!(matches!(err, ExtractError::Word(_)), "got {err:?}");
}

#[test]
fn corrupt_pdf_upload_is_an_error() {
    let extractor = TextExtractor::new(CannedOcr::new("unused"));
    let file = UploadedFile::new("deck.pdf", b"definitely not a pdf".to_vec());

    let err = extractor.extract(&file).expect_err("not a pdf");
    assert!(matches!(err, ExtractError::Pdf(_)), "got {err:?}");
}

#[test]
fn unknown_extensions_are_unsupported_not_errors() {
    let ocr = CannedOcr::new("unused");
    let extractor = TextExtractor::new(ocr.clone());

    for name in ["notes.txt", "sheet.xlsx", "image.gif", "no_extension"] {
        let file = UploadedFile::new(name, b"Widgets Inc sells widgets.".to_vec());
        let extraction = extractor.extract(&file).expect("unsupported is not an error");
        assert_eq!(extraction, Extraction::Unsupported, "{name}");
        assert_eq!(extraction.into_text(), "");
    }

    assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
}
