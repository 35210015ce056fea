use std::path::Path;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use jiff::Zoned;
use serde::Serialize;
use tracing::{debug, info, warn};

use prospecta_core::models::upload::UploadedFile;
use prospecta_core::report_files::report_download_url;
use prospecta_export::logo::LogoImage;
use prospecta_extract::context::{build_context, has_usable_text};
use prospecta_extract::{Extraction, TextExtractor};

use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::write_report;

/// Multipart fields read as uploads, in context order.
pub const UPLOAD_FIELDS: [&str; 3] = ["doc1", "doc2", "doc3"];

pub const NO_INPUT_MESSAGE: &str = "No valid input provided.";

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub download_url: String,
}

/// Generate a market research report from up to three uploads.
///
/// A request that is not multipart at all is treated like one without
/// files.
pub async fn generate_report(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let uploads = match multipart {
        Ok(mut multipart) => read_uploads(&mut multipart).await?,
        Err(rejection) => {
            debug!(%rejection, "request carried no multipart body");
            Default::default()
        }
    };

    let extractor = state.extractor.clone();
    let texts = tokio::task::spawn_blocking(move || extract_all(&extractor, &uploads)).await??;

    let context = build_context(texts);
    if !has_usable_text(&context) {
        return Err(ApiError::BadRequest(NO_INPUT_MESSAGE.to_string()));
    }

    info!(context_len = context.len(), "context assembled, generating report");

    let logo = load_logo(&state.config.logo_path()).await;
    let report = state.assembler.assemble_report(&context).await;

    let assembler = state.assembler.clone();
    let reports_dir = state.config.reports_dir();
    let filename = tokio::task::spawn_blocking(move || -> Result<String, ApiError> {
        let bytes = assembler.render(&report, logo.as_ref())?;
        Ok(write_report(&reports_dir, &bytes, &Zoned::now())?)
    })
    .await??;

    Ok(Json(GenerateResponse {
        download_url: report_download_url(&filename),
    }))
}

/// Collect the upload fields. The first occurrence of each field wins;
/// parts without a filename (plain form values) are ignored.
async fn read_uploads(
    multipart: &mut Multipart,
) -> Result<[Option<UploadedFile>; 3], ApiError> {
    let mut uploads: [Option<UploadedFile>; 3] = Default::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(slot) = field
            .name()
            .and_then(|name| UPLOAD_FIELDS.iter().position(|f| *f == name))
        else {
            continue;
        };

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        if uploads[slot].is_some() {
            continue;
        }

        let bytes = field.bytes().await?;
        debug!(field = UPLOAD_FIELDS[slot], %filename, size = bytes.len(), "upload received");
        uploads[slot] = Some(UploadedFile::new(filename, bytes.to_vec()));
    }

    Ok(uploads)
}

fn extract_all(
    extractor: &TextExtractor,
    uploads: &[Option<UploadedFile>],
) -> Result<Vec<String>, prospecta_extract::error::ExtractError> {
    uploads
        .iter()
        .flatten()
        .map(|file| extractor.extract(file).map(Extraction::into_text))
        .collect()
}

/// The branding image, if one is installed and readable.
async fn load_logo(path: &Path) -> Option<LogoImage> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no logo installed");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo unreadable, omitting header image");
            return None;
        }
    };

    match LogoImage::from_bytes(&bytes) {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "logo undecodable, omitting header image");
            None
        }
    }
}
