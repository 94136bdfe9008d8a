//! File intake: client-side type gate and the upload round trip.

use shared_types::Document;
use uuid::Uuid;
use wasm_bindgen::prelude::*;
use web_sys::{File, FormData};

use crate::api;

/// Notice shown when the chosen file is not a contract format we accept.
pub const UNSUPPORTED_FILE_NOTICE: &str = "Please upload a PDF or DOCX file";

/// Accept only PDF and Word MIME types, checked before any network call.
pub fn is_supported_mime(mime: &str) -> bool {
    mime.contains("pdf") || mime.contains("word")
}

pub fn is_supported_file(file: &File) -> bool {
    is_supported_mime(&file.type_())
}

/// Upload `file` and build the in-memory document from the response.
///
/// The returned document owns a fresh client-side identifier; clause ids
/// come from the backend untouched.
pub async fn upload_document(api_base: &str, file: &File) -> Result<Document, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob("file", file)?;

    let response = api::upload(api_base, &form).await?;

    Ok(Document {
        id: Uuid::new_v4().to_string(),
        summary: response.summary,
        clauses: response.clauses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_and_word_mimes_are_accepted() {
        assert!(is_supported_mime("application/pdf"));
        assert!(is_supported_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(is_supported_mime("application/msword"));
    }

    #[test]
    fn test_other_mimes_are_rejected() {
        assert!(!is_supported_mime("text/plain"));
        assert!(!is_supported_mime("image/png"));
        assert!(!is_supported_mime(""));
    }
}
