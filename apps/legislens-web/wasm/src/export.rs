//! PDF report download: decode the export payload and hand it to the
//! browser's save action.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Decode the collaborator's base64 `pdf_data` field.
pub fn decode_pdf_data(pdf_data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(pdf_data)
}

/// Trigger a browser-native save of `bytes` under `filename`.
///
/// Creates a transient object URL on an invisible anchor, clicks it, and
/// revokes the URL again.
pub fn save_as(bytes: &[u8], filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let array = Uint8Array::new_with_length(bytes.len() as u32);
    array.copy_from(bytes);
    let parts = Array::of1(&array);

    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url)?;
    Ok(())
}
