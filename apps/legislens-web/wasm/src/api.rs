//! HTTP calls to the analysis backend.
//!
//! Every function here is a suspension point; failures are returned to the
//! caller, which converts them to a user-visible notice or a silent
//! per-field fallback. Nothing is retried.

use js_sys::Array;
use shared_types::{
    AskRequest, AskResponse, ExportResponse, LanguagePreference, TranslateRequest,
    TranslateResponse, UiTranslationRequest, UiTranslationResponse, UploadResponse,
};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

async fn fetch_text(request: &Request) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or("No window")?;

    let response = JsFuture::from(window.fetch_with_request(request)).await?;
    let response: Response = response.dyn_into()?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "Request failed: {}",
            response.status()
        )));
    }

    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("Response body was not text"))
}

async fn get_json(url: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    fetch_text(&request).await
}

async fn post_json(url: &str, body: &str) -> Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    fetch_text(&request).await
}

fn parse<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, JsValue> {
    serde_json::from_str(body)
        .map_err(|e| JsValue::from_str(&format!("Malformed response: {}", e)))
}

/// Upload a contract file as multipart form data.
pub async fn upload(api_base: &str, form: &FormData) -> Result<UploadResponse, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form);

    let request = Request::new_with_str_and_init(&format!("{}/upload", api_base), &opts)?;
    let body = fetch_text(&request).await?;
    parse(&body)
}

/// Ask a question about the active document.
pub async fn ask(api_base: &str, request: &AskRequest) -> Result<AskResponse, JsValue> {
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let response = post_json(&format!("{}/ask", api_base), &body).await?;
    parse(&response)
}

/// Translate a single text to the target language.
pub async fn translate(
    api_base: &str,
    text: &str,
    target_language: &str,
) -> Result<TranslateResponse, JsValue> {
    let request = TranslateRequest {
        text: text.to_string(),
        target_language: target_language.to_string(),
    };
    let body = serde_json::to_string(&request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let response = post_json(&format!("{}/translate", api_base), &body).await?;
    parse(&response)
}

/// Translate a single text, falling back silently to the original.
///
/// One attempt only; a failure is logged and the original-language text is
/// used, per the partial-translation policy. Empty text short-circuits
/// without a network call.
pub async fn translate_or_original(api_base: &str, text: &str, target_language: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    match translate(api_base, text, target_language).await {
        Ok(response) => response.translated_text,
        Err(err) => {
            web_sys::console::warn_1(&format!("Translation fell back: {:?}", err).into());
            text.to_string()
        }
    }
}

/// Translate up to three display fields concurrently and join the results.
///
/// The three requests are issued at once; the join waits for all of them,
/// and each field independently degrades to its original text, so a single
/// failure never blocks or blanks the other two.
pub async fn translate_fields(
    api_base: &str,
    fields: [String; 3],
    target_language: &str,
) -> [String; 3] {
    let promises = Array::new();
    for field in &fields {
        let api_base = api_base.to_string();
        let text = field.clone();
        let target = target_language.to_string();
        promises.push(&future_to_promise(async move {
            Ok(JsValue::from_str(
                &translate_or_original(&api_base, &text, &target).await,
            ))
        }));
    }

    match JsFuture::from(js_sys::Promise::all(&promises)).await {
        Ok(joined) => {
            let joined: Array = joined.unchecked_into();
            let mut out = fields.clone();
            for (i, slot) in out.iter_mut().enumerate() {
                if let Some(text) = joined.get(i as u32).as_string() {
                    *slot = text;
                }
            }
            out
        }
        // The per-field futures never reject, so this is defensive only.
        Err(_) => fields,
    }
}

/// Translate the named UI strings in bulk.
pub async fn translate_ui(
    api_base: &str,
    strings: HashMap<String, String>,
    target_language: &str,
) -> Result<HashMap<String, String>, JsValue> {
    let request = UiTranslationRequest {
        strings,
        target_language: target_language.to_string(),
    };
    let body = serde_json::to_string(&request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let response = post_json(&format!("{}/translate_ui", api_base), &body).await?;
    let parsed: UiTranslationResponse = parse(&response)?;
    Ok(parsed.strings)
}

/// Request the PDF report for the active session.
pub async fn export_pdf(api_base: &str) -> Result<ExportResponse, JsValue> {
    let response = post_json(&format!("{}/export_pdf", api_base), "{}").await?;
    parse(&response)
}

/// Fetch the session's previously chosen display language.
pub async fn language_preference(api_base: &str) -> Result<LanguagePreference, JsValue> {
    let response = get_json(&format!("{}/language_preference", api_base)).await?;
    parse(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result: Result<AskResponse, _> = serde_json::from_str("not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_ask_response() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"answer": "Thirty days."}"#).unwrap();
        assert_eq!(parsed.answer, "Thirty days.");
    }

    #[test]
    fn test_parse_export_response() {
        let parsed: ExportResponse =
            serde_json::from_str(r#"{"pdf_data": "JVBERg==", "filename": "report.pdf"}"#).unwrap();
        assert_eq!(parsed.filename, "report.pdf");
    }
}
