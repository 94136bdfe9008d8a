pub mod api;
pub mod types;

pub use api::{
    AskRequest, AskResponse, ChatEntry, ExportResponse, HistoryRecord, LanguagePreference,
    TranslateRequest, TranslateResponse, UiTranslationRequest, UiTranslationResponse,
    UploadResponse,
};
pub use types::{Clause, Document, RiskLevel};
