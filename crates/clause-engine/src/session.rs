//! Exclusively owned document state with generation-counted replacement.
//!
//! Exactly one `DocumentSession` backs the active view. Every supersession
//! (upload, history load, language switch) bumps the generation counter;
//! asynchronous completions capture the counter when they start and must
//! present it again to install their result. A batch whose token is stale
//! by the time it resolves is discarded instead of overwriting newer state.

use shared_types::Document;

use crate::error::EngineError;

/// Language the backend produces and the UI ships with.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq)]
struct TranslatedCopy {
    language: String,
    document: Document,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSession {
    original: Option<Document>,
    translated: Option<TranslatedCopy>,
    language: String,
    generation: u64,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self {
            original: None,
            translated: None,
            language: DEFAULT_LANGUAGE.to_string(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.generation
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_default_language(&self) -> bool {
        self.language == DEFAULT_LANGUAGE
    }

    /// Replace the active document wholesale (upload or history load).
    ///
    /// Drops any translated copy — it derived from the superseded document
    /// — and returns the new generation token.
    pub fn load_document(&mut self, document: Document) -> u64 {
        self.original = Some(document);
        self.translated = None;
        self.generation += 1;
        self.generation
    }

    /// Switch the active display language and return the token an in-flight
    /// translation batch must present to install its result.
    ///
    /// Switching back to the default language drops the translated copy
    /// immediately; no batch is expected.
    pub fn request_language(&mut self, language: &str) -> u64 {
        self.language = language.to_string();
        if self.is_default_language() {
            self.translated = None;
        } else if let Some(copy) = &self.translated {
            if copy.language != language {
                self.translated = None;
            }
        }
        self.generation += 1;
        self.generation
    }

    /// Install a translated document copy produced by the batch that
    /// captured `token`.
    ///
    /// Rejected when the token is stale (a newer upload or language switch
    /// superseded the batch) or when the language no longer matches the
    /// active one; the caller logs and drops the result.
    pub fn install_translation(
        &mut self,
        token: u64,
        language: &str,
        document: Document,
    ) -> Result<(), EngineError> {
        if !self.is_current(token) {
            return Err(EngineError::StaleGeneration {
                token,
                current: self.generation,
            });
        }
        if language != self.language {
            return Err(EngineError::LanguageMismatch {
                got: language.to_string(),
                active: self.language.clone(),
            });
        }
        self.translated = Some(TranslatedCopy {
            language: language.to_string(),
            document,
        });
        Ok(())
    }

    /// The document all lookups and rendering must run against: the
    /// translated copy when one is installed for the active language,
    /// otherwise the original.
    pub fn active_document(&self) -> Option<&Document> {
        if !self.is_default_language() {
            if let Some(copy) = &self.translated {
                if copy.language == self.language {
                    return Some(&copy.document);
                }
            }
        }
        self.original.as_ref()
    }

    /// The untranslated document as the backend produced it.
    pub fn original_document(&self) -> Option<&Document> {
        self.original.as_ref()
    }

    /// True while the active language is non-default but its translated
    /// copy has not been installed yet — per-field translation on selection
    /// bridges the gap.
    pub fn needs_field_translation(&self) -> bool {
        !self.is_default_language()
            && !matches!(&self.translated, Some(copy) if copy.language == self.language)
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Clause;

    fn document(id: &str) -> Document {
        Document {
            id: id.into(),
            summary: "summary".into(),
            clauses: vec![Clause {
                id: 0,
                title: None,
                content: "content".into(),
                summary: None,
                risk: None,
                preview: None,
            }],
        }
    }

    #[test]
    fn test_new_session_is_empty_default_language() {
        let session = DocumentSession::new();
        assert!(session.active_document().is_none());
        assert!(session.is_default_language());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_load_document_bumps_generation() {
        let mut session = DocumentSession::new();
        let first = session.load_document(document("a"));
        let second = session.load_document(document("b"));
        assert!(second > first);
        assert_eq!(session.active_document().unwrap().id, "b");
    }

    #[test]
    fn test_install_with_current_token_takes_effect() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        let token = session.request_language("es");

        let mut translated = document("a");
        translated.clauses[0].content = "contenido".into();
        session.install_translation(token, "es", translated).unwrap();

        assert_eq!(
            session.active_document().unwrap().clauses[0].content,
            "contenido"
        );
        assert!(!session.needs_field_translation());
    }

    #[test]
    fn test_stale_batch_is_discarded() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        let stale = session.request_language("es");
        let current = session.request_language("fr");

        let err = session
            .install_translation(stale, "es", document("a"))
            .unwrap_err();
        assert!(matches!(err, EngineError::StaleGeneration { .. }));

        // The French batch still installs.
        session
            .install_translation(current, "fr", document("a"))
            .unwrap();
        assert_eq!(session.language(), "fr");
        assert!(!session.needs_field_translation());
    }

    #[test]
    fn test_upload_supersedes_inflight_translation() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        let token = session.request_language("es");
        session.load_document(document("b"));

        assert!(session.install_translation(token, "es", document("a")).is_err());
        assert_eq!(session.active_document().unwrap().id, "b");
    }

    #[test]
    fn test_switch_back_to_default_restores_original() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        let token = session.request_language("es");
        let mut translated = document("a");
        translated.summary = "resumen".into();
        session.install_translation(token, "es", translated).unwrap();

        session.request_language(DEFAULT_LANGUAGE);
        assert_eq!(session.active_document().unwrap().summary, "summary");
        assert!(!session.needs_field_translation());
    }

    #[test]
    fn test_language_mismatch_is_rejected() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        let token = session.request_language("es");

        // Token still current, but the install claims the wrong language.
        let err = session
            .install_translation(token, "de", document("a"))
            .unwrap_err();
        assert!(matches!(err, EngineError::LanguageMismatch { .. }));
    }

    #[test]
    fn test_needs_field_translation_until_install() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        assert!(!session.needs_field_translation());

        let token = session.request_language("es");
        assert!(session.needs_field_translation());

        session
            .install_translation(token, "es", document("a"))
            .unwrap();
        assert!(!session.needs_field_translation());
    }

    #[test]
    fn test_active_document_degrades_to_original_before_install() {
        let mut session = DocumentSession::new();
        session.load_document(document("a"));
        session.request_language("es");
        // Batch not yet resolved: lookups run against the original.
        assert_eq!(session.active_document().unwrap().id, "a");
    }
}
