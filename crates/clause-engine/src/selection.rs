//! Selection state and detail projection.
//!
//! The projector always re-derives detail fields from the in-memory
//! document, never from text already rendered — the rendered copy may have
//! been overwritten by a translation pass.

use shared_types::{Clause, Document, RiskLevel};

use crate::error::EngineError;

/// Placeholder shown when a clause carries no plain-language summary.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// Which clause, if any, the detail panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Unselected,
    Selected(u32),
}

/// Display-ready projection of one clause, all fallbacks resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ClauseDisplay {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub risk: RiskLevel,
}

/// Title with the synthesized "Clause N" fallback (1-based position).
pub fn display_title(clause: &Clause) -> String {
    match clause.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!("Clause {}", clause.id + 1),
    }
}

/// Resolve every display field of a clause through its ordered fallback
/// chain: title → "Clause N", summary → placeholder, risk → unknown.
pub fn display_fields(clause: &Clause) -> ClauseDisplay {
    let summary = match clause.summary.as_deref() {
        Some(summary) if !summary.is_empty() => summary.to_string(),
        _ => NO_SUMMARY_PLACEHOLDER.to_string(),
    };

    ClauseDisplay {
        id: clause.id,
        title: display_title(clause),
        summary,
        content: clause.content.clone(),
        risk: clause.risk_level(),
    }
}

/// Tracks the active clause and projects it against whichever document is
/// currently authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionProjector {
    selection: Selection,
}

impl SelectionProjector {
    pub fn new() -> Self {
        Self {
            selection: Selection::Unselected,
        }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_id(&self) -> Option<u32> {
        match self.selection {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id),
        }
    }

    /// Select `id` and project its display fields from `document`.
    ///
    /// A lookup miss (a stale id referencing a superseded document) leaves
    /// the previous selection in place and reports `ClauseNotFound`; the
    /// caller logs it and keeps the panel untouched. The selection state
    /// only ever names a clause the panel actually displays.
    pub fn select(
        &mut self,
        document: &Document,
        id: u32,
    ) -> Result<ClauseDisplay, EngineError> {
        let clause = document
            .clauses
            .iter()
            .find(|clause| clause.id == id)
            .ok_or(EngineError::ClauseNotFound(id))?;

        self.selection = Selection::Selected(id);
        Ok(display_fields(clause))
    }

    /// Re-project the current selection against a new authoritative
    /// document, e.g. after a translated copy replaced the original.
    pub fn reproject(&self, document: &Document) -> Option<ClauseDisplay> {
        let id = self.selected_id()?;
        document
            .clauses
            .iter()
            .find(|clause| clause.id == id)
            .map(display_fields)
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Unselected;
    }
}

impl Default for SelectionProjector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn document() -> Document {
        Document {
            id: "doc-1".into(),
            summary: "Overall summary".into(),
            clauses: vec![
                Clause {
                    id: 0,
                    title: Some("Payment".into()),
                    content: "Rent is due on the first.".into(),
                    summary: Some("Pay monthly.".into()),
                    risk: Some(RiskLevel::Low),
                    preview: None,
                },
                Clause {
                    id: 1,
                    title: None,
                    content: "Tenant waives all notice.".into(),
                    summary: None,
                    risk: None,
                    preview: None,
                },
            ],
        }
    }

    #[test]
    fn test_select_projects_own_fields() {
        let doc = document();
        let mut projector = SelectionProjector::new();

        let display = projector.select(&doc, 0).unwrap();
        assert_eq!(display.title, "Payment");
        assert_eq!(display.summary, "Pay monthly.");
        assert_eq!(display.content, "Rent is due on the first.");
        assert_eq!(display.risk, RiskLevel::Low);
        assert_eq!(projector.selection(), Selection::Selected(0));
    }

    #[test]
    fn test_select_applies_field_fallbacks() {
        let doc = document();
        let mut projector = SelectionProjector::new();

        let display = projector.select(&doc, 1).unwrap();
        assert_eq!(display.title, "Clause 2");
        assert_eq!(display.summary, NO_SUMMARY_PLACEHOLDER);
        assert_eq!(display.risk, RiskLevel::Unknown);
    }

    #[test]
    fn test_lookup_miss_preserves_previous_selection() {
        let doc = document();
        let mut projector = SelectionProjector::new();
        projector.select(&doc, 0).unwrap();

        let err = projector.select(&doc, 99).unwrap_err();
        assert_eq!(err, EngineError::ClauseNotFound(99));
        assert_eq!(projector.selection(), Selection::Selected(0));
    }

    #[test]
    fn test_lookup_miss_from_unselected_stays_unselected() {
        let doc = document();
        let mut projector = SelectionProjector::new();

        assert!(projector.select(&doc, 42).is_err());
        assert_eq!(projector.selection(), Selection::Unselected);
    }

    #[test]
    fn test_reselect_is_always_legal() {
        let doc = document();
        let mut projector = SelectionProjector::new();

        projector.select(&doc, 0).unwrap();
        projector.select(&doc, 1).unwrap();
        assert_eq!(projector.selection(), Selection::Selected(1));
    }

    #[test]
    fn test_reproject_follows_new_document() {
        let doc = document();
        let mut projector = SelectionProjector::new();
        projector.select(&doc, 1).unwrap();

        let mut translated = doc.clone();
        translated.clauses[1].content = "El inquilino renuncia a todo aviso.".into();

        let display = projector.reproject(&translated).unwrap();
        assert_eq!(display.content, "El inquilino renuncia a todo aviso.");
    }

    #[test]
    fn test_reproject_unselected_is_none() {
        let projector = SelectionProjector::new();
        assert!(projector.reproject(&document()).is_none());
    }

    #[test]
    fn test_empty_title_falls_back() {
        let clause = Clause {
            id: 4,
            title: Some(String::new()),
            content: String::new(),
            summary: Some(String::new()),
            risk: None,
            preview: None,
        };
        let display = display_fields(&clause);
        assert_eq!(display.title, "Clause 5");
        assert_eq!(display.summary, NO_SUMMARY_PLACEHOLDER);
    }
}
