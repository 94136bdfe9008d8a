use serde::{Deserialize, Serialize};

/// Risk classification for a single clause.
///
/// The numeric order is fixed: high ranks before medium, medium before low,
/// and unclassified clauses sink to the bottom of any risk-ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl RiskLevel {
    /// Sort rank; ascending rank = descending severity.
    pub fn order(&self) -> u8 {
        match self {
            RiskLevel::High => 1,
            RiskLevel::Medium => 2,
            RiskLevel::Low => 3,
            RiskLevel::Unknown => 4,
        }
    }

    /// Uppercase label for badges ("HIGH", "MEDIUM", ...).
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "HIGH",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::Low => "LOW",
            RiskLevel::Unknown => "UNKNOWN",
        }
    }

    /// CSS class used by the list items and the detail badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "risk-high",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::Low => "risk-low",
            RiskLevel::Unknown => "risk-unknown",
        }
    }

    /// Parse a backend risk string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(RiskLevel::High),
            "medium" => Some(RiskLevel::Medium),
            "low" => Some(RiskLevel::Low),
            "unknown" => Some(RiskLevel::Unknown),
            _ => None,
        }
    }
}

/// One extracted unit of a legal document.
///
/// `id` is assigned by the backend and is unique and stable within the
/// parent [`Document`]; lookups by id must be unambiguous for the lifetime
/// of that document in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub risk: Option<RiskLevel>,
    #[serde(default)]
    pub preview: Option<String>,
}

impl Clause {
    /// Risk with the absent case folded to `Unknown` for display.
    pub fn risk_level(&self) -> RiskLevel {
        self.risk.unwrap_or(RiskLevel::Unknown)
    }
}

/// An analyzed document as held by the active session view.
///
/// Replaced wholesale on every upload, history load, or language switch;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub summary: String,
    pub clauses: Vec<Clause>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_order_is_total() {
        assert!(RiskLevel::High.order() < RiskLevel::Medium.order());
        assert!(RiskLevel::Medium.order() < RiskLevel::Low.order());
        assert!(RiskLevel::Low.order() < RiskLevel::Unknown.order());
    }

    #[test]
    fn test_risk_parse_roundtrip() {
        for risk in [
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::Low,
            RiskLevel::Unknown,
        ] {
            let parsed = RiskLevel::parse(&risk.label().to_lowercase());
            assert_eq!(parsed, Some(risk));
        }
        assert_eq!(RiskLevel::parse("severe"), None);
    }

    #[test]
    fn test_clause_deserializes_with_missing_optionals() {
        let clause: Clause =
            serde_json::from_str(r#"{"id": 3, "content": "Payment is due monthly."}"#).unwrap();
        assert_eq!(clause.id, 3);
        assert!(clause.title.is_none());
        assert!(clause.risk.is_none());
        assert_eq!(clause.risk_level(), RiskLevel::Unknown);
    }

    #[test]
    fn test_clause_deserializes_backend_risk_strings() {
        let clause: Clause = serde_json::from_str(
            r#"{"id": 0, "content": "x", "risk": "unknown", "preview": "short"}"#,
        )
        .unwrap();
        assert_eq!(clause.risk, Some(RiskLevel::Unknown));
        assert_eq!(clause.preview.as_deref(), Some("short"));
    }
}
