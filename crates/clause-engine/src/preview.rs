//! Preview derivation for clauses the backend sent without one.
//!
//! Only a fallback: an externally supplied, non-empty `preview` field
//! always takes precedence and this function is never invoked for it.

/// Longest preview emitted, counting the ellipsis.
const MAX_PREVIEW_CHARS: usize = 100;

/// A sentence fragment must beat this length to count as meaningful.
const MEANINGFUL_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Derive a short preview from full clause text.
///
/// Whitespace runs collapse to single spaces, the text splits on `.` into
/// sentence fragments, and the first fragment longer than 20 characters
/// wins (falling back to the first fragment outright). Fragments longer
/// than 100 characters are cut to 97 plus an ellipsis; shorter fragments
/// get an ellipsis only when the full text continues past them.
///
/// Empty or whitespace-only input yields an empty string — the caller
/// renders a static placeholder instead.
pub fn synthesize_preview(content: &str) -> String {
    let normalized = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return String::new();
    }

    // Fragments are not trimmed: the space after a period counts toward
    // the meaningful-length test, matching the rendered text.
    let fragments: Vec<&str> = normalized.split('.').collect();
    let selected = fragments
        .iter()
        .copied()
        .find(|fragment| fragment.chars().count() > MEANINGFUL_CHARS)
        .unwrap_or(fragments[0]);

    let selected_chars = selected.chars().count();
    if selected_chars > MAX_PREVIEW_CHARS {
        let cut: String = selected
            .chars()
            .take(MAX_PREVIEW_CHARS - ELLIPSIS.len())
            .collect();
        return format!("{}{}", cut, ELLIPSIS);
    }

    if normalized.chars().count() > selected_chars {
        format!("{}{}", selected, ELLIPSIS)
    } else {
        selected.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_empty_preview() {
        assert_eq!(synthesize_preview(""), "");
        assert_eq!(synthesize_preview("   \n\t  "), "");
    }

    #[test]
    fn test_short_sentence_with_trailing_period_gets_ellipsis() {
        // "Short" is the selected fragment; the full text "Short." is
        // strictly longer, so truncation is signalled.
        assert_eq!(synthesize_preview("Short."), "Short...");
    }

    #[test]
    fn test_fragment_equal_to_full_text_gets_no_ellipsis() {
        assert_eq!(synthesize_preview("Short"), "Short");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(synthesize_preview("One \n two\t\tthree"), "One two three");
    }

    #[test]
    fn test_first_meaningful_sentence_is_selected() {
        let text = "Section 4. The tenant shall maintain the premises in good order. More text follows.";
        let preview = synthesize_preview(text);
        assert_eq!(
            preview,
            " The tenant shall maintain the premises in good order..."
        );
    }

    #[test]
    fn test_falls_back_to_first_fragment_when_none_meaningful() {
        let preview = synthesize_preview("One two. Three four. Five six.");
        assert_eq!(preview, "One two...");
    }

    #[test]
    fn test_long_single_sentence_truncates_to_exactly_100() {
        let text = "a".repeat(250);
        let preview = synthesize_preview(&text);
        assert_eq!(preview.chars().count(), 100);
        assert_eq!(&preview[..97], &text[..97]);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Multi-byte characters must not be split mid-codepoint.
        let text = "é".repeat(150);
        let preview = synthesize_preview(&text);
        assert_eq!(preview.chars().count(), 100);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_deterministic() {
        let text = "The landlord may enter the premises. With notice.";
        assert_eq!(synthesize_preview(text), synthesize_preview(text));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output never exceeds 100 characters unless the selected
        /// fragment itself fit under the cap with its ellipsis.
        #[test]
        fn preview_is_bounded(content in ".{0,400}") {
            let preview = synthesize_preview(&content);
            // Worst legal case: a 100-char fragment plus the ellipsis.
            prop_assert!(preview.chars().count() <= 103);
        }

        /// Previews contain no newlines or doubled spaces.
        #[test]
        fn preview_is_whitespace_normalized(content in ".{0,400}") {
            let preview = synthesize_preview(&content);
            prop_assert!(!preview.contains('\n'));
            prop_assert!(!preview.contains("  "));
        }

        /// Pure function of its input.
        #[test]
        fn preview_is_deterministic(content in ".{0,200}") {
            prop_assert_eq!(synthesize_preview(&content), synthesize_preview(&content));
        }
    }
}
