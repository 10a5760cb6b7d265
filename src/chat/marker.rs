//! Extraction of inline image-request tags from generated text.

/// Opening delimiter of an image-request tag, matched case-insensitively.
const MARKER_OPEN: &str = "[IMAGE:";

/// Scans `text` for the first image-request tag of the form
/// `[IMAGE: <query>]` and splits it out.
///
/// Matching rules:
/// - the `[IMAGE:` token is matched case-insensitively;
/// - the tag body runs to the first `]` and cannot span a line break;
/// - only the first well-formed tag is recognized, later ones are left
///   untouched in the stripped text.
///
/// # Arguments
/// * `text` - Raw text generated by the completion provider
///
/// # Returns
/// * `(String, Option<String>)` - The text with the matched tag removed and
///   surrounding whitespace trimmed, plus the trimmed query if a tag was
///   found. Without a match the original text is returned unchanged.
pub fn extract_image_marker(text: &str) -> (String, Option<String>) {
    match find_marker(text) {
        Some((start, end)) => {
            let query = text[start + MARKER_OPEN.len()..end - 1].trim().to_string();
            let mut stripped = String::with_capacity(text.len() - (end - start));
            stripped.push_str(&text[..start]);
            stripped.push_str(&text[end..]);
            (stripped.trim().to_string(), Some(query))
        }
        None => (text.to_string(), None),
    }
}

/// Finds the byte span `[start, end)` of the first well-formed tag.
fn find_marker(text: &str) -> Option<(usize, usize)> {
    let hay = text.as_bytes();
    let open = MARKER_OPEN.as_bytes();
    let mut at = 0;

    while at + open.len() <= hay.len() {
        let start = at + hay[at..]
            .windows(open.len())
            .position(|w| w.eq_ignore_ascii_case(open))?;
        let body = start + open.len();

        match hay[body..].iter().position(|&b| b == b']' || b == b'\n') {
            Some(off) if hay[body + off] == b']' => return Some((start, body + off + 1)),
            // Tag body hit a line break before closing; no earlier candidate
            // can close either, so resume scanning past the break.
            Some(off) => at = body + off + 1,
            None => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_query_and_strips_tag() {
        let (stripped, query) = extract_image_marker("Here is a cat. [IMAGE: cat]");
        assert_eq!(stripped, "Here is a cat.");
        assert_eq!(query.as_deref(), Some("cat"));
    }

    #[test]
    fn no_marker_leaves_text_unchanged() {
        let (stripped, query) = extract_image_marker("Just a plain answer.");
        assert_eq!(stripped, "Just a plain answer.");
        assert!(query.is_none());
    }

    #[test]
    fn marker_token_is_case_insensitive() {
        let (stripped, query) = extract_image_marker("Look! [image: red panda]");
        assert_eq!(stripped, "Look!");
        assert_eq!(query.as_deref(), Some("red panda"));
    }

    #[test]
    fn query_whitespace_is_trimmed() {
        let (_, query) = extract_image_marker("[IMAGE:   golden retriever  ]");
        assert_eq!(query.as_deref(), Some("golden retriever"));
    }

    #[test]
    fn only_first_marker_is_removed() {
        let (stripped, query) =
            extract_image_marker("One [IMAGE: first] and two [IMAGE: second] tags");
        assert_eq!(stripped, "One  and two [IMAGE: second] tags");
        assert_eq!(query.as_deref(), Some("first"));
    }

    #[test]
    fn marker_in_the_middle_is_removed() {
        let (stripped, query) = extract_image_marker("Before [IMAGE: mid] after.");
        assert_eq!(stripped, "Before  after.");
        assert_eq!(query.as_deref(), Some("mid"));
    }

    #[test]
    fn unclosed_marker_does_not_match() {
        let (stripped, query) = extract_image_marker("Oops [IMAGE: never closed");
        assert_eq!(stripped, "Oops [IMAGE: never closed");
        assert!(query.is_none());
    }

    #[test]
    fn marker_cannot_span_lines() {
        let (stripped, query) = extract_image_marker("A [IMAGE: broken\ntag] here");
        assert_eq!(stripped, "A [IMAGE: broken\ntag] here");
        assert!(query.is_none());
    }

    #[test]
    fn scan_resumes_after_broken_candidate() {
        let (stripped, query) = extract_image_marker("[IMAGE: a\nthen [IMAGE: b] closes");
        assert_eq!(stripped, "[IMAGE: a\nthen  closes");
        assert_eq!(query.as_deref(), Some("b"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_after_removal() {
        let (stripped, _) = extract_image_marker("  Answer.   [IMAGE: cat]  ");
        assert_eq!(stripped, "Answer.");
    }

    #[test]
    fn empty_query_is_preserved() {
        let (stripped, query) = extract_image_marker("Text [IMAGE:]");
        assert_eq!(stripped, "Text");
        assert_eq!(query.as_deref(), Some(""));
    }
}
