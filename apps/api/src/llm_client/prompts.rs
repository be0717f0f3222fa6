// Shared prompt fragments for every prompt that is run against the document.
// Task-specific templates live in prompting/prompts.rs.

/// Section header placed between a user or predefined prompt and the document text.
pub const TEXT_CONTENT_HEADER: &str = "### TEXT CONTENT ###\n";

/// Section header placed between an engineered prompt and the document text.
pub const PDF_CONTENT_HEADER: &str = "### PDF CONTENT###\n";

/// Appends `header` and the joined document text to `prompt`.
/// The header is kept even when the document text is empty.
pub fn with_document(prompt: &str, header: &str, document_text: &str) -> String {
    let mut out = String::with_capacity(prompt.len() + header.len() + document_text.len());
    out.push_str(prompt);
    out.push_str(header);
    out.push_str(document_text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_document_concatenates_without_separator() {
        assert_eq!(
            with_document("Summarize", TEXT_CONTENT_HEADER, "page one.page two"),
            "Summarize### TEXT CONTENT ###\npage one.page two"
        );
    }

    #[test]
    fn test_with_document_keeps_header_for_empty_document() {
        assert_eq!(
            with_document("Engineered", PDF_CONTENT_HEADER, ""),
            "Engineered### PDF CONTENT###\n"
        );
    }
}
