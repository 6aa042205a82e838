//! Assembly of per-page OCR transcripts into one claim document.

/// Marker line inserted before each page, 1-based.
pub fn page_marker(page: usize) -> String {
    format!("--- PAGE {} ---", page)
}

/// Join page transcripts, each page preceded by its marker line.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut full_text = String::new();
    for (i, page) in pages.iter().enumerate() {
        full_text.push('\n');
        full_text.push_str(&page_marker(i + 1));
        full_text.push('\n');
        full_text.push_str(page.as_ref());
    }
    full_text
}

/// Join page transcripts with a blank line and no markers.
pub fn join_pages_plain<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|p| p.as_ref())
        .collect::<Vec<_>>()
        .join("\n\n")
}
