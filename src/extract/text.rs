// src/extract/text.rs

use super::IndexedText;
use crate::config::consts::HEADING_TAGS;
use crate::core::Document;
use crate::progress::Progress;

/// Number every element with a tag in `tags`, in document order, from 1.
/// Empty text is kept as an empty entry.
pub fn extract_indexed(doc: &Document, tags: &[&str]) -> Vec<IndexedText> {
    doc.elements_by_tag(tags)
        .iter()
        .enumerate()
        .map(|(i, el)| IndexedText::new(i + 1, el.text()))
        .collect()
}

pub fn extract_paragraphs(doc: &Document, progress: &mut dyn Progress) -> Vec<IndexedText> {
    let paragraphs = extract_indexed(doc, &["p"]);
    progress.info(&format!("Found {} paragraphs.", paragraphs.len()));
    paragraphs
}

/// h1..h6 in one pass, so a page's outline order survives.
pub fn extract_headers(doc: &Document, progress: &mut dyn Progress) -> Vec<IndexedText> {
    let headers = extract_indexed(doc, &HEADING_TAGS);
    progress.info(&format!("Found {} headers.", headers.len()));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{NullProgress, Recorder, Status};

    #[test]
    fn paragraphs_are_dense_and_keep_empties() {
        let doc = Document::parse_str("<p> Intro text </p><div><p></p></div><p>Third</p>");
        let out = extract_paragraphs(&doc, &mut NullProgress);
        assert_eq!(
            out,
            vec![
                IndexedText::new(1, "Intro text"),
                IndexedText::new(2, ""),
                IndexedText::new(3, "Third"),
            ]
        );
    }

    #[test]
    fn headers_interleave_levels_in_markup_order() {
        let doc = Document::parse_str(
            "<h1>Title</h1><h2>Background</h2><h3>Detail</h3><h2>Later</h2><h6>Tiny</h6>",
        );
        let out = extract_headers(&doc, &mut NullProgress);
        let texts: Vec<_> = out.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["Title", "Background", "Detail", "Later", "Tiny"]);
        let idx: Vec<_> = out.iter().map(|h| h.index).collect();
        assert_eq!(idx, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn no_matches_gives_empty_and_reports_zero() {
        let doc = Document::parse_str("<div>nothing here</div>");
        let mut rec = Recorder::new();
        assert!(extract_paragraphs(&doc, &mut rec).is_empty());
        assert!(extract_headers(&doc, &mut rec).is_empty());
        assert_eq!(rec.rendered(), vec!["[INFO] Found 0 paragraphs.", "[INFO] Found 0 headers."]);
        assert!(rec.lines.iter().all(|(st, _)| *st == Status::Info));
    }
}
