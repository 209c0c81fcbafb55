use crate::error::LoadError;

/// Paragraph texts and table rows of a `.docx` package, in document order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct DocxContent {
    pub paragraphs: Vec<String>,
    pub table_rows: Vec<Vec<String>>,
}

#[cfg(not(feature = "docx"))]
pub(crate) fn read_docx(_bytes: Vec<u8>) -> Result<DocxContent, LoadError> {
    Err(LoadError::MissingCapability { format: "docx" })
}

#[cfg(feature = "docx")]
pub(crate) fn read_docx(bytes: Vec<u8>) -> Result<DocxContent, LoadError> {
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| LoadError::corrupt("docx", format!("not a zip package: {err}")))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|_| LoadError::corrupt("docx", "word/document.xml is missing"))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|err| LoadError::corrupt("docx", format!("unreadable document part: {err}")))?;

    parse_document_xml(&xml)
}

/// Walks `word/document.xml`. Paragraphs nested in table cells belong to the
/// cell, not to the body paragraph list.
#[cfg(feature = "docx")]
fn parse_document_xml(xml: &str) -> Result<DocxContent, LoadError> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut content = DocxContent::default();

    let mut table_depth = 0usize;
    let mut in_text = false;
    let mut paragraph = String::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| LoadError::corrupt("docx", format!("malformed xml: {err}")))?;
        match event {
            Event::Start(tag) => match tag.name().as_ref() {
                b"w:tbl" => table_depth += 1,
                b"w:tr" if table_depth == 1 => row.clear(),
                b"w:tc" if table_depth == 1 => cell.clear(),
                b"w:p" if table_depth == 0 => paragraph.clear(),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(tag) => {
                let whitespace = match tag.name().as_ref() {
                    b"w:p" if table_depth == 0 => {
                        content.paragraphs.push(String::new());
                        None
                    }
                    b"w:tab" => Some('\t'),
                    b"w:br" | b"w:cr" => Some(' '),
                    _ => None,
                };
                if let Some(ch) = whitespace {
                    target(table_depth, &mut paragraph, &mut cell).push(ch);
                }
            }
            Event::Text(text) if in_text => {
                let text = text
                    .unescape()
                    .map_err(|err| LoadError::corrupt("docx", format!("bad text run: {err}")))?;
                target(table_depth, &mut paragraph, &mut cell).push_str(&text);
            }
            Event::End(tag) => match tag.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" if table_depth == 0 => {
                    content.paragraphs.push(std::mem::take(&mut paragraph));
                }
                b"w:p" => {
                    // Separate consecutive paragraphs inside one cell.
                    if !cell.is_empty() && !cell.ends_with(' ') {
                        cell.push(' ');
                    }
                }
                b"w:tc" if table_depth == 1 => {
                    row.push(std::mem::take(&mut cell).trim_end().to_owned());
                }
                b"w:tr" if table_depth == 1 => {
                    content.table_rows.push(std::mem::take(&mut row));
                }
                b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(content)
}

#[cfg(feature = "docx")]
fn target<'a>(table_depth: usize, paragraph: &'a mut String, cell: &'a mut String) -> &'a mut String {
    if table_depth == 0 { paragraph } else { cell }
}

#[cfg(all(test, feature = "docx"))]
mod tests {
    use crate::error::LoadError;
    use crate::test_support::{build_docx, build_docx_from_body};

    use super::read_docx;

    #[test]
    fn read_docx_splits_paragraphs_and_table_rows() {
        let bytes = build_docx(
            &["Intro", "Midterm exam on Friday", "Bring a pen"],
            &[&["Topic", "Week"], &["Final exam", "12"]],
        );

        let content = read_docx(bytes).expect("docx should parse");
        assert_eq!(
            content.paragraphs,
            vec!["Intro", "Midterm exam on Friday", "Bring a pen"]
        );
        assert_eq!(
            content.table_rows,
            vec![
                vec!["Topic".to_string(), "Week".to_string()],
                vec!["Final exam".to_string(), "12".to_string()],
            ]
        );
    }

    #[test]
    fn read_docx_joins_runs_and_unescapes_entities() {
        let bytes = build_docx_from_body(
            "<w:p><w:r><w:t>Fish &amp; </w:t></w:r><w:r><w:t>chips</w:t></w:r><w:r><w:tab/><w:t>x</w:t></w:r></w:p>",
        );

        let content = read_docx(bytes).expect("docx should parse");
        assert_eq!(content.paragraphs, vec!["Fish & chips\tx"]);
        assert!(content.table_rows.is_empty());
    }

    #[test]
    fn read_docx_rejects_non_zip_bytes() {
        let err = read_docx(b"not a zip".to_vec()).expect_err("garbage should fail");
        assert!(matches!(err, LoadError::Corrupt { format: "docx", .. }));
    }
}
