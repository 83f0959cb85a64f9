//! Plain-text extraction from .docx files.
//!
//! A .docx file is a zip archive whose main text lives in
//! `word/document.xml`. Extraction streams that XML with quick-xml and
//! keeps only what retrieval needs: run text, with paragraph ends mapped
//! to blank lines and explicit tabs/breaks preserved.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use askdocs_types::error::IngestError;

/// Extract raw text from every `.docx` directly inside `dir`.
///
/// Non-recursive; files with other extensions are ignored. A missing
/// directory fails the whole ingestion run.
pub fn load_docx_texts(dir: &Path) -> Result<Vec<String>, IngestError> {
    if !dir.is_dir() {
        return Err(IngestError::DocsDirMissing(dir.to_path_buf()));
    }

    let mut texts = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_docx = path.is_file()
            && path.extension().and_then(|ext| ext.to_str()) == Some("docx");
        if is_docx {
            tracing::debug!(file = %path.display(), "extracting document");
            texts.push(extract_docx_text(&path)?);
        }
    }
    Ok(texts)
}

/// Extract the body text of a single .docx file.
pub fn extract_docx_text(path: &Path) -> Result<String, IngestError> {
    let extract_err = |message: String| IngestError::Extract {
        path: path.to_path_buf(),
        message,
    };

    let file = File::open(path).map_err(|e| extract_err(e.to_string()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| extract_err(e.to_string()))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| extract_err(e.to_string()))?
        .read_to_string(&mut document_xml)
        .map_err(|e| extract_err(e.to_string()))?;

    parse_document_xml(&document_xml, path)
}

/// Walk the WordprocessingML body and collect text content.
fn parse_document_xml(xml: &str, path: &Path) -> Result<String, IngestError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut out = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| IngestError::Extract {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                out.push_str(&text);
            }
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" => out.push('\n'),
                _ => {}
            },
            Ok(Event::End(ref e)) if e.name().as_ref() == b"w:p" => {
                out.push_str("\n\n");
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(IngestError::Extract {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
            Ok(_) => {}
        }
        buf.clear();
    }

    Ok(out.trim_end().to_string())
}
