use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild, read_docx};
use log::{debug, error};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::DocumentError;

/// Reads the body text of a `.docx` file
pub struct DocumentReader {
    file_path: PathBuf,
}

impl DocumentReader {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the document being read
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the document and join its top-level paragraphs with newlines.
    ///
    /// Tables and other non-paragraph blocks are skipped.
    pub fn read_docx(&self) -> Result<String, DocumentError> {
        let bytes = fs::read(&self.file_path).map_err(|e| self.read_error(e.to_string()))?;
        let docx = read_docx(&bytes).map_err(|e| self.read_error(e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        debug!("Read {} paragraphs from {:?}", paragraphs.len(), self.file_path);
        Ok(paragraphs.join("\n"))
    }

    fn read_error(&self, reason: String) -> DocumentError {
        error!("Could not read {:?}: {}", self.file_path, reason);
        DocumentError::Read {
            path: self.file_path.display().to_string(),
            reason,
        }
    }
}

/// Plain text of one paragraph, including hyperlinked runs
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}
