use docx_rs::{
    AlignmentType, BreakType, Docx, LineSpacing, Paragraph, Run, RunFonts, Style, StyleType,
};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::errors::DocumentError;
use crate::file_utils::FileManager;
use crate::proofreading::OutputRecord;

pub const TITLES_HEADING: &str = "TYTUŁY";
pub const LEADS_HEADING: &str = "LEADY";
pub const TAGS_HEADING: &str = "TAGI";
pub const QUOTES_HEADING: &str = "CYTATY";
pub const TEXT_HEADING: &str = "POPRAWIONY TEKST";

/// Prefix of the line listing tags picked from the fixed vocabulary
pub const TAGS_FROM_LIST_LABEL: &str = "Tagi z listy: ";
/// Prefix of the line listing free-form tags
pub const FREE_TAGS_MARKER: &str = "#";

const HEADING_STYLE_ID: &str = "SectionHeading";
const BODY_STYLE_ID: &str = "BodyText";

const HEADING_FONT: &str = "Arial";
const BODY_FONT: &str = "Times New Roman";

/// Characters removed from titles, leads and quotes
const QUOTE_MARKS: [char; 4] = ['"', '„', '”', '“'];

/// Writes the proofreading results to a `.docx` report
pub struct DocumentWriter {
    file_path: PathBuf,
}

impl DocumentWriter {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path the report is saved to
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Build the report in memory.
    ///
    /// Section order is fixed: titles, leads, tags, quotes, corrected text.
    pub fn build(output: &OutputRecord) -> Docx {
        let mut docx = Docx::new()
            .default_fonts(fonts(BODY_FONT))
            .default_size(24)
            .add_style(heading_style())
            .add_style(body_style());

        docx = docx.add_paragraph(heading(TITLES_HEADING));
        for title in &output.titles {
            docx = docx.add_paragraph(body(&strip_quote_marks(title)));
        }

        docx = docx.add_paragraph(heading(LEADS_HEADING));
        for lead in &output.leads {
            docx = docx.add_paragraph(body(&strip_quote_marks(lead)));
        }

        docx = docx
            .add_paragraph(heading(TAGS_HEADING))
            .add_paragraph(body(&tags_from_list_line(&output.tags_from_list)))
            .add_paragraph(body(&free_tags_line(&output.tags)));

        docx = docx.add_paragraph(heading(QUOTES_HEADING));
        for quote in &output.quotes {
            docx = docx.add_paragraph(body(&strip_quote_marks(quote)));
        }

        docx.add_paragraph(heading(TEXT_HEADING))
            .add_paragraph(body(&output.output_text))
    }

    /// Build and save the report, replacing any existing file at the path
    pub fn write_document(&self, output: &OutputRecord) -> Result<(), DocumentError> {
        let document = Self::build(output).build();

        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                FileManager::ensure_dir(parent).map_err(|e| self.write_error(e.to_string()))?;
            }
        }

        let file = File::create(&self.file_path).map_err(|e| self.write_error(e.to_string()))?;
        document.pack(file).map_err(|e| self.write_error(e.to_string()))?;

        info!("Report saved to {:?}", self.file_path);
        Ok(())
    }

    fn write_error(&self, reason: String) -> DocumentError {
        DocumentError::Write {
            path: self.file_path.display().to_string(),
            reason,
        }
    }
}

/// Remove literal quote characters
pub fn strip_quote_marks(text: &str) -> String {
    text.chars().filter(|c| !QUOTE_MARKS.contains(c)).collect()
}

/// Collapse accidental doubled separators (`", , "` into `", "`) until none remain
pub fn collapse_separators(line: &str) -> String {
    let mut result = line.to_string();
    while result.contains(", , ") {
        result = result.replace(", , ", ", ");
    }
    result
}

/// `Tagi z listy: a, b`
pub fn tags_from_list_line(tags: &[String]) -> String {
    collapse_separators(&format!("{}{}", TAGS_FROM_LIST_LABEL, tags.join(", ")))
}

/// `#x, y, z`
pub fn free_tags_line(tags: &[String]) -> String {
    collapse_separators(&format!("{}{}", FREE_TAGS_MARKER, tags.join(", ")))
}

fn fonts(name: &str) -> RunFonts {
    RunFonts::new().ascii(name).hi_ansi(name).cs(name).east_asia(name)
}

fn heading_style() -> Style {
    Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Section Heading")
        .based_on("Normal")
        .next(BODY_STYLE_ID)
        .fonts(fonts(HEADING_FONT))
        .size(28)
        .bold()
        .line_spacing(LineSpacing::new().before(240).after(120))
}

fn body_style() -> Style {
    Style::new(BODY_STYLE_ID, StyleType::Paragraph)
        .name("Body Text")
        .based_on("Normal")
        .fonts(fonts(BODY_FONT))
        .size(24)
        .align(AlignmentType::Both)
        .line_spacing(LineSpacing::new().line(276).after(120))
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .style(HEADING_STYLE_ID)
}

/// Body paragraph; embedded newlines become line breaks
fn body(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run).style(BODY_STYLE_ID)
}
